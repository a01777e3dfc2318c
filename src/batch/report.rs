use super::pipeline::Deal;
use serde::Serialize;

/// One line of batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealReport {
    pub subfolder: String,
    pub filename: String,
    pub deal_number: Option<u32>,
    pub dealer: Option<String>,
    pub student: String,
    pub auction: String,
    pub contract: Option<String>,
    pub declarer: Option<String>,
    pub analysis: String,
    pub warnings: Vec<String>,
}

impl From<&Deal> for DealReport {
    fn from(deal: &Deal) -> Self {
        let analysis = deal.stream.serialize();
        Self {
            subfolder: deal.markup.subfolder.clone(),
            filename: deal.markup.filename.clone(),
            deal_number: deal.markup.number(),
            dealer: deal.auction.dealer().map(|s| s.name().to_string()),
            student: deal.markup.student(&analysis).name().to_string(),
            auction: deal.auction.notation(),
            contract: deal.auction.contract(),
            declarer: deal.auction.declarer().map(|s| s.name().to_string()),
            warnings: deal.stream.warnings.iter().map(|w| w.to_string()).collect(),
            analysis,
        }
    }
}

impl Deal {
    /// Per-anchor dump of what extraction found, for eyeballing fixtures.
    pub fn anchors(&self) -> String {
        let mut lines = vec![
            format!("Debug output for: {}", self.markup.name()),
            "=".repeat(60),
        ];
        for snapshot in self.snapshots.iter() {
            let found = snapshot
                .hands()
                .visible()
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>();
            lines.push(String::new());
            lines.push(format!("ANCHOR #{}", snapshot.index()));
            lines.push("-".repeat(40));
            if !snapshot.fragment().to_lowercase().contains("<table") {
                lines.push("  (no table found)".to_string());
                continue;
            }
            lines.push(match found.is_empty() {
                true => "Hands found: (none)".to_string(),
                false => format!("Hands found: {}", found.join(" ")),
            });
            lines.push(snapshot.hands().to_string());
        }
        lines.join("\n")
    }

    /// File name of the anchor dump: `Lesson/deal01.html` becomes
    /// `Lesson_deal01.txt`.
    pub fn anchors_file(&self) -> String {
        self.markup.name().replace('/', "_").replace(crate::DEAL_SUFFIX, ".txt")
    }
}
