use super::controls::Controls;
use super::snapshot::Snapshot;
use crate::Fault;
use crate::analysis::Auction;
use crate::analysis::analysis_cell;
use crate::analysis::clean;
use crate::hands::HandExtractor;
use crate::markup::Document;
use crate::markup::Element;
use std::ops::Range;

/// Splits a Deal's markup into numbered snapshots and parses each one.
///
/// A snapshot begins at a numbered anchor (`<a name="3">` or `<a id="3">`)
/// and runs to the next numbered anchor or the end of its input fragment.
/// Snapshots are indexed by document order; the anchor numbers themselves are
/// not trusted.
#[derive(Debug, Clone, Default)]
pub struct SnapshotExtractor {
    hands: HandExtractor,
}

impl SnapshotExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every snapshot across the Deal's fragments. A Deal with no
    /// numbered anchors at all is [`Fault::SequenceEmpty`].
    pub fn extract<S: AsRef<str>>(&self, fragments: &[S]) -> Result<Vec<Snapshot>, Fault> {
        let snapshots = fragments
            .iter()
            .flat_map(|markup| Self::split(markup.as_ref()))
            .enumerate()
            .map(|(i, fragment)| self.snapshot(i + 1, fragment))
            .collect::<Vec<Snapshot>>();
        match snapshots.is_empty() {
            true => Err(Fault::SequenceEmpty),
            false => Ok(snapshots),
        }
    }

    /// Markup of each numbered anchor's step within one fragment.
    pub fn split(markup: &str) -> Vec<&str> {
        Self::bounds(markup)
            .into_iter()
            .filter_map(|range| markup.get(range))
            .collect()
    }

    fn bounds(markup: &str) -> Vec<Range<usize>> {
        let document = Document::parse(markup);
        let starts = document
            .find_all("a")
            .into_iter()
            .filter(|a| Self::is_numbered(a))
            .map(|a| a.span().start)
            .collect::<Vec<usize>>();
        starts
            .iter()
            .enumerate()
            .map(|(i, &start)| start..starts.get(i + 1).copied().unwrap_or(markup.len()))
            .collect()
    }

    fn is_numbered(anchor: &Element) -> bool {
        ["name", "id"]
            .iter()
            .filter_map(|key| anchor.attr(key))
            .any(|v| !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()))
    }

    /// Parses one step from its own markup alone.
    pub fn snapshot(&self, index: usize, fragment: &str) -> Snapshot {
        let document = Document::parse(fragment);
        let extraction = self.hands.extract(document.root());
        let cell = analysis_cell(document.root());
        let analysis = match cell {
            Some(cell) => clean(document.inner(cell)),
            None => {
                log::debug!("{:<32}{:<32}", "no analysis cell", index);
                String::new()
            }
        };
        let partial = cell.and_then(Auction::partial);
        let markup = cell.map_or(fragment, |cell| document.markup(cell));
        let controls = Controls::scan(markup, &analysis, partial.as_ref());
        let snapshot = Snapshot::new(
            index,
            fragment.to_string(),
            extraction.hands,
            extraction.unmatched,
            analysis,
            controls,
        );
        log::debug!("{:<32}{:<32}", "extracted snapshot", snapshot);
        snapshot
    }
}
