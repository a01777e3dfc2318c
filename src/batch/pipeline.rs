use super::deal::DealMarkup;
use crate::Fault;
use crate::analysis::Auction;
use crate::diff::Differ;
use crate::directives::DealStream;
use crate::directives::Replay;
use crate::directives::Synthesizer;
use crate::markup::Document;
use crate::snapshot::Snapshot;
use crate::snapshot::SnapshotExtractor;

/// One compiled Deal, with the intermediate results kept for reporting.
#[derive(Debug, Clone)]
pub struct Deal {
    pub markup: DealMarkup,
    pub auction: Auction,
    pub snapshots: Vec<Snapshot>,
    pub stream: DealStream,
}

/// Strict in-memory compilation of a single Deal: snapshots, hands, diffs,
/// directives, then a replay check. Holds only immutable state, so one
/// pipeline serves every worker.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    extractor: SnapshotExtractor,
    differ: Differ,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directive stream of one Deal. Fails only on [`Fault::SequenceEmpty`].
    pub fn process(&self, deal: &DealMarkup) -> Result<DealStream, Fault> {
        self.compile(deal).map(|deal| deal.stream)
    }

    pub fn compile(&self, deal: &DealMarkup) -> Result<Deal, Fault> {
        let snapshots = self.extractor.extract(&deal.fragments)?;
        let auction = Self::auction(&deal.fragments);
        let deltas = self.differ.diff(&snapshots);
        let bids = auction
            .calls()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<String>>();
        let steps = Synthesizer::new(bids).synthesize(&snapshots, &deltas);
        let mut warnings = snapshots.iter().flat_map(Snapshot::faults).collect::<Vec<Fault>>();
        warnings.extend(Replay::verify(&snapshots, &steps));
        for fault in warnings.iter() {
            log::warn!("{:<32}{:<32}", deal.name(), fault);
        }
        log::debug!("{:<32}{:<32}", "compiled deal", format!("{} ({} steps)", deal.name(), steps.len()));
        Ok(Deal {
            markup: deal.clone(),
            auction,
            stream: DealStream {
                name: deal.name(),
                steps,
                warnings,
            },
            snapshots,
        })
    }

    /// The Deal's complete auction: the last auction table across all of
    /// its fragments.
    fn auction(fragments: &[String]) -> Auction {
        fragments
            .iter()
            .rev()
            .find_map(|markup| Auction::extract(Document::parse(markup).root()))
            .unwrap_or_default()
    }
}
