use super::deal::DealMarkup;
use super::pipeline::Deal;
use super::pipeline::Pipeline;
use crate::Fault;
use crate::directives::DealStream;

/// Outcome of a batch: compiled Deals in input order, plus the Deals left
/// out and why.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub deals: Vec<Deal>,
    pub omitted: Vec<(String, Fault)>,
}

impl BatchReport {
    pub fn streams(&self) -> impl Iterator<Item = &DealStream> {
        self.deals.iter().map(|deal| &deal.stream)
    }
    /// Recovered faults across every compiled Deal.
    pub fn warnings(&self) -> usize {
        self.deals.iter().map(|deal| deal.stream.warnings.len()).sum()
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} compiled, {} omitted, {} warnings",
            self.deals.len(),
            self.omitted.len(),
            self.warnings()
        )
    }
}

/// Compiles independent Deals in parallel.
///
/// Deals share nothing mutable: each worker owns the Deal it is handed and
/// the pipeline is read-only. A Deal that fails is recorded and skipped;
/// its siblings are unaffected.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pipeline: Pipeline,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs on the current rayon pool; output order follows input order.
    pub fn run(&self, deals: &[DealMarkup]) -> BatchReport {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        log::info!("{:<32}{:<32}", "compiling deals", deals.len());
        let results = deals
            .par_iter()
            .map(|deal| (deal.name(), self.pipeline.compile(deal)))
            .collect::<Vec<(String, Result<Deal, Fault>)>>();
        let mut report = BatchReport::default();
        for (name, result) in results {
            match result {
                Ok(deal) => report.deals.push(deal),
                Err(fault) => {
                    log::warn!("{:<32}{:<32}", name, fault);
                    report.omitted.push((name, fault));
                }
            }
        }
        log::info!("{:<32}{:<32}", "batch complete", report);
        report
    }
}
