use super::controls::Controls;
use crate::Fault;
use crate::cards::Seat;
use crate::hands::HandSnapshot;

/// One numbered step of a Deal.
///
/// Built once from its own markup fragment and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    index: usize,
    fragment: String,
    hands: HandSnapshot,
    unmatched: Vec<Seat>,
    analysis: String,
    controls: Controls,
}

impl Snapshot {
    pub fn new(
        index: usize,
        fragment: String,
        hands: HandSnapshot,
        unmatched: Vec<Seat>,
        analysis: String,
        controls: Controls,
    ) -> Self {
        Self {
            index,
            fragment,
            hands,
            unmatched,
            analysis,
            controls,
        }
    }
    /// 1-based position in markup order.
    pub fn index(&self) -> usize {
        self.index
    }
    /// Markup from this snapshot's anchor up to the next one.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
    pub fn hands(&self) -> &HandSnapshot {
        &self.hands
    }
    pub fn analysis(&self) -> &str {
        &self.analysis
    }
    pub fn controls(&self) -> &Controls {
        &self.controls
    }
    /// Seats whose predicate matched no cell.
    pub fn unmatched(&self) -> &[Seat] {
        &self.unmatched
    }

    /// Recovered extraction faults: one per unmatched seat, or a single
    /// [`Fault::MalformedSnapshot`] when nothing matched at all.
    pub fn faults(&self) -> Vec<Fault> {
        match self.unmatched.len() {
            4 => vec![Fault::MalformedSnapshot {
                snapshot: self.index,
            }],
            _ => self
                .unmatched
                .iter()
                .map(|&seat| Fault::SeatPatternNotFound {
                    snapshot: self.index,
                    seat,
                })
                .collect(),
        }
    }

    /// True if the prose announces the original deal on the next step.
    pub fn announces_reset(&self) -> bool {
        let text = self.analysis.to_lowercase();
        crate::RESET_PHRASES.iter().any(|phrase| text.contains(phrase))
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let seats = self
            .hands
            .visible()
            .iter()
            .map(|s| s.letter())
            .collect::<String>();
        write!(f, "anchor {:>3} visible [{:<4}]", self.index, seats)
    }
}
