use crate::ADVANCE_CONTROL;
use crate::ROTATE_CONTROL;
use crate::SCENARIO_LINK;
use crate::analysis::Auction;

/// Navigation signals found in a snapshot's markup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Controls {
    /// The step shows a button leading to the next step.
    pub advance: bool,
    /// The step shows a button that turns the table.
    pub rotate: bool,
    /// The step links out to another scenario.
    pub scenario_link: bool,
    /// The prose asks the student to rotate.
    pub rotate_hint: bool,
    /// Last call of the partial auction, as written.
    pub bid_text: Option<String>,
    /// Position of the `BID` placeholder in the full bid sequence.
    pub bid_slot: Option<usize>,
}

impl Controls {
    /// Buttons and links are read from `markup`, the analysis cell when the
    /// snapshot has one.
    pub fn scan(markup: &str, analysis: &str, partial: Option<&Auction>) -> Self {
        Self {
            advance: markup.contains(ADVANCE_CONTROL),
            rotate: markup.contains(ROTATE_CONTROL),
            scenario_link: markup.contains(SCENARIO_LINK),
            rotate_hint: analysis.to_lowercase().contains("rotate"),
            bid_text: partial.and_then(|a| a.last()).map(str::to_string),
            bid_slot: partial.and_then(|a| a.slot()),
        }
    }

    /// True when the step waits on the student's bid rather than a button.
    pub fn awaits_bid(&self) -> bool {
        !self.advance && !self.rotate && !self.scenario_link && !self.rotate_hint
    }
}
