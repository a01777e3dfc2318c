use super::directive::Directive;
use super::list::Step;
use crate::ADVANCE_CONTROL;
use crate::BID_PLACEHOLDER;
use crate::ROTATE_CONTROL;
use crate::analysis::name_control;
use crate::analysis::suit_tokens;
use crate::diff::Delta;
use crate::snapshot::Snapshot;

/// Orders each snapshot's directives.
///
/// Per snapshot the list is: reveal, reset, played cards, bid, and at most
/// one of advance or rotate.
#[derive(Debug, Default, Clone)]
pub struct Synthesizer {
    bids: Vec<String>,
}

impl Synthesizer {
    /// `bids` is the Deal's full bid sequence from its final auction.
    pub fn new(bids: Vec<String>) -> Self {
        Self { bids }
    }

    pub fn synthesize(&self, snapshots: &[Snapshot], deltas: &[Delta]) -> Vec<Step> {
        snapshots
            .iter()
            .zip(deltas.iter())
            .map(|(snapshot, delta)| self.step(snapshot, delta))
            .collect()
    }

    fn step(&self, snapshot: &Snapshot, delta: &Delta) -> Step {
        let controls = snapshot.controls();
        let mut directives = Vec::new();
        if let Some(reveal) = delta.reveal.clone() {
            directives.push(Directive::Show(reveal));
        }
        if delta.reset {
            directives.push(Directive::Reset);
        }
        if !delta.played.is_empty() {
            directives.push(Directive::Play(delta.played.clone()));
        }
        if controls.awaits_bid() {
            directives.push(Directive::Bid(self.call(snapshot)));
        }
        let terminal = match (controls.rotate || controls.rotate_hint, controls.advance) {
            (true, _) => Some(Directive::Rotate),
            (false, true) => Some(Directive::Advance),
            (false, false) => None,
        };
        let analysis = match terminal {
            None => snapshot.analysis().to_string(),
            Some(_) => {
                let label = match controls.rotate && !controls.rotate_hint && !controls.advance {
                    true => ROTATE_CONTROL,
                    false => ADVANCE_CONTROL,
                };
                name_control(snapshot.analysis(), label)
            }
        };
        directives.extend(terminal);
        Step {
            index: snapshot.index(),
            analysis,
            directives,
        }
    }

    /// The call a student is asked for: the full-auction call at the
    /// placeholder's position, else the partial auction's own last call,
    /// else the call at this snapshot's position.
    fn call(&self, snapshot: &Snapshot) -> String {
        let controls = snapshot.controls();
        let at = |position: usize| position.checked_sub(1).and_then(|i| self.bids.get(i)).cloned();
        controls
            .bid_slot
            .and_then(at)
            .or_else(|| {
                controls
                    .bid_text
                    .clone()
                    .filter(|text| !text.eq_ignore_ascii_case(BID_PLACEHOLDER))
            })
            .or_else(|| at(snapshot.index()))
            .map(|call| suit_tokens(&call))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Seat;
    use crate::directives::Reveal;
    use crate::hands::HandSnapshot;
    use crate::snapshot::Controls;

    fn snapshot(index: usize, analysis: &str, controls: Controls) -> Snapshot {
        Snapshot::new(
            index,
            String::new(),
            HandSnapshot::default(),
            vec![],
            analysis.to_string(),
            controls,
        )
    }

    fn bids() -> Synthesizer {
        Synthesizer::new(vec!["1♠".to_string(), "pass".to_string(), "4♠".to_string()])
    }

    #[test]
    fn order_within_a_step() {
        let controls = Controls {
            advance: true,
            ..Controls::default()
        };
        let delta = Delta {
            reveal: Some(Reveal::Seats(vec![Seat::S])),
            reset: true,
            played: vec![crate::directives::Move::try_from("S:SK").unwrap()],
        };
        let steps = bids().synthesize(&[snapshot(2, "Clickto go on.", controls)], &[delta]);
        assert_eq!(
            steps[0].directives,
            vec![
                Directive::Show(Reveal::Seats(vec![Seat::S])),
                Directive::Reset,
                Directive::Play(vec![crate::directives::Move::try_from("S:SK").unwrap()]),
                Directive::Advance,
            ]
        );
        assert_eq!(steps[0].analysis, "Click NEXT to go on.");
    }

    #[test]
    fn rotate_wins_over_advance() {
        let controls = Controls {
            advance: true,
            rotate: true,
            ..Controls::default()
        };
        let steps = bids().synthesize(&[snapshot(1, "", controls)], &[Delta::default()]);
        assert_eq!(steps[0].directives, vec![Directive::Rotate]);
    }

    #[test]
    fn rotate_hint_in_prose() {
        let controls = Controls {
            rotate_hint: true,
            ..Controls::default()
        };
        let steps = bids().synthesize(&[snapshot(1, "Rotate and click.", controls)], &[Delta::default()]);
        assert_eq!(steps[0].directives, vec![Directive::Rotate]);
        assert_eq!(steps[0].analysis, "Rotate and click NEXT.");
    }

    #[test]
    fn rotate_button_names_itself() {
        let controls = Controls {
            rotate: true,
            ..Controls::default()
        };
        let steps = bids().synthesize(&[snapshot(1, "Click.", controls)], &[Delta::default()]);
        assert_eq!(steps[0].analysis, "Click ROTATE.");
    }

    #[test]
    fn bid_from_placeholder_slot() {
        let controls = Controls {
            bid_text: Some("BID".to_string()),
            bid_slot: Some(3),
            ..Controls::default()
        };
        let steps = bids().synthesize(&[snapshot(1, "Bid?", controls)], &[Delta::default()]);
        assert_eq!(steps[0].directives, vec![Directive::Bid("4!S".to_string())]);
    }

    #[test]
    fn bid_falls_back_to_position() {
        let steps = bids().synthesize(&[snapshot(2, "", Controls::default())], &[Delta::default()]);
        assert_eq!(steps[0].directives, vec![Directive::Bid("pass".to_string())]);
        let steps = bids().synthesize(&[snapshot(9, "", Controls::default())], &[Delta::default()]);
        assert_eq!(steps[0].directives, vec![Directive::Bid(String::new())]);
    }

    #[test]
    fn no_bid_on_scenario_links() {
        let controls = Controls {
            scenario_link: true,
            ..Controls::default()
        };
        let steps = bids().synthesize(&[snapshot(1, "", controls)], &[Delta::default()]);
        assert!(steps[0].directives.is_empty());
    }
}
