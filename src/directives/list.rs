use super::directive::Directive;
use crate::Fault;

/// Directives of one snapshot, in emission order.
pub type DirectiveList = Vec<Directive>;

/// One snapshot's synthesized output: its prose and its directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub analysis: String,
    pub directives: DirectiveList,
}

impl Step {
    /// Wire form: each state directive followed by a literal `\n`, then the
    /// prose, then the control directives separated by spaces.
    pub fn serialize(&self) -> String {
        let state = self
            .directives
            .iter()
            .filter(|d| d.is_state())
            .map(|d| format!("{}\\n", d))
            .collect::<String>();
        let controls = self
            .directives
            .iter()
            .filter(|d| !d.is_state())
            .map(|d| format!(" {}", d))
            .collect::<String>();
        format!("{}{}{}", state, self.analysis, controls)
    }
}

/// A Deal's compiled output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealStream {
    pub name: String,
    pub steps: Vec<Step>,
    /// Recovered faults, for the reconciliation report.
    pub warnings: Vec<Fault>,
}

impl DealStream {
    /// Every directive of the Deal in snapshot order.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.steps.iter().flat_map(|step| step.directives.iter())
    }
    /// Steps joined by the literal `\n`.
    pub fn serialize(&self) -> String {
        self.steps
            .iter()
            .map(Step::serialize)
            .collect::<Vec<String>>()
            .join("\\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Seat;
    use crate::directives::Reveal;

    #[test]
    fn state_before_prose_controls_after() {
        let step = Step {
            index: 2,
            analysis: "Play low.".to_string(),
            directives: vec![
                Directive::Show(Reveal::Seats(vec![Seat::S])),
                Directive::Reset,
                Directive::Bid("1!S".to_string()),
                Directive::Advance,
            ],
        };
        assert_eq!(step.serialize(), r"[show S]\n[RESET]\nPlay low. [BID 1!S] [NEXT]");
    }

    #[test]
    fn steps_joined_with_literal_newline() {
        let stream = DealStream {
            name: "deal01".to_string(),
            steps: vec![
                Step {
                    index: 1,
                    analysis: "One.".to_string(),
                    directives: vec![Directive::Advance],
                },
                Step {
                    index: 2,
                    analysis: "Two.".to_string(),
                    directives: vec![],
                },
            ],
            warnings: vec![],
        };
        assert_eq!(stream.serialize(), r"One. [NEXT]\nTwo.");
        assert_eq!(stream.directives().count(), 1);
    }
}
