use crate::directives::Move;
use crate::directives::Reveal;

/// Changes attached to one snapshot.
///
/// `reveal` and `reset` take effect on entering the snapshot; `played` holds
/// the cards that leave the table between this snapshot and the next.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Delta {
    pub reveal: Option<Reveal>,
    pub reset: bool,
    pub played: Vec<Move>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.reveal.is_none() && !self.reset && self.played.is_empty()
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let reveal = self
            .reveal
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "reveal {:<5} reset {:<5} played {}",
            reveal,
            self.reset,
            self.played.len()
        )
    }
}
