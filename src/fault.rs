use crate::cards::Card;
use crate::cards::Seat;

/// Conditions raised while compiling a Deal.
///
/// Only [`Fault::SequenceEmpty`] is fatal, and only to its own Deal: the batch
/// records it and moves on. Everything else is recovered where it happens,
/// logged, and kept on the Deal's stream for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The Deal has no numbered anchors, so there is nothing to replay.
    SequenceEmpty,
    /// A seat's structural predicate matched no cell; the seat is absent.
    SeatPatternNotFound { snapshot: usize, seat: Seat },
    /// A played card was not in the seat's holding when it was played.
    InconsistentPlay { snapshot: usize, seat: Seat, card: Card },
    /// No seat predicate matched anything; the snapshot is all-absent.
    MalformedSnapshot { snapshot: usize },
    /// Replaying the directives disagrees with what the snapshot shows.
    ReplayMismatch { snapshot: usize, seat: Seat },
}

impl Fault {
    /// True for faults that remove the Deal from the output.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SequenceEmpty)
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SequenceEmpty => write!(f, "sequence empty: no numbered snapshots"),
            Self::SeatPatternNotFound { snapshot, seat } => {
                write!(f, "snapshot {}: no cell for {}", snapshot, seat.name())
            }
            Self::InconsistentPlay {
                snapshot,
                seat,
                card,
            } => write!(
                f,
                "snapshot {}: {} plays {} which it does not hold",
                snapshot,
                seat.name(),
                card
            ),
            Self::MalformedSnapshot { snapshot } => {
                write!(f, "snapshot {}: no seat predicate matched", snapshot)
            }
            Self::ReplayMismatch { snapshot, seat } => {
                write!(f, "snapshot {}: replayed {} differs from markup", snapshot, seat.name())
            }
        }
    }
}

impl std::error::Error for Fault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_sequences_are_fatal() {
        assert!(Fault::SequenceEmpty.is_fatal());
        assert!(!Fault::MalformedSnapshot { snapshot: 1 }.is_fatal());
        assert!(
            !Fault::SeatPatternNotFound {
                snapshot: 1,
                seat: Seat::E
            }
            .is_fatal()
        );
    }

    #[test]
    fn messages_name_the_snapshot() {
        let fault = Fault::InconsistentPlay {
            snapshot: 3,
            seat: Seat::S,
            card: Card::try_from("SK").unwrap(),
        };
        assert_eq!(fault.to_string(), "snapshot 3: South plays SK which it does not hold");
    }
}
