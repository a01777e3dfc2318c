use super::directive::Directive;
use super::list::Step;
use crate::Fault;
use crate::cards::Holding;
use crate::cards::Seat;
use crate::snapshot::Snapshot;

/// What a renderer holds while it follows a directive stream.
///
/// Show and Reset apply on entering a step; Play applies on leaving it, so
/// cards played from snapshot i are gone by the time snapshot i+1 is drawn.
#[derive(Debug, Clone)]
pub struct Replay {
    dealt: [Holding; 4],
    current: [Holding; 4],
    shown: [bool; 4],
    warnings: Vec<Fault>,
}

impl Replay {
    pub fn new(dealt: [Holding; 4]) -> Self {
        Self {
            dealt,
            current: dealt,
            shown: [false; 4],
            warnings: Vec::new(),
        }
    }

    /// Each seat's first visible holding.
    pub fn dealt(snapshots: &[Snapshot]) -> [Holding; 4] {
        Seat::all().map(|seat| {
            snapshots
                .iter()
                .find_map(|s| s.hands().cards(seat))
                .unwrap_or_default()
        })
    }

    pub fn holding(&self, seat: Seat) -> Holding {
        self.current[seat.index()]
    }
    pub fn is_shown(&self, seat: Seat) -> bool {
        self.shown[seat.index()]
    }
    pub fn warnings(&self) -> &[Fault] {
        &self.warnings
    }

    pub fn enter(&mut self, step: &Step) {
        for directive in step.directives.iter() {
            match directive {
                Directive::Show(reveal) => reveal
                    .seats()
                    .into_iter()
                    .for_each(|seat| self.shown[seat.index()] = true),
                Directive::Reset => self.current = self.dealt,
                _ => {}
            }
        }
    }

    pub fn leave(&mut self, step: &Step) {
        for directive in step.directives.iter() {
            if let Directive::Play(moves) = directive {
                for m in moves.iter() {
                    let holding = &mut self.current[m.seat.index()];
                    if !holding.contains(&m.card) {
                        log::warn!("{:<32}{:<32}", "inconsistent play", m);
                        self.warnings.push(Fault::InconsistentPlay {
                            snapshot: step.index,
                            seat: m.seat,
                            card: m.card,
                        });
                    }
                    holding.remove(m.card);
                }
            }
        }
    }

    /// Replays `steps` from the Deal's dealt hands and checks every seat the
    /// markup shows against the replayed table.
    pub fn verify(snapshots: &[Snapshot], steps: &[Step]) -> Vec<Fault> {
        let mut replay = Self::new(Self::dealt(snapshots));
        let mut mismatches = Vec::new();
        for (snapshot, step) in snapshots.iter().zip(steps.iter()) {
            replay.enter(step);
            for seat in snapshot.hands().visible() {
                let shown = replay.is_shown(seat);
                let agrees = snapshot.hands().cards(seat) == Some(replay.holding(seat));
                if !shown || !agrees {
                    mismatches.push(Fault::ReplayMismatch {
                        snapshot: snapshot.index(),
                        seat,
                    });
                }
            }
            replay.leave(step);
        }
        mismatches.extend(replay.warnings);
        mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::directives::Move;
    use crate::directives::Reveal;

    fn step(index: usize, directives: Vec<Directive>) -> Step {
        Step {
            index,
            analysis: String::new(),
            directives,
        }
    }

    fn dealt() -> [Holding; 4] {
        [
            Holding::try_from("SA SK").unwrap(),
            Holding::empty(),
            Holding::try_from("HA H2").unwrap(),
            Holding::empty(),
        ]
    }

    #[test]
    fn play_applies_on_leaving() {
        let mut replay = Replay::new(dealt());
        let step = step(
            1,
            vec![
                Directive::Show(Reveal::Seats(vec![Seat::N, Seat::S])),
                Directive::Play(vec![Move::try_from("N:SK").unwrap()]),
            ],
        );
        replay.enter(&step);
        assert!(replay.is_shown(Seat::N));
        assert!(!replay.is_shown(Seat::E));
        assert_eq!(replay.holding(Seat::N), Holding::try_from("SA SK").unwrap());
        replay.leave(&step);
        assert_eq!(replay.holding(Seat::N), Holding::try_from("SA").unwrap());
        assert!(replay.warnings().is_empty());
    }

    #[test]
    fn reset_restores_dealt() {
        let mut replay = Replay::new(dealt());
        replay.leave(&step(1, vec![Directive::Play(vec![Move::try_from("S:H2").unwrap()])]));
        replay.enter(&step(2, vec![Directive::Reset]));
        assert_eq!(replay.holding(Seat::S), Holding::try_from("HA H2").unwrap());
    }

    #[test]
    fn table_reveal_shows_everyone() {
        let mut replay = Replay::new(dealt());
        replay.enter(&step(1, vec![Directive::Show(Reveal::Table)]));
        assert!(Seat::all().iter().all(|s| replay.is_shown(*s)));
    }

    #[test]
    fn playing_unheld_card_warns() {
        let mut replay = Replay::new(dealt());
        replay.leave(&step(4, vec![Directive::Play(vec![Move::try_from("S:SK").unwrap()])]));
        assert_eq!(
            replay.warnings(),
            &[Fault::InconsistentPlay {
                snapshot: 4,
                seat: Seat::S,
                card: Card::try_from("SK").unwrap(),
            }]
        );
    }
}
