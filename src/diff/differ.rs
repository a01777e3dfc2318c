use super::delta::Delta;
use crate::cards::Seat;
use crate::directives::Move;
use crate::directives::Reveal;
use crate::hands::HandSnapshot;
use crate::snapshot::Snapshot;

/// Pairwise comparison of a Deal's snapshots.
///
/// Only seats visible on both sides of a transition are compared for plays,
/// and a seat is revealed only the first time it becomes visible, so a seat
/// that failed to parse in one snapshot never produces a play or a reveal
/// across that transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct Differ;

impl Differ {
    /// One [`Delta`] per snapshot.
    pub fn diff(&self, snapshots: &[Snapshot]) -> Vec<Delta> {
        let mut deltas = vec![Delta::default(); snapshots.len()];
        let mut shown = Vec::<Seat>::new();
        if let Some(first) = snapshots.first() {
            deltas[0].reveal = self.initial(first.hands());
            shown.extend(deltas[0].reveal.iter().flat_map(Reveal::seats));
        }
        for (i, pair) in snapshots.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            deltas[i].played = self.played(prev.hands(), next.hands());
            deltas[i + 1].reveal = self.revealed(&shown, next.hands());
            deltas[i + 1].reset = prev.announces_reset();
            shown.extend(deltas[i + 1].reveal.iter().flat_map(Reveal::seats));
        }
        for (snapshot, delta) in snapshots.iter().zip(deltas.iter()).filter(|(_, d)| !d.is_empty()) {
            log::debug!("{:<32}{:<32}", format!("diff anchor {}", snapshot.index()), delta);
        }
        deltas
    }

    /// Opening reveal: every visible seat, partnerships grouped (N, S, E, W).
    pub fn initial(&self, hands: &HandSnapshot) -> Option<Reveal> {
        let seats = Seat::initial()
            .into_iter()
            .filter(|seat| hands.get(*seat).is_visible())
            .collect::<Vec<Seat>>();
        (!seats.is_empty()).then_some(Reveal::Seats(seats))
    }

    /// Cards held in `prev` but gone in `next`, seats N, E, S, W, suits
    /// S, H, D, C, ranks high to low.
    pub fn played(&self, prev: &HandSnapshot, next: &HandSnapshot) -> Vec<Move> {
        Seat::all()
            .into_iter()
            .filter_map(|seat| Some((seat, prev.cards(seat)?, next.cards(seat)?)))
            .flat_map(|(seat, before, after)| {
                before
                    .minus(&after)
                    .canonical()
                    .into_iter()
                    .map(move |card| Move::from((seat, card)))
            })
            .collect()
    }

    /// Seats visible in `next` that were never `shown` before. East and West
    /// arriving together beside an already shown North and South is the
    /// whole table.
    pub fn revealed(&self, shown: &[Seat], next: &HandSnapshot) -> Option<Reveal> {
        let seats = Seat::all()
            .into_iter()
            .filter(|seat| !shown.contains(seat) && next.get(*seat).is_visible())
            .collect::<Vec<Seat>>();
        let table = seats == [Seat::E, Seat::W]
            && shown.contains(&Seat::N)
            && shown.contains(&Seat::S);
        match (seats.is_empty(), table) {
            (true, _) => None,
            (false, true) => Some(Reveal::Table),
            (false, false) => Some(Reveal::Seats(seats)),
        }
    }
}
