use super::state::HandState;
use crate::cards::Holding;
use crate::cards::Seat;
use crate::cards::Suit;

/// Parsed hands of all four seats for one snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HandSnapshot([HandState; 4]);

impl HandSnapshot {
    pub fn get(&self, seat: Seat) -> &HandState {
        &self.0[seat.index()]
    }
    pub fn set(&mut self, seat: Seat, state: HandState) {
        self.0[seat.index()] = state;
    }
    /// Visible holding of a seat, if any.
    pub fn cards(&self, seat: Seat) -> Option<Holding> {
        self.get(seat).cards()
    }
    /// Visible seats in N, E, S, W order.
    pub fn visible(&self) -> Vec<Seat> {
        Seat::all()
            .into_iter()
            .filter(|seat| self.get(*seat).is_visible())
            .collect()
    }
    /// True when no seat produced a visible holding.
    pub fn is_blank(&self) -> bool {
        self.visible().is_empty()
    }

    fn suits(&self, seat: Seat) -> [String; 4] {
        match self.cards(seat) {
            None => [
                format!("({})", self.get(seat).visibility()),
                String::new(),
                String::new(),
                String::new(),
            ],
            Some(holding) => Suit::canonical().map(|suit| {
                let ranks = holding
                    .of(suit)
                    .canonical()
                    .iter()
                    .map(|c| c.rank().letter())
                    .collect::<String>();
                match ranks.is_empty() {
                    true => format!("{}: -", suit),
                    false => format!("{}: {}", suit, ranks),
                }
            }),
        }
    }
}

impl From<[HandState; 4]> for HandSnapshot {
    fn from(states: [HandState; 4]) -> Self {
        Self(states)
    }
}

/// Compass layout for anchor dumps.
///
/// ```text
///                     NORTH
///                     S: AK4
///                     ...
/// WEST                          EAST
/// S: QJ8                        S: T9
/// ```
impl std::fmt::Display for HandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pad: usize = 20;
        let north = self.suits(Seat::N);
        let south = self.suits(Seat::S);
        let east = self.suits(Seat::E);
        let west = self.suits(Seat::W);
        writeln!(f, "{:pad$}NORTH", "")?;
        for line in north.iter() {
            writeln!(f, "{:pad$}{}", "", line)?;
        }
        writeln!(f)?;
        writeln!(f, "{:<pad$}{:^10}EAST", "WEST", "")?;
        for (w, e) in west.iter().zip(east.iter()) {
            writeln!(f, "{:<pad$}{:^10}{}", w, "", e)?;
        }
        writeln!(f)?;
        writeln!(f, "{:pad$}SOUTH", "")?;
        for line in south.iter() {
            writeln!(f, "{:pad$}{}", "", line)?;
        }
        Ok(())
    }
}
