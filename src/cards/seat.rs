/// One of the four table positions.
///
/// Directive output is deterministic because every seat list is emitted in a
/// fixed order: [`Seat::all`] (N, E, S, W) for diffs, [`Seat::initial`]
/// (N, S, E, W, partnerships grouped) for a Deal's opening reveal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

impl Seat {
    /// Canonical order N, E, S, W.
    pub const fn all() -> [Seat; 4] {
        [Seat::N, Seat::E, Seat::S, Seat::W]
    }
    /// Legacy opening-reveal order N, S, E, W.
    pub const fn initial() -> [Seat; 4] {
        [Seat::N, Seat::S, Seat::E, Seat::W]
    }
    pub fn letter(&self) -> char {
        match self {
            Seat::N => 'N',
            Seat::E => 'E',
            Seat::S => 'S',
            Seat::W => 'W',
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Seat::N => "North",
            Seat::E => "East",
            Seat::S => "South",
            Seat::W => "West",
        }
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// char isomorphism
impl TryFrom<char> for Seat {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Seat::N),
            'E' => Ok(Seat::E),
            'S' => Ok(Seat::S),
            'W' => Ok(Seat::W),
            _ => Err(format!("invalid seat char: {}", c)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
