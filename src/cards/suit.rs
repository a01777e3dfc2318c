/// Card suit: clubs, diamonds, hearts, spades.
///
/// The discriminants follow bridge rank order (C < D < H < S). Lesson markup
/// always lists suits from the top down, so [`Suit::canonical`] is the order
/// used whenever suits are scanned or emitted.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in ascending order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Display and emission order: S, H, D, C.
    pub const fn canonical() -> [Suit; 4] {
        [Suit::S, Suit::H, Suit::D, Suit::C]
    }
    /// Unicode suit symbol as it appears in lesson markup.
    pub fn symbol(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    /// Wire letter used by directive tokens.
    pub fn letter(&self) -> char {
        match self {
            Suit::C => 'C',
            Suit::D => 'D',
            Suit::H => 'H',
            Suit::S => 'S',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// every card of the suit in the Holding bitmask
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::C => 0x0001111111111111,
            Suit::D => 0x0002222222222222,
            Suit::H => 0x0004444444444444,
            Suit::S => 0x0008888888888888,
        }
    }
}

/// char isomorphism
impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' | '♣' => Ok(Suit::C),
            'D' | '♦' => Ok(Suit::D),
            'H' | '♥' => Ok(Suit::H),
            'S' | '♠' => Ok(Suit::S),
            _ => Err(format!("invalid suit char: {}", c)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
