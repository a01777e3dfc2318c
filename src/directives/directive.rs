use crate::cards::Card;
use crate::cards::Seat;

/// One seat playing one card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Move {
    pub seat: Seat,
    pub card: Card,
}

impl From<(Seat, Card)> for Move {
    fn from((seat, card): (Seat, Card)) -> Self {
        Self { seat, card }
    }
}

/// `S:SK`
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().split_once(':') {
            Some((seat, card)) if seat.chars().count() == 1 => Ok(Self {
                seat: Seat::try_from(seat.chars().next().unwrap_or_default())?,
                card: Card::try_from(card)?,
            }),
            _ => Err(format!("invalid move: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.seat, self.card)
    }
}

/// Target of a [`Directive::Show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// Specific seats, already in the order they are to be written.
    Seats(Vec<Seat>),
    /// The whole table at once.
    Table,
}

impl Reveal {
    pub fn seats(&self) -> Vec<Seat> {
        match self {
            Self::Seats(seats) => seats.clone(),
            Self::Table => Seat::all().to_vec(),
        }
    }
}

impl std::fmt::Display for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "NESW"),
            Self::Seats(seats) => seats.iter().try_for_each(|s| write!(f, "{}", s)),
        }
    }
}

/// One replayable instruction for the renderer.
///
/// The renderer never infers state: every visibility change, played card and
/// restore is spelled out here, and absence of a directive means no change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Show(Reveal),
    Play(Vec<Move>),
    Reset,
    Advance,
    Rotate,
    AuctionVisible(bool),
    ShowLead,
    Bid(String),
}

impl Directive {
    /// Directives that change table state and precede the prose.
    pub fn is_state(&self) -> bool {
        matches!(self, Self::Show(_) | Self::Play(_) | Self::Reset)
    }
    /// Directives that end a step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Advance | Self::Rotate)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Show(reveal) => write!(f, "[show {}]", reveal),
            Self::Play(moves) => write!(
                f,
                "[PLAY {}]",
                moves
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<String>>()
                    .join(",")
            ),
            Self::Reset => write!(f, "[RESET]"),
            Self::Advance => write!(f, "[{}]", crate::ADVANCE_CONTROL),
            Self::Rotate => write!(f, "[{}]", crate::ROTATE_CONTROL),
            Self::AuctionVisible(true) => write!(f, "[AUCTION on]"),
            Self::AuctionVisible(false) => write!(f, "[AUCTION off]"),
            Self::ShowLead => write!(f, "[SHOW_LEAD]"),
            Self::Bid(call) => write!(f, "[BID {}]", call),
        }
    }
}

/// wire token isomorphism
impl TryFrom<&str> for Directive {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let body = s
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| format!("invalid directive: {}", s))?;
        let (head, rest) = body.split_once(' ').unwrap_or((body, ""));
        match (head, rest) {
            ("RESET", "") => Ok(Self::Reset),
            ("NEXT", "") => Ok(Self::Advance),
            ("ROTATE", "") => Ok(Self::Rotate),
            ("SHOW_LEAD", "") => Ok(Self::ShowLead),
            ("AUCTION", "on") => Ok(Self::AuctionVisible(true)),
            ("AUCTION", "off") => Ok(Self::AuctionVisible(false)),
            ("BID", call) => Ok(Self::Bid(call.to_string())),
            ("show", "NESW") => Ok(Self::Show(Reveal::Table)),
            ("show", seats) if !seats.is_empty() => seats
                .chars()
                .map(Seat::try_from)
                .collect::<Result<Vec<Seat>, String>>()
                .map(Reveal::Seats)
                .map(Self::Show),
            ("PLAY", moves) if !moves.is_empty() => moves
                .split(',')
                .map(Move::try_from)
                .collect::<Result<Vec<Move>, String>>()
                .map(Self::Play),
            _ => Err(format!("invalid directive: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn tokens() {
        let play = Directive::Play(vec![
            Move::from((Seat::N, card("H2"))),
            Move::from((Seat::S, card("SK"))),
        ]);
        assert_eq!(play.to_string(), "[PLAY N:H2,S:SK]");
        assert_eq!(Directive::Show(Reveal::Seats(vec![Seat::N, Seat::S])).to_string(), "[show NS]");
        assert_eq!(Directive::Show(Reveal::Table).to_string(), "[show NESW]");
        assert_eq!(Directive::Reset.to_string(), "[RESET]");
        assert_eq!(Directive::Advance.to_string(), "[NEXT]");
        assert_eq!(Directive::Rotate.to_string(), "[ROTATE]");
        assert_eq!(Directive::AuctionVisible(false).to_string(), "[AUCTION off]");
        assert_eq!(Directive::ShowLead.to_string(), "[SHOW_LEAD]");
        assert_eq!(Directive::Bid("1!S".to_string()).to_string(), "[BID 1!S]");
    }

    #[test]
    fn parses_tokens() {
        assert_eq!(Directive::try_from("[show NESW]"), Ok(Directive::Show(Reveal::Table)));
        assert_eq!(
            Directive::try_from("[show SE]"),
            Ok(Directive::Show(Reveal::Seats(vec![Seat::S, Seat::E])))
        );
        assert_eq!(
            Directive::try_from("[PLAY W:CT,E:D9]"),
            Ok(Directive::Play(vec![
                Move::from((Seat::W, card("CT"))),
                Move::from((Seat::E, card("D9"))),
            ]))
        );
        assert_eq!(Directive::try_from("[AUCTION on]"), Ok(Directive::AuctionVisible(true)));
        assert_eq!(Directive::try_from("[BID 2NT]"), Ok(Directive::Bid("2NT".to_string())));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Directive::try_from("show N").is_err());
        assert!(Directive::try_from("[show X]").is_err());
        assert!(Directive::try_from("[PLAY S-SK]").is_err());
        assert!(Directive::try_from("[NEXT please]").is_err());
        assert!(Directive::try_from("[show]").is_err());
    }

    #[test]
    fn classes() {
        assert!(Directive::Reset.is_state());
        assert!(!Directive::Bid(String::new()).is_state());
        assert!(Directive::Rotate.is_terminal());
        assert!(!Directive::ShowLead.is_terminal());
    }
}
