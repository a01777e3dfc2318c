use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Holding represents an unordered set of Cards held by one seat, packed into a
/// u64 bitstring with one bit per card (52 LSBs). A bridge holding never holds
/// the same card twice, so the per-suit multiset difference between two
/// holdings is a single and-not.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Holding(u64);

impl Holding {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Cards of one suit.
    pub fn of(&self, suit: Suit) -> Holding {
        Self(self.0 & u64::from(suit))
    }
    /// Cards held here but not in `other`.
    pub fn minus(&self, other: &Holding) -> Holding {
        Self(self.0 & !other.0)
    }
    /// Cards in emission order: suits S, H, D, C, descending rank within a suit.
    pub fn canonical(&self) -> Vec<Card> {
        Suit::canonical()
            .into_iter()
            .flat_map(|suit| {
                Rank::descending()
                    .into_iter()
                    .map(move |rank| Card::from((rank, suit)))
            })
            .filter(|card| self.contains(card))
            .collect()
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// u64 isomorphism
impl From<u64> for Holding {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Holding> for u64 {
    fn from(h: Holding) -> Self {
        h.0
    }
}

impl FromIterator<Card> for Holding {
    fn from_iter<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// str isomorphism over whitespace separated suit-first cards
/// "SA SK H4" -> {SA, SK, H4}
impl TryFrom<&str> for Holding {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Holding, _>>()
    }
}

/// S:AK4 H:T86 D:- C:Q2
impl std::fmt::Display for Holding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let suits = Suit::canonical()
            .into_iter()
            .map(|suit| {
                let ranks = self
                    .of(suit)
                    .canonical()
                    .iter()
                    .map(|c| c.rank().letter())
                    .collect::<String>();
                match ranks.is_empty() {
                    true => format!("{}:-", suit),
                    false => format!("{}:{}", suit, ranks),
                }
            })
            .collect::<Vec<String>>();
        write!(f, "{}", suits.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let holding = Holding::try_from("SA SK H4 C2").unwrap();
        assert_eq!(holding, Holding::from(u64::from(holding)));
        assert_eq!(holding.size(), 4);
    }

    #[test]
    fn canonical_order() {
        let holding = Holding::try_from("C2 H4 SK DA ST SA").unwrap();
        let cards = holding
            .canonical()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        assert_eq!(cards, vec!["SA", "SK", "ST", "H4", "DA", "C2"]);
    }

    #[test]
    fn difference_per_suit() {
        let before = Holding::try_from("SA SK H4").unwrap();
        let after = Holding::try_from("SA H4 D3").unwrap();
        assert_eq!(before.minus(&after), Holding::try_from("SK").unwrap());
        assert_eq!(after.minus(&before), Holding::try_from("D3").unwrap());
    }

    #[test]
    fn ranks_in_suit() {
        let holding = Holding::try_from("SA SK H4 C2").unwrap();
        assert_eq!(holding.of(Suit::S).size(), 2);
        assert_eq!(holding.of(Suit::D).size(), 0);
    }

    #[test]
    fn compact_display() {
        let holding = Holding::try_from("SA SK S4 HT H8 H6 CQ C2").unwrap();
        assert_eq!(holding.to_string(), "S:AK4 H:T86 D:- C:Q2");
    }
}
