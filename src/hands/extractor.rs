use super::predicates::seat_cells;
use super::snapshot::HandSnapshot;
use super::state::HandState;
use super::visibility::Visibility;
use crate::cards::Card;
use crate::cards::Holding;
use crate::cards::Rank;
use crate::cards::Seat;
use crate::cards::Suit;
use crate::markup::Element;
use regex::Regex;

/// Hands recovered from one snapshot, plus the seats whose structural
/// predicate matched no cell at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub hands: HandSnapshot,
    pub unmatched: Vec<Seat>,
}

/// Recovers per-seat holdings from snapshot markup.
///
/// The suit-marker and rank patterns are compiled once when the extractor is
/// built and never change afterwards, so one extractor can be shared by every
/// worker in a batch.
#[derive(Debug, Clone)]
pub struct HandExtractor {
    markers: [(Suit, char); 4],
    word: Regex,
    rank: Regex,
}

impl Default for HandExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HandExtractor {
    pub fn new() -> Self {
        Self {
            markers: Suit::canonical().map(|suit| (suit, suit.symbol())),
            word: Regex::new(r"^(?:10|[AKQJT2-9])+$").expect("rank word pattern"),
            rank: Regex::new(r"10|[AKQJT2-9]").expect("rank pattern"),
        }
    }

    /// Locates and parses all four seats. Never fails: a seat whose predicate
    /// finds nothing is recorded absent and the rest carry on.
    pub fn extract(&self, root: &Element) -> Extraction {
        let mut hands = HandSnapshot::default();
        let mut unmatched = Vec::new();
        for seat in Seat::all() {
            let cells = seat_cells(root, seat);
            if cells.is_empty() {
                unmatched.push(seat);
                continue;
            }
            hands.set(seat, self.choose(&cells));
        }
        Extraction { hands, unmatched }
    }

    /// Several cells may satisfy a predicate. The first visible hand wins,
    /// then the first placeholder; otherwise the seat stays absent.
    fn choose(&self, cells: &[&Element]) -> HandState {
        let states = cells
            .iter()
            .map(|cell| self.parse(&cell.text()))
            .collect::<Vec<HandState>>();
        states
            .iter()
            .find(|s| s.visibility() == Visibility::Visible)
            .or_else(|| states.iter().find(|s| s.visibility() == Visibility::Placeholder))
            .copied()
            .unwrap_or_else(HandState::absent)
    }

    /// Scans text for the four suit markers in S, H, D, C order and collects
    /// the rank tokens between each marker and the next.
    pub fn parse(&self, text: &str) -> HandState {
        let mut bounds = Vec::with_capacity(4);
        let mut cursor = 0;
        for &(suit, marker) in self.markers.iter() {
            match text[cursor..].find(marker) {
                None => return HandState::scanned(false, Holding::empty()),
                Some(offset) => {
                    let start = cursor + offset;
                    cursor = start + marker.len_utf8();
                    bounds.push((suit, start, cursor));
                }
            }
        }
        let holding = bounds
            .iter()
            .enumerate()
            .flat_map(|(i, &(suit, _, from))| {
                let until = bounds.get(i + 1).map(|&(_, start, _)| start).unwrap_or(text.len());
                self.ranks(&text[from..until])
                    .into_iter()
                    .map(move |rank| Card::from((rank, suit)))
            })
            .collect::<Holding>();
        HandState::scanned(true, holding)
    }

    /// Rank tokens of one suit segment. Words that are not made up entirely
    /// of ranks (labels, void dashes) are skipped.
    fn ranks(&self, segment: &str) -> Vec<Rank> {
        segment
            .split_whitespace()
            .filter(|word| self.word.is_match(word))
            .flat_map(|word| self.rank.find_iter(word))
            .filter_map(|m| Rank::try_from(m.as_str()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Document;

    fn holding(s: &str) -> Holding {
        Holding::try_from(s).unwrap()
    }

    #[test]
    fn visible_hand() {
        let state = HandExtractor::new().parse("♠ A K 4\n♥ 10 8 6\n♦ -\n♣ Q 2");
        assert_eq!(state.visibility(), Visibility::Visible);
        assert_eq!(state.holding(), holding("SA SK S4 HT H8 H6 CQ C2"));
    }

    #[test]
    fn compact_ranks() {
        let state = HandExtractor::new().parse("♠AK4 ♥T86 ♦— ♣Q2");
        assert_eq!(state.holding(), holding("SA SK S4 HT H8 H6 CQ C2"));
    }

    #[test]
    fn placeholder_hand() {
        let state = HandExtractor::new().parse("♠\n♥\n♦\n♣");
        assert_eq!(state.visibility(), Visibility::Placeholder);
    }

    #[test]
    fn missing_marker_is_absent() {
        let state = HandExtractor::new().parse("♠ A K ♥ Q ♦ J");
        assert_eq!(state.visibility(), Visibility::Absent);
        assert_eq!(state.cards(), None);
    }

    #[test]
    fn markers_out_of_order_are_absent() {
        let state = HandExtractor::new().parse("♥ Q ♠ A K ♦ J ♣ 2");
        assert_eq!(state.visibility(), Visibility::Absent);
    }

    #[test]
    fn labels_are_not_ranks() {
        let state = HandExtractor::new().parse("NORTH ♠ A ♥ - ♦ - ♣ -");
        assert_eq!(state.holding(), holding("SA"));
    }

    #[test]
    fn extract_records_unmatched_seats() {
        let doc = Document::parse(
            r#"<table>
                 <tr><td height="800px">&spades;A K&hearts;Q&diams;J&clubs;2</td></tr>
               </table>"#,
        );
        let extraction = HandExtractor::new().extract(doc.root());
        assert_eq!(extraction.hands.visible(), vec![Seat::S]);
        assert_eq!(extraction.unmatched, vec![Seat::N, Seat::E, Seat::W]);
        assert_eq!(extraction.hands.cards(Seat::S), Some(holding("SA SK HQ DJ C2")));
    }

    #[test]
    fn first_visible_candidate_wins() {
        let doc = Document::parse(
            r#"<td style="width:6em">♠♥♦♣</td>
               <td style="width:8em">♠A♥K♦Q♣J</td>
               <td style="width:7em">♠2♥3♦4♣5</td>"#,
        );
        let extraction = HandExtractor::new().extract(doc.root());
        assert_eq!(extraction.hands.cards(Seat::N), Some(holding("SA HK DQ CJ")));
    }

    #[test]
    fn placeholder_beats_absent() {
        let doc = Document::parse(r#"<td style="width:6em">blank</td><td style="width:6em">♠♥♦♣</td>"#);
        let extraction = HandExtractor::new().extract(doc.root());
        assert_eq!(extraction.hands.get(Seat::N).visibility(), Visibility::Placeholder);
        assert_eq!(extraction.unmatched, vec![Seat::S, Seat::E, Seat::W]);
    }
}
