//! Auction tables.
//!
//! Lesson pages print the bidding as a table headed `WEST NORTH EAST SOUTH`,
//! one call per cell, row-major, with blank cells before the dealer. The last
//! such table on a page is the complete auction; each snapshot also carries a
//! partial one that ends in the [`BID_PLACEHOLDER`] wherever the student is
//! asked to bid.
use crate::BID_PLACEHOLDER;
use crate::cards::Seat;
use crate::markup::Element;

/// Column order of the auction table.
const COLUMNS: [Seat; 4] = [Seat::W, Seat::N, Seat::E, Seat::S];

/// Calls that do not name a contract.
const PASSIVE: [&str; 7] = ["pass", "all pass", "p", "double", "redouble", "x", "xx"];

/// One auction table, flattened row-major with the header row removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Auction {
    cells: Vec<String>,
}

impl Auction {
    /// True if any cell reads `WEST` and any cell reads `NORTH`.
    pub fn is_auction_table(table: &Element) -> bool {
        let cells = table.find_all("td");
        let heads = |word: &str| cells.iter().any(|td| td.text().trim().contains(word));
        heads("WEST") && heads("NORTH")
    }

    /// The last auction table under `root`: the complete bidding.
    pub fn extract(root: &Element) -> Option<Self> {
        root.find_all("table")
            .into_iter()
            .filter(|t| Self::is_auction_table(t))
            .last()
            .map(Self::from)
    }

    /// The first auction table under `root`: a snapshot's partial bidding.
    pub fn partial(root: &Element) -> Option<Self> {
        root.find_all("table")
            .into_iter()
            .find(|t| Self::is_auction_table(t))
            .map(Self::from)
    }

    /// Non-blank calls in order: the bid sequence.
    pub fn calls(&self) -> Vec<&str> {
        self.cells
            .iter()
            .map(|c| c.as_str())
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Last call written so far.
    pub fn last(&self) -> Option<&str> {
        self.calls().last().copied()
    }

    /// 1-based position of a trailing [`BID_PLACEHOLDER`] in the bid sequence.
    pub fn slot(&self) -> Option<usize> {
        let calls = self.calls();
        calls
            .last()
            .filter(|c| c.eq_ignore_ascii_case(BID_PLACEHOLDER))
            .map(|_| calls.len())
    }

    /// Seat of the first non-blank cell.
    pub fn dealer(&self) -> Option<Seat> {
        self.cells
            .iter()
            .position(|c| !c.is_empty())
            .map(|i| COLUMNS[i % 4])
    }

    /// Index of the last contract-naming cell.
    fn final_bid(&self) -> Option<usize> {
        self.cells
            .iter()
            .rposition(|c| !c.is_empty() && !Self::is_passive(c) && !c.eq_ignore_ascii_case(BID_PLACEHOLDER))
    }

    /// Final contract in letter notation (`4S`, `3NTX`), doubled or redoubled
    /// by whatever follows the final bid.
    pub fn contract(&self) -> Option<String> {
        let i = self.final_bid()?;
        let suffix = self.cells[i + 1..]
            .iter()
            .map(|c| c.to_lowercase())
            .fold("", |suffix, call| match call.as_str() {
                "double" | "x" => "X",
                "redouble" | "xx" => "XX",
                _ => suffix,
            });
        Some(format!("{}{}", Self::letters(&self.cells[i]), suffix))
    }

    /// First member of the winning partnership to name the contract strain.
    pub fn declarer(&self) -> Option<Seat> {
        let i = self.final_bid()?;
        let strain = Self::strain(&self.cells[i]);
        let first = (0..i)
            .filter(|j| j % 2 == i % 2)
            .find(|&j| Self::strain(&self.cells[j]) == strain && !strain.is_empty());
        Some(COLUMNS[first.unwrap_or(i) % 4])
    }

    /// Calls joined with spaces in letter notation, doubles as `X`/`XX`.
    pub fn notation(&self) -> String {
        self.calls()
            .iter()
            .map(|c| match c.to_lowercase().as_str() {
                "redouble" => "XX".to_string(),
                "double" => "X".to_string(),
                _ => Self::letters(c),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    fn is_passive(call: &str) -> bool {
        PASSIVE.contains(&call.to_lowercase().as_str())
    }
    fn strain(call: &str) -> String {
        Self::letters(call).chars().skip(1).collect::<String>().to_uppercase()
    }
    fn letters(call: &str) -> String {
        call.replace('♠', "S")
            .replace('♥', "H")
            .replace('♦', "D")
            .replace('♣', "C")
    }
}

impl From<&Element> for Auction {
    fn from(table: &Element) -> Self {
        let mut cells = table
            .find_all("tr")
            .into_iter()
            .skip(1)
            .flat_map(|tr| tr.cells())
            .map(|td| td.text().trim().to_string())
            .collect::<Vec<String>>();
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        Self { cells }
    }
}

impl From<Vec<String>> for Auction {
    fn from(cells: Vec<String>) -> Self {
        Self { cells }
    }
}
