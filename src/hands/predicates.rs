//! Structural predicates locating each seat's cell in a snapshot.
//!
//! The lesson pages never label hands. Each seat is recognised purely by the
//! layout idiom its cell uses, and these idioms are a fixed contract with the
//! source markup:
//!
//! - North sits in a cell whose style declares one of [`NORTH_WIDTHS`]
//! - South sits in a cell declaring the [`SOUTH_HEIGHT`] height
//! - East and West share the row whose middle cell shows [`MARKER_IMAGE`]
//!
//! Every predicate returns candidates in document order; choosing among them
//! is the extractor's job.
use crate::MARKER_IMAGE;
use crate::NORTH_WIDTHS;
use crate::SOUTH_HEIGHT;
use crate::cards::Seat;
use crate::markup::Element;

/// Cells declaring one of the North width classes.
pub fn north_cells(root: &Element) -> Vec<&Element> {
    root.find_all("td")
        .into_iter()
        .filter(|td| NORTH_WIDTHS.iter().any(|w| td.style_declares(w)))
        .collect()
}

/// Cells declaring the South height class, either as an attribute or inline.
pub fn south_cells(root: &Element) -> Vec<&Element> {
    root.find_all("td")
        .into_iter()
        .filter(|td| {
            td.attr("height").is_some_and(|h| h.contains(SOUTH_HEIGHT))
                || td.style_declares(&format!("height:{}", SOUTH_HEIGHT))
        })
        .collect()
}

/// Cells flanking the marker image.
///
/// A row qualifies when it has at least three direct cells and the second
/// one holds an `img` whose source names the marker. The first cell of such
/// a row is East and the third is West, in that fixed positional order.
/// Returns `(east, west)` for every qualifying row, in document order.
pub fn marker_row_cells(root: &Element) -> Vec<(&Element, &Element)> {
    root.find_all("tr")
        .into_iter()
        .filter_map(|tr| {
            let cells = tr.cells();
            match cells.as_slice() {
                [first, middle, third, ..] if is_marker(middle) => Some((*first, *third)),
                _ => None,
            }
        })
        .collect()
}

/// Candidate cells for one seat.
pub fn seat_cells(root: &Element, seat: Seat) -> Vec<&Element> {
    match seat {
        Seat::N => north_cells(root),
        Seat::S => south_cells(root),
        Seat::E => marker_row_cells(root).into_iter().map(|(e, _)| e).collect(),
        Seat::W => marker_row_cells(root).into_iter().map(|(_, w)| w).collect(),
    }
}

fn is_marker(cell: &Element) -> bool {
    cell.find_all("img")
        .iter()
        .any(|img| img.attr("src").is_some_and(|src| src.ends_with(MARKER_IMAGE)))
}
