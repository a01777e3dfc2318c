//! Analysis text recovery.
//!
//! Each snapshot carries one cell of teaching prose. Earlier steps are repeated
//! in grey `<font>` runs and the partial auction sits in a nested table; both
//! are dropped. What remains is flattened to a single line where a paragraph
//! break is the literal two-character sequence `\n`.
use super::auction::Auction;
use crate::markup::Element;
use crate::markup::decode;
use regex::Regex;
use std::sync::LazyLock;

static GREY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<font[^>]*>.*?</font>").expect("grey pattern"));
static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<table[^>]*>.*?</table>").expect("table pattern"));
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>\s*<br\s*/?>").expect("paragraph pattern"));
static BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("break pattern"));
static FONT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</font\s*>").expect("font end pattern"));
static SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)</?span[^>]*>").expect("span pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>.*?</a\s*>").expect("link pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?b\s*>").expect("bold pattern"));
static TEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9])10([^0-9]|$)").expect("ten pattern"));
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.?])([A-Za-z])").expect("sentence pattern"));

/// The cell holding a snapshot's prose: the innermost cell wrapping a partial
/// auction table, else the first cell spanning three rows.
pub fn analysis_cell(root: &Element) -> Option<&Element> {
    let cells = root.find_all("td");
    cells
        .iter()
        .copied()
        .filter(|td| td.find_all("table").into_iter().any(Auction::is_auction_table))
        .reduce(|outer, inner| match outer.span().contains(&inner.span().start) {
            true => inner,
            false => outer,
        })
        .or_else(|| {
            cells
                .iter()
                .copied()
                .find(|td| td.attr("rowspan").is_some_and(|r| r.contains('3')))
        })
}

/// Flattens a prose cell's inner markup into one line of analysis text.
///
/// `<br>`, `<br/>` and `<br />` are interchangeable: two in a row make a
/// paragraph break, a single one is dropped.
pub fn clean(markup: &str) -> String {
    let text = GREY.replace_all(markup, "");
    let text = TABLE.replace_all(&text, "");
    let text = text
        .replace('\t', "")
        .replace("\n  ", "")
        .replace("\n ", "")
        .replace(['\r', '\n'], "");
    let text = PARAGRAPH.replace_all(&text, r"\n");
    let text = BREAK.replace_all(&text, "");
    let text = FONT_END.replace_all(&text, "");
    let text = SPAN.replace_all(&text, "");
    let text = LINK.replace_all(&text, "");
    let text = BOLD.replace_all(&text, "");
    let text = decode(&text).replace("\u{a0}.", ".").replace('\u{a0}', " ");
    let text = suit_tokens(&text);
    let text = TEN.replace_all(&text, "${1}T${2}").replace("--", "");
    let text = text.replace("T point", "10 point");
    let text = SENTENCE.replace_all(&text, "$1 $2");
    let mut text = text.trim().to_string();
    while let Some(rest) = text.strip_suffix(r"\n") {
        text = rest.trim_end().to_string();
    }
    text
}

/// Rewrites suit symbols as `!S`, `!H`, `!D`, `!C`.
pub fn suit_tokens(text: &str) -> String {
    text.replace('♠', "!S")
        .replace('♥', "!H")
        .replace('♦', "!D")
        .replace('♣', "!C")
}

/// Names the button a "Click to ..." sentence refers to; the page showed it
/// as an image, so the prose leaves a gap.
pub fn name_control(text: &str, label: &str) -> String {
    text.replace("lickto", &format!("lick {} to", label))
        .replace("lick.", &format!("lick {}.", label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Document;

    #[test]
    fn line_breaks_closed_and_unclosed() {
        assert_eq!(clean("One.<br><br>Two."), r"One.\nTwo.");
        assert_eq!(clean("One.<br/><br />Two."), r"One.\nTwo.");
        assert_eq!(clean("One.<BR>\n<br/>Two."), r"One.\nTwo.");
        assert_eq!(clean("One <br>more."), "One more.");
    }

    #[test]
    fn grey_history_and_auction_dropped() {
        let markup = r#"<font color="gray">Earlier step.</font><table><tr><td>WEST</td></tr></table>Now lead."#;
        assert_eq!(clean(markup), "Now lead.");
    }

    #[test]
    fn suits_and_tens() {
        assert_eq!(clean("Lead the &spades;10 with 10 points."), "Lead the !ST with 10 points.");
        assert_eq!(clean("Play ♥K then ♣2."), "Play !HK then !C2.");
        assert_eq!(clean("In 2010 we met."), "In 2010 we met.");
    }

    #[test]
    fn tags_unwrapped_and_links_dropped() {
        let markup = r#"<b>Bold</b> <span class="x">plain</span> <a href="deal02.html">Next deal</a>end"#;
        assert_eq!(clean(markup), "Bold plain end");
    }

    #[test]
    fn sentences_spaced_and_trailing_breaks_trimmed() {
        assert_eq!(clean("Win.Then draw?Yes.<br><br>"), "Win. Then draw? Yes.");
    }

    #[test]
    fn nbsp_handling() {
        assert_eq!(clean("Done&nbsp;. Next&nbsp;step"), "Done. Next step");
    }

    #[test]
    fn analysis_cell_prefers_auction_wrapper() {
        let doc = Document::parse(
            r#"<table><tr>
                 <td rowspan="3">side</td>
                 <td><table><tr><td>WEST</td><td>NORTH</td><td>EAST</td><td>SOUTH</td></tr></table>Prose</td>
               </tr></table>"#,
        );
        let cell = analysis_cell(doc.root()).unwrap();
        assert!(cell.text().contains("Prose"));
    }

    #[test]
    fn analysis_cell_is_innermost_wrapper() {
        let doc = Document::parse(
            r#"<table><tr><td>
                 <table><tr><td>hand</td></tr></table>
                 <table><tr><td><table><tr><td>WEST</td><td>NORTH</td></tr></table>Prose</td></tr></table>
               </td></tr></table>"#,
        );
        assert_eq!(analysis_cell(doc.root()).unwrap().text().trim(), "WESTNORTHProse");
    }

    #[test]
    fn analysis_cell_falls_back_to_rowspan() {
        let doc = Document::parse(r#"<table><tr><td>hand</td><td rowspan=3>Prose</td></tr></table>"#);
        assert_eq!(analysis_cell(doc.root()).unwrap().text(), "Prose");
    }

    #[test]
    fn control_names() {
        assert_eq!(name_control("Clickto continue.", "NEXT"), "Click NEXT to continue.");
        assert_eq!(name_control("Now click.", "ROTATE"), "Now click ROTATE.");
    }
}
