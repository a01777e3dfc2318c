use super::*;
use crate::Fault;
use crate::cards::Holding;
use crate::cards::Seat;
use crate::hands::Visibility;

fn step(anchor: &str, north: &str, east: &str, south: &str, west: &str, prose: &str) -> String {
    format!(
        r#"<a name="{anchor}"></a>
        <table>
          <tr><td></td><td style="width:7em">{north}</td><td></td><td rowspan="3">{prose}</td></tr>
          <tr><td>{east}</td><td><img src="images/t1.gif"></td><td>{west}</td></tr>
          <tr><td></td><td height="800px">{south}</td><td></td></tr>
        </table>"#
    )
}

#[test]
fn snapshots_follow_document_order() {
    let markup = [
        step("2", "", "", "♠AK ♥- ♦- ♣-", "", "First.<br><br>Click NEXT."),
        step("1", "", "", "♠A ♥- ♦- ♣-", "", "Second."),
    ]
    .concat();
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].index(), 1);
    assert_eq!(snapshots[1].index(), 2);
    assert_eq!(snapshots[0].analysis(), r"First.\nClick NEXT.");
    assert!(snapshots[0].controls().advance);
    assert!(!snapshots[1].controls().advance);
    assert_eq!(
        snapshots[1].hands().cards(Seat::S),
        Some(Holding::try_from("SA").unwrap())
    );
}

#[test]
fn fragments_are_concatenated() {
    let first = step("1", "", "", "♠AK ♥- ♦- ♣-", "", "One.");
    let second = step("2", "", "", "♠A ♥- ♦- ♣-", "", "Two.");
    let snapshots = SnapshotExtractor::new().extract(&[first, second]).unwrap();
    assert_eq!(snapshots.iter().map(|s| s.analysis()).collect::<Vec<_>>(), vec!["One.", "Two."]);
}

#[test]
fn unnumbered_anchors_are_ignored() {
    let markup = format!(
        r#"{}<a name="top"></a><a href="deal01.html">back</a>"#,
        step("1", "", "", "♠A ♥- ♦- ♣-", "", "Only.")
    );
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    assert_eq!(snapshots.len(), 1);
}

#[test]
fn controls_come_from_the_analysis_cell() {
    let last = format!(
        r#"{}<p><a href="deal02.html">NEXT deal</a> or ROTATE</p>"#,
        step("1", "", "", "♠A ♥- ♦- ♣-", "", "Only.")
    );
    let linked = step("2", "", "", "♠A ♥- ♦- ♣-", "", r#"Try <a href="deal02.html">this one</a>."#);
    let snapshots = SnapshotExtractor::new().extract(&[last]).unwrap();
    assert_eq!(snapshots[0].controls(), &Controls::default());
    let snapshots = SnapshotExtractor::new().extract(&[linked]).unwrap();
    assert!(snapshots[0].controls().scenario_link);
    assert!(!snapshots[0].controls().advance);
}

#[test]
fn controls_fall_back_to_fragment_without_cell() {
    let markup = r#"<a name="1"></a><p>prose only. NEXT</p>"#;
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    assert!(snapshots[0].controls().advance);
}

#[test]
fn no_anchors_is_empty_sequence() {
    let result = SnapshotExtractor::new().extract(&["<table><tr><td>nothing</td></tr></table>"]);
    assert_eq!(result, Err(Fault::SequenceEmpty));
}

#[test]
fn missing_seats_are_faults() {
    let markup = r#"<a name="1"></a><table><tr><td height="800px">♠A ♥- ♦- ♣-</td></tr></table>"#;
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    let faults = snapshots[0].faults();
    assert_eq!(faults.len(), 3);
    assert!(faults.contains(&Fault::SeatPatternNotFound {
        snapshot: 1,
        seat: Seat::E
    }));
}

#[test]
fn nothing_matched_is_malformed() {
    let markup = r#"<a name="1"></a><p>prose only</p>"#;
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    assert!(snapshots[0].hands().is_blank());
    assert_eq!(snapshots[0].faults(), vec![Fault::MalformedSnapshot { snapshot: 1 }]);
}

#[test]
fn placeholder_seats_are_not_faults() {
    let markup = step("1", "♠ ♥ ♦ ♣", "♠ ♥ ♦ ♣", "♠A ♥- ♦- ♣-", "♠ ♥ ♦ ♣", "Lead.");
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    assert!(snapshots[0].faults().is_empty());
    assert_eq!(snapshots[0].hands().get(Seat::N).visibility(), Visibility::Placeholder);
    assert_eq!(snapshots[0].hands().visible(), vec![Seat::S]);
}

#[test]
fn partial_auction_sets_bid_slot() {
    let markup = r#"<a name="1"></a>
        <table><tr><td>
          <table>
            <tr><td>WEST</td><td>NORTH</td><td>EAST</td><td>SOUTH</td></tr>
            <tr><td>1&clubs;</td><td>pass</td><td>BID</td><td></td></tr>
          </table>
          What do you bid?
        </td></tr></table>"#;
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    let controls = snapshots[0].controls();
    assert_eq!(controls.bid_slot, Some(3));
    assert!(controls.awaits_bid());
    assert_eq!(snapshots[0].analysis(), "What do you bid?");
}

#[test]
fn reset_phrases() {
    let markup = step("1", "", "", "♠A ♥- ♦- ♣-", "", "The Complete Deal is shown below.");
    let snapshots = SnapshotExtractor::new().extract(&[markup]).unwrap();
    assert!(snapshots[0].announces_reset());
}
