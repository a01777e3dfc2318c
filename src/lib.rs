//! Compiles progressively-revealed bridge lessons into replayable directive streams.
//!
//! A lesson page reveals a Deal one numbered step at a time. Each step is a
//! [`Snapshot`] of the table markup. This crate recovers the hands visible at
//! every step, diffs consecutive steps, and emits explicit [`Directive`]s so a
//! downstream renderer can replay the lesson without inferring game state.
//!
//! ## Pipeline
//!
//! - [`SnapshotExtractor`]: splits a Deal's markup into numbered snapshots
//! - [`HandExtractor`]: recovers each seat's holding with structural predicates
//! - [`Differ`]: classifies played cards, reveals and resets between steps
//! - [`Synthesizer`]: orders the per-step directive lists
//! - [`Batch`]: runs independent Deals across a worker pool
pub mod analysis;
pub mod batch;
pub mod cards;
pub mod diff;
pub mod directives;
pub mod fault;
pub mod hands;
pub mod markup;
pub mod snapshot;

pub use analysis::*;
pub use batch::*;
pub use cards::*;
pub use diff::*;
pub use directives::*;
pub use fault::*;
pub use hands::*;
pub use markup::*;
pub use snapshot::*;

// ============================================================================
// STRUCTURAL PREDICATES
// Fixed markup idioms the lesson pages use to lay out the four hands.
// ============================================================================
/// Width declarations that mark the North hand cell.
pub const NORTH_WIDTHS: [&str; 3] = ["width:6em", "width:7em", "width:8em"];
/// Height declaration that marks the South hand cell.
pub const SOUTH_HEIGHT: &str = "800px";
/// Image sitting in the middle cell of the East/West row.
pub const MARKER_IMAGE: &str = "t1.gif";

// ============================================================================
// SNAPSHOT CONTROLS
// ============================================================================
/// Markup text of the button that advances to the next step.
pub const ADVANCE_CONTROL: &str = "NEXT";
/// Markup text of the button that turns the table around.
pub const ROTATE_CONTROL: &str = "ROTATE";
/// Link target prefix of a step that jumps to another scenario.
pub const SCENARIO_LINK: &str = "href=\"deal";
/// Placeholder written into a partial auction where the student must bid.
pub const BID_PLACEHOLDER: &str = "BID";
/// Analysis phrases announcing that the next step shows the original deal.
pub const RESET_PHRASES: [&str; 2] = ["complete deal", "full deal"];

// ============================================================================
// BATCH INPUT
// ============================================================================
/// Lesson step files start with this prefix.
pub const DEAL_PREFIX: &str = "deal";
/// Lesson step files end with this suffix.
pub const DEAL_SUFFIX: &str = ".html";
/// Index pages that share the prefix but carry no Deal.
pub const DEAL_SKIPPED: [&str; 2] = ["deal00.html", "deal000.html"];
/// Upper bound on files picked up from one input tree.
pub const MAX_FILES: usize = 3000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
