//! Directive Compiler Binary
//!
//! Walks a lesson tree, compiles every Deal and writes one JSON line per Deal.
//!
//! Options: --input, --output, --threads, --anchors, --max-files

use clap::Parser;
use robobridge::*;

fn main() -> anyhow::Result<()> {
    log();
    Args::parse().run()
}
