use crate::DEAL_PREFIX;
use crate::DEAL_SKIPPED;
use crate::DEAL_SUFFIX;
use crate::cards::Seat;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// Raw input of one Deal: where it came from and its markup fragments, in
/// order. All markup is loaded before any processing starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealMarkup {
    pub subfolder: String,
    pub filename: String,
    pub fragments: Vec<String>,
}

impl DealMarkup {
    pub fn new(subfolder: &str, filename: &str, fragments: Vec<String>) -> Self {
        Self {
            subfolder: subfolder.to_string(),
            filename: filename.to_string(),
            fragments,
        }
    }

    /// `subfolder/filename`, or just the filename at the top level.
    pub fn name(&self) -> String {
        match self.subfolder.as_str() {
            "" | "." => self.filename.clone(),
            folder => format!("{}/{}", folder, self.filename),
        }
    }

    /// The digits following `deal` in the filename.
    pub fn number(&self) -> Option<u32> {
        let digits = self
            .filename
            .strip_prefix(DEAL_PREFIX)?
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>();
        digits.parse().ok()
    }

    /// Seat the student plays from. Lesson folders on defence put the
    /// student East or West; everything else is played from South.
    pub fn student(&self, analysis: &str) -> Seat {
        match self.subfolder.as_str() {
            "OLead" => Seat::W,
            "ThirdHand" => Seat::E,
            "SecondHand" | "Signals" if analysis.contains("You are East") => Seat::E,
            "SecondHand" | "Signals" => Seat::W,
            _ => Seat::S,
        }
    }

    /// True for lesson step files, skipping the index pages.
    pub fn is_deal_file(filename: &str) -> bool {
        filename.starts_with(DEAL_PREFIX)
            && filename.ends_with(DEAL_SUFFIX)
            && !DEAL_SKIPPED.contains(&filename)
    }

    /// Every Deal file under `root`, sorted, at most `max` of them.
    pub fn discover(root: &Path, max: usize) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        Self::walk(root, &mut files)?;
        files.sort();
        files.truncate(max);
        Ok(files)
    }

    fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
        for entry in std::fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
            let path = entry.with_context(|| format!("read {}", dir.display()))?.path();
            if path.is_dir() {
                Self::walk(&path, files)?;
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(Self::is_deal_file)
            {
                files.push(path);
            }
        }
        Ok(())
    }

    /// Reads one Deal file. Old pages are not always valid UTF-8, so bytes
    /// are decoded lossily.
    pub fn load(root: &Path, path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let markup = String::from_utf8_lossy(&bytes).into_owned();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("file name of {}", path.display()))?;
        let subfolder = path
            .parent()
            .and_then(|p| p.strip_prefix(root).ok())
            .map(|p| p.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/"))
            .unwrap_or_default();
        Ok(Self::new(&subfolder, filename, vec![markup]))
    }
}
