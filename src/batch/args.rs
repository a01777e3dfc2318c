use super::batch::Batch;
use super::deal::DealMarkup;
use super::report::DealReport;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Compile lesson pages into directive streams, one JSON object per Deal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory searched recursively for deal*.html files
    #[arg(short, long)]
    pub input: PathBuf,
    /// JSON lines output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Worker threads
    #[arg(short, long, default_value_t = num_cpus::get())]
    pub threads: usize,
    /// Directory for per-deal anchor dumps
    #[arg(short, long)]
    pub anchors: Option<PathBuf>,
    /// Upper bound on files picked up
    #[arg(short, long, default_value_t = crate::MAX_FILES)]
    pub max_files: usize,
}

impl Args {
    pub fn run(&self) -> anyhow::Result<()> {
        let files = DealMarkup::discover(&self.input, self.max_files)?;
        log::info!("{:<32}{:<32}", "discovered deal files", files.len());
        let deals = files
            .iter()
            .map(|path| DealMarkup::load(&self.input, path))
            .collect::<anyhow::Result<Vec<DealMarkup>>>()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .context("build worker pool")?;
        let batch = Batch::new();
        let report = pool.install(|| batch.run(&deals));
        if let Some(dir) = self.anchors.as_ref() {
            std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
            for deal in report.deals.iter() {
                let path = dir.join(deal.anchors_file());
                std::fs::write(&path, deal.anchors())
                    .with_context(|| format!("write {}", path.display()))?;
            }
        }
        let mut reports = report.deals.iter().map(DealReport::from).collect::<Vec<_>>();
        reports.sort_by(|a, b| (&a.subfolder, &a.filename).cmp(&(&b.subfolder, &b.filename)));
        let mut sink: Box<dyn Write> = match self.output.as_ref() {
            Some(path) => Box::new(std::io::BufWriter::new(
                std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?,
            )),
            None => Box::new(std::io::stdout().lock()),
        };
        for line in reports.iter() {
            writeln!(sink, "{}", serde_json::to_string(line)?)?;
        }
        sink.flush()?;
        for (name, fault) in report.omitted.iter() {
            log::warn!("{:<32}{:<32}", "omitted", format!("{}: {}", name, fault));
        }
        Ok(())
    }
}
