//! Load, resolve, select, write

use crate::config::Paths;
use crate::loader::{self, TargetTable};
use crate::models::{AnswerRow, TargetRow};
use crate::resolver::{ResolveError, ZipDirectory};
use crate::selector::PlanCatalog;
use crate::writer;
use anyhow::Result;
use tracing::{debug, info};

/// How one target row was settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Priced(String),
    Ambiguous,
    NotFound,
    TooFewRates,
}

impl Outcome {
    pub fn into_rate(self) -> Option<String> {
        match self {
            Outcome::Priced(rate) => Some(rate),
            _ => None,
        }
    }
}

/// Outcome counts for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: usize,
    pub priced: usize,
    pub ambiguous: usize,
    pub not_found: usize,
    pub too_few_rates: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        self.targets += 1;
        match outcome {
            Outcome::Priced(_) => self.priced += 1,
            Outcome::Ambiguous => self.ambiguous += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::TooFewRates => self.too_few_rates += 1,
        }
    }
}

/// Settle a single ZIP against the indexed tables
pub fn evaluate(zip_code: &str, zips: &ZipDirectory<'_>, catalog: &PlanCatalog) -> Outcome {
    match zips.resolve(zip_code) {
        Ok(key) => match catalog.select(&key) {
            Some(rate) => Outcome::Priced(rate),
            None => Outcome::TooFewRates,
        },
        Err(ResolveError::Ambiguous(_)) => Outcome::Ambiguous,
        Err(ResolveError::NotFound(_)) => Outcome::NotFound,
    }
}

/// Compute the answer rows for every target, in input order
pub fn compute(
    targets: Vec<TargetRow>,
    zips: &ZipDirectory<'_>,
    catalog: &PlanCatalog,
) -> (Vec<AnswerRow>, RunSummary) {
    let mut summary = RunSummary::default();
    let rows = targets
        .into_iter()
        .map(|target| {
            let outcome = evaluate(&target.zip_code, zips, catalog);
            debug!("ZIP {}: {:?}", target.zip_code, outcome);
            summary.record(&outcome);
            target.with_rate(outcome.into_rate())
        })
        .collect();
    (rows, summary)
}

/// Run the whole batch: every input is loaded before the answer file is
/// opened, so a missing input leaves no output behind.
pub fn run(paths: &Paths) -> Result<RunSummary> {
    info!("Reading files...");
    let zips = loader::load_zips(&paths.zips)?;
    let plans = loader::load_plans(&paths.plans)?;
    let TargetTable { header, rows } = loader::load_targets(&paths.targets)?;

    let directory = ZipDirectory::new(&zips);
    let catalog = PlanCatalog::new(&plans);
    let (answers, summary) = compute(rows, &directory, &catalog);

    writer::write_answer_file(&paths.answer, &header, &answers)?;
    Ok(summary)
}
