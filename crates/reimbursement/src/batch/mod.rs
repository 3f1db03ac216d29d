//! Replays a case file through the evaluator and scores it against known outputs.

mod parser;

pub use parser::CaseFormat;

use crate::config::BatchConfig;
use crate::evaluation::{AmountSource, ReimbursementEngine, TripInput};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Weight of the average error in the aggregate score.
const AVERAGE_ERROR_WEIGHT: f64 = 100.0;
/// Score added for every case that is not an exact match.
const MISS_PENALTY: f64 = 0.1;

/// One trip from a case file, optionally with the output it should produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchCase {
    pub input: TripInput,
    pub expected: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read case file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV case data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON case data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("case file contains no cases")]
    Empty,
}

pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<BatchCase>, BatchError> {
    let path = path.as_ref();
    let format = CaseFormat::from_path(path);
    let file = std::fs::File::open(path)?;
    read_cases(std::io::BufReader::new(file), format)
}

pub fn read_cases<R: Read>(reader: R, format: CaseFormat) -> Result<Vec<BatchCase>, BatchError> {
    parser::parse_cases(reader, format)
}

/// Outcome of a single replayed case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    /// 1-based position in the case file.
    pub case: usize,
    pub input: TripInput,
    pub expected: Option<f64>,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
    pub source: AmountSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub total_cases: usize,
    /// Cases that carried an expected output.
    pub scored_cases: usize,
    pub exact_matches: usize,
    /// Includes the exact matches.
    pub close_matches: usize,
    pub average_error: f64,
    pub max_error: f64,
    pub score: f64,
    pub worst_cases: Vec<CaseResult>,
    pub results: Vec<CaseResult>,
}

impl BatchReport {
    pub fn exact_rate(&self) -> f64 {
        rate(self.exact_matches, self.scored_cases)
    }

    pub fn close_rate(&self) -> f64 {
        rate(self.close_matches, self.scored_cases)
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

pub struct BatchScorer<'a> {
    engine: &'a ReimbursementEngine,
    config: BatchConfig,
}

impl<'a> BatchScorer<'a> {
    pub fn new(engine: &'a ReimbursementEngine, config: BatchConfig) -> Self {
        Self { engine, config }
    }

    /// Evaluates every case and keeps the `worst` largest errors.
    pub fn score(&self, cases: &[BatchCase], worst: usize) -> BatchReport {
        let results: Vec<CaseResult> = cases
            .iter()
            .enumerate()
            .map(|(index, case)| {
                let assessment = self.engine.assess(case.input);
                let error = case.expected.map(|expected| {
                    let actual = assessment
                        .formatted
                        .parse::<f64>()
                        .unwrap_or(assessment.amount);
                    (actual - expected).abs()
                });

                CaseResult {
                    case: index + 1,
                    input: case.input,
                    expected: case.expected,
                    actual: assessment.formatted,
                    error,
                    source: assessment.source,
                }
            })
            .collect();

        let errors: Vec<f64> = results.iter().filter_map(|result| result.error).collect();
        let scored_cases = errors.len();
        let exact_matches = errors
            .iter()
            .filter(|error| **error < self.config.exact_tolerance)
            .count();
        let close_matches = errors
            .iter()
            .filter(|error| **error < self.config.close_tolerance)
            .count();
        let average_error = if scored_cases == 0 {
            0.0
        } else {
            errors.iter().sum::<f64>() / scored_cases as f64
        };
        let max_error = errors.iter().copied().fold(0.0, f64::max);
        let score = average_error * AVERAGE_ERROR_WEIGHT
            + (scored_cases - exact_matches) as f64 * MISS_PENALTY;

        let mut ranked: Vec<&CaseResult> =
            results.iter().filter(|result| result.error.is_some()).collect();
        ranked.sort_by(|a, b| {
            b.error
                .unwrap_or_default()
                .total_cmp(&a.error.unwrap_or_default())
        });
        let worst_cases = ranked.into_iter().take(worst).cloned().collect();

        info!(
            total = results.len(),
            scored = scored_cases,
            exact = exact_matches,
            close = close_matches,
            average_error,
            "batch scored"
        );

        BatchReport {
            total_cases: results.len(),
            scored_cases,
            exact_matches,
            close_matches,
            average_error,
            max_error,
            score,
            worst_cases,
            results,
        }
    }
}
