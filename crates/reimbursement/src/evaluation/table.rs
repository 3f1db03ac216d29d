use super::rules::{Band, Formula, PenaltyFilter, Rule, RuleKind};
use super::standard::standard_rules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;
use tracing::warn;

/// Ordered rules keyed by trip duration. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    days: BTreeMap<i64, Vec<Rule>>,
}

impl RuleTable {
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    pub fn new(days: BTreeMap<i64, Vec<Rule>>) -> Self {
        Self { days }
    }

    pub fn rules_for(&self, days: i64) -> Option<&[Rule]> {
        self.days.get(&days).map(Vec::as_slice)
    }

    pub fn durations(&self) -> impl Iterator<Item = i64> + '_ {
        self.days.keys().copied()
    }

    pub fn rule_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Loads a table written as `{ "<days>": [ { name, condition, formula }, ... ] }`.
    ///
    /// Conditions may combine any terms. With both `exactMiles` and `exactReceipts`
    /// the rule is an exact case and its other terms are ignored; a lone exact term
    /// is ignored. Exact cases must carry a `fixed` formula.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RuleTableError> {
        let document: BTreeMap<String, Vec<RuleRecord>> = serde_json::from_reader(reader)?;
        let mut days = BTreeMap::new();

        for (key, records) in document {
            let day = key
                .trim()
                .parse::<i64>()
                .map_err(|_| RuleTableError::InvalidDay(key.clone()))?;

            let rules = records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    let name = record.name.clone();
                    record
                        .into_rule()
                        .map_err(|problem| RuleTableError::InvalidRule {
                            day,
                            index,
                            name,
                            problem,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if days.insert(day, rules).is_some() {
                return Err(RuleTableError::DuplicateDay(day));
            }
        }

        Ok(Self { days })
    }

    /// Writes the table in the same document shape `from_json_reader` accepts.
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), RuleTableError> {
        let document: BTreeMap<String, Vec<RuleRecord>> = self
            .days
            .iter()
            .map(|(day, rules)| (day.to_string(), rules.iter().map(RuleRecord::from).collect()))
            .collect();
        serde_json::to_writer_pretty(writer, &document)?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    #[error("failed to read rule table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rule table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rule table key '{0}' is not a trip duration in days")]
    InvalidDay(String),
    #[error("rule table lists day {0} more than once")]
    DuplicateDay(i64),
    #[error("day {day} rule #{index} ('{name}'): {problem}")]
    InvalidRule {
        day: i64,
        index: usize,
        name: String,
        problem: RuleProblem,
    },
}

/// Structural defects in a single rule record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleProblem {
    #[error("exact match must use a fixed formula")]
    ExactWithoutFixed,
    #[error("formula needs either fixed or all of base, milesCoeff and receiptsCoeff")]
    IncompleteFormula,
    #[error("fixed formula cannot carry linear terms")]
    MixedFormula,
    #[error("{axis} range is inverted ({min} > {max})")]
    InvertedBand {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConditionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exact_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exact_receipts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_receipts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_receipts: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_forty_nine_penalty: Option<bool>,
}

impl ConditionRecord {
    fn has_range_terms(&self) -> bool {
        self.min_receipts.is_some()
            || self.max_receipts.is_some()
            || self.min_miles.is_some()
            || self.max_miles.is_some()
            || self.has_forty_nine_penalty.is_some()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FormulaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fixed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    miles_coeff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipts_coeff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cap: Option<f64>,
}

impl FormulaRecord {
    fn into_formula(self) -> Result<Formula, RuleProblem> {
        let linear_terms = (self.base, self.miles_coeff, self.receipts_coeff);
        match (self.fixed, linear_terms) {
            (Some(amount), (None, None, None)) if self.cap.is_none() => Ok(Formula::Fixed(amount)),
            (Some(_), _) => Err(RuleProblem::MixedFormula),
            (None, (Some(base), Some(miles_coeff), Some(receipts_coeff))) => Ok(Formula::Linear {
                base,
                miles_coeff,
                receipts_coeff,
                cap: self.cap,
            }),
            (None, _) => Err(RuleProblem::IncompleteFormula),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleRecord {
    name: String,
    #[serde(default)]
    condition: ConditionRecord,
    formula: FormulaRecord,
}

impl RuleRecord {
    fn into_rule(self) -> Result<Rule, RuleProblem> {
        let RuleRecord {
            name,
            condition,
            formula,
        } = self;

        // An exact case never reaches the range tests, so its other terms are dead.
        if let (Some(miles), Some(receipts)) = (condition.exact_miles, condition.exact_receipts) {
            if condition.has_range_terms() {
                warn!(rule = %name, "ignoring range and penalty terms on exact-match rule");
            }
            return match formula.into_formula()? {
                Formula::Fixed(amount) => Ok(Rule::exact(name, miles, receipts, amount)),
                Formula::Linear { .. } => Err(RuleProblem::ExactWithoutFixed),
            };
        }

        if condition.exact_miles.is_some() || condition.exact_receipts.is_some() {
            warn!(
                rule = %name,
                "exact match needs both exactMiles and exactReceipts; reading as a range rule"
            );
        }

        let receipts = band("receipts", condition.min_receipts, condition.max_receipts)?;
        let miles = band("miles", condition.min_miles, condition.max_miles)?;
        let penalty = match condition.has_forty_nine_penalty {
            None => PenaltyFilter::Any,
            Some(true) => PenaltyFilter::Required,
            Some(false) => PenaltyFilter::Excluded,
        };

        Ok(Rule {
            name,
            kind: RuleKind::Range {
                receipts,
                miles,
                penalty,
                formula: formula.into_formula()?,
            },
        })
    }
}

fn band(axis: &'static str, min: Option<f64>, max: Option<f64>) -> Result<Band, RuleProblem> {
    let min = min.unwrap_or(Band::UNBOUNDED.min);
    let max = max.unwrap_or(Band::UNBOUNDED.max);
    if min <= max {
        Ok(Band::new(min, max))
    } else {
        Err(RuleProblem::InvertedBand { axis, min, max })
    }
}

fn bound(value: f64, default: f64) -> Option<f64> {
    (value != default).then_some(value)
}

impl From<&Rule> for RuleRecord {
    fn from(rule: &Rule) -> Self {
        let (condition, formula) = match &rule.kind {
            RuleKind::Exact {
                miles,
                receipts,
                amount,
            } => (
                ConditionRecord {
                    exact_miles: Some(*miles),
                    exact_receipts: Some(*receipts),
                    ..ConditionRecord::default()
                },
                Formula::Fixed(*amount),
            ),
            RuleKind::Range {
                receipts,
                miles,
                penalty,
                formula,
            } => (
                ConditionRecord {
                    min_receipts: bound(receipts.min, Band::UNBOUNDED.min),
                    max_receipts: bound(receipts.max, Band::UNBOUNDED.max),
                    min_miles: bound(miles.min, Band::UNBOUNDED.min),
                    max_miles: bound(miles.max, Band::UNBOUNDED.max),
                    has_forty_nine_penalty: match penalty {
                        PenaltyFilter::Any => None,
                        PenaltyFilter::Required => Some(true),
                        PenaltyFilter::Excluded => Some(false),
                    },
                    ..ConditionRecord::default()
                },
                *formula,
            ),
        };

        let formula = match formula {
            Formula::Fixed(amount) => FormulaRecord {
                fixed: Some(amount),
                ..FormulaRecord::default()
            },
            Formula::Linear {
                base,
                miles_coeff,
                receipts_coeff,
                cap,
            } => FormulaRecord {
                fixed: None,
                base: Some(base),
                miles_coeff: Some(miles_coeff),
                receipts_coeff: Some(receipts_coeff),
                cap,
            },
        };

        RuleRecord {
            name: rule.name.clone(),
            condition,
            formula,
        }
    }
}
