mod policy;
mod rules;
mod standard;
mod table;

pub use policy::{fallback_amount, format_amount, has_forty_nine_penalty};
pub use rules::{Band, Formula, PenaltyFilter, Rule, RuleKind};
pub use table::{RuleProblem, RuleTable, RuleTableError};

use crate::config::RulesConfig;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, info};

/// The three numbers a reimbursement is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    pub days: i64,
    pub miles: f64,
    pub receipts: f64,
}

impl TripInput {
    pub fn new(days: i64, miles: f64, receipts: f64) -> Self {
        Self {
            days,
            miles,
            receipts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The table has no rule list for the trip duration.
    UnmappedDuration,
    /// Every rule for the duration was checked and none matched.
    NoRuleMatched,
}

/// Where an assessed amount came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AmountSource {
    ExactCase { rule: String },
    Rule { rule: String, capped: bool },
    Fallback { reason: FallbackReason },
}

impl AmountSource {
    pub fn summary(&self) -> String {
        match self {
            AmountSource::ExactCase { rule } => format!("exact case '{rule}'"),
            AmountSource::Rule {
                rule,
                capped: false,
            } => format!("rule '{rule}'"),
            AmountSource::Rule { rule, capped: true } => format!("rule '{rule}' (capped)"),
            AmountSource::Fallback {
                reason: FallbackReason::UnmappedDuration,
            } => "fallback formula (trip duration outside the table)".to_string(),
            AmountSource::Fallback {
                reason: FallbackReason::NoRuleMatched,
            } => "fallback formula (no rule matched)".to_string(),
        }
    }
}

/// Result of one evaluation with the trail needed to explain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub input: TripInput,
    pub penalty: bool,
    pub amount: f64,
    pub formatted: String,
    pub source: AmountSource,
}

/// Stateless evaluator walking a rule table first-match-wins.
#[derive(Debug, Clone)]
pub struct ReimbursementEngine {
    table: RuleTable,
}

impl Default for ReimbursementEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReimbursementEngine {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    /// Uses the table at `config.path` when set, the standard table otherwise.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleTableError> {
        match &config.path {
            Some(path) => {
                let table = RuleTable::from_path(path)?;
                info!(
                    path = %path.display(),
                    rules = table.rule_count(),
                    "loaded custom rule table"
                );
                Ok(Self::new(table))
            }
            None => Ok(Self::standard()),
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn assess(&self, input: TripInput) -> Assessment {
        let TripInput {
            days,
            miles,
            receipts,
        } = input;
        let penalty = has_forty_nine_penalty(receipts);

        let (amount, source) = match self.table.rules_for(days) {
            None => {
                info!(days, "trip duration outside rule table, using fallback");
                (
                    fallback_amount(days, miles, receipts),
                    AmountSource::Fallback {
                        reason: FallbackReason::UnmappedDuration,
                    },
                )
            }
            Some(rules) => match rules.iter().find(|rule| rule.applies(miles, receipts, penalty)) {
                Some(rule) => {
                    let (amount, capped) = rule.amount(miles, receipts);
                    debug!(days, rule = %rule.name, penalty, capped, "rule matched");
                    let source = if rule.is_exact() {
                        AmountSource::ExactCase {
                            rule: rule.name.clone(),
                        }
                    } else {
                        AmountSource::Rule {
                            rule: rule.name.clone(),
                            capped,
                        }
                    };
                    (amount, source)
                }
                None => {
                    info!(days, miles, receipts, penalty, "no rule matched, using fallback");
                    (
                        fallback_amount(days, miles, receipts),
                        AmountSource::Fallback {
                            reason: FallbackReason::NoRuleMatched,
                        },
                    )
                }
            },
        };

        Assessment {
            input,
            penalty,
            amount,
            formatted: format_amount(amount),
            source,
        }
    }

    pub fn evaluate(&self, input: TripInput) -> String {
        self.assess(input).formatted
    }
}

fn standard_engine() -> &'static ReimbursementEngine {
    static ENGINE: OnceLock<ReimbursementEngine> = OnceLock::new();
    ENGINE.get_or_init(ReimbursementEngine::standard)
}

/// Evaluates a trip against the standard table, returning the two-decimal amount.
pub fn evaluate(days: i64, miles: f64, receipts: f64) -> String {
    standard_engine().evaluate(TripInput::new(days, miles, receipts))
}
