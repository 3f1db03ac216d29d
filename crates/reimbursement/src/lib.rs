//! Travel reimbursement evaluator.
//!
//! Replays a fitted rule table mapping `(days, miles, receipts)` to a two-decimal
//! reimbursement amount, plus the batch scorer used to check the table against a
//! file of known outputs.

pub mod batch;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;

pub use evaluation::{
    evaluate, format_amount, has_forty_nine_penalty, AmountSource, Assessment, FallbackReason,
    ReimbursementEngine, RuleTable, TripInput,
};
