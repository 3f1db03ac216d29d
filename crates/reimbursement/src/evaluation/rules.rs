/// Receipts within this distance of an exact case's total count as the same receipt.
pub(crate) const EXACT_RECEIPTS_TOLERANCE: f64 = 0.01;

/// Half-open interval `[min, max)` over raw, unrounded input values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const UNBOUNDED: Band = Band {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    pub const fn below(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    /// `(min, ∞)`: excludes `min` itself.
    pub fn above(min: f64) -> Self {
        Self::at_least(next_up(min))
    }

    /// `(min, max)`: excludes both ends.
    pub fn strictly_between(min: f64, max: f64) -> Self {
        Self::new(next_up(min), max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Smallest double greater than `value`.
fn next_up(value: f64) -> f64 {
    if value.is_nan() || value == f64::INFINITY {
        value
    } else if value == 0.0 {
        f64::from_bits(1)
    } else if value > 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        f64::from_bits(value.to_bits() - 1)
    }
}

impl Default for Band {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// How a range rule reacts to the .49 receipts penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenaltyFilter {
    /// The rule never mentions the penalty and is eligible either way.
    #[default]
    Any,
    /// Only penalised receipts are eligible.
    Required,
    /// Penalised receipts skip the rule.
    Excluded,
}

impl PenaltyFilter {
    fn admits(self, penalty: bool) -> bool {
        match self {
            PenaltyFilter::Any => true,
            PenaltyFilter::Required => penalty,
            PenaltyFilter::Excluded => !penalty,
        }
    }
}

/// Output of a matched range rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    Fixed(f64),
    Linear {
        base: f64,
        miles_coeff: f64,
        receipts_coeff: f64,
        cap: Option<f64>,
    },
}

impl Formula {
    pub const fn linear(base: f64, miles_coeff: f64, receipts_coeff: f64) -> Self {
        Formula::Linear {
            base,
            miles_coeff,
            receipts_coeff,
            cap: None,
        }
    }

    /// Returns the amount and whether the cap clamped it.
    pub fn amount(&self, miles: f64, receipts: f64) -> (f64, bool) {
        match *self {
            Formula::Fixed(amount) => (amount, false),
            Formula::Linear {
                base,
                miles_coeff,
                receipts_coeff,
                cap,
            } => {
                let raw = base + miles_coeff * miles + receipts_coeff * receipts;
                match cap {
                    Some(cap) if raw > cap => (cap, true),
                    _ => (raw, false),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// Literal output recorded for one observed `(miles, receipts)` pair.
    Exact {
        miles: f64,
        receipts: f64,
        amount: f64,
    },
    Range {
        receipts: Band,
        miles: Band,
        penalty: PenaltyFilter,
        formula: Formula,
    },
}

/// One entry of a day's ordered rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    pub kind: RuleKind,
}

impl Rule {
    pub fn exact(name: impl Into<String>, miles: f64, receipts: f64, amount: f64) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Exact {
                miles,
                receipts,
                amount,
            },
        }
    }

    /// Starts a range rule covering every input; narrow it with the builder methods.
    pub fn range(name: impl Into<String>, formula: Formula) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Range {
                receipts: Band::UNBOUNDED,
                miles: Band::UNBOUNDED,
                penalty: PenaltyFilter::Any,
                formula,
            },
        }
    }

    pub fn receipts(mut self, band: Band) -> Self {
        if let RuleKind::Range { receipts, .. } = &mut self.kind {
            *receipts = band;
        }
        self
    }

    pub fn miles(mut self, band: Band) -> Self {
        if let RuleKind::Range { miles, .. } = &mut self.kind {
            *miles = band;
        }
        self
    }

    pub fn penalty(mut self, filter: PenaltyFilter) -> Self {
        if let RuleKind::Range { penalty, .. } = &mut self.kind {
            *penalty = filter;
        }
        self
    }

    pub fn capped(mut self, limit: f64) -> Self {
        if let RuleKind::Range {
            formula: Formula::Linear { cap, .. },
            ..
        } = &mut self.kind
        {
            *cap = Some(limit);
        }
        self
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.kind, RuleKind::Exact { .. })
    }

    /// First-match test for one rule. Exact cases never fall through to range tests.
    pub fn applies(&self, miles: f64, receipts: f64, penalty: bool) -> bool {
        match &self.kind {
            RuleKind::Exact {
                miles: exact_miles,
                receipts: exact_receipts,
                ..
            } => {
                miles == *exact_miles
                    && (receipts - exact_receipts).abs() < EXACT_RECEIPTS_TOLERANCE
            }
            RuleKind::Range {
                receipts: receipt_band,
                miles: mile_band,
                penalty: filter,
                ..
            } => {
                filter.admits(penalty)
                    && receipt_band.contains(receipts)
                    && mile_band.contains(miles)
            }
        }
    }

    /// Amount produced once the rule has matched, with whether a cap applied.
    pub fn amount(&self, miles: f64, receipts: f64) -> (f64, bool) {
        match &self.kind {
            RuleKind::Exact { amount, .. } => (*amount, false),
            RuleKind::Range { formula, .. } => formula.amount(miles, receipts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_half_open_on_raw_values() {
        let band = Band::below(300.0);
        assert!(band.contains(0.0));
        assert!(band.contains(299.999));
        assert!(!band.contains(300.0));
        assert!(!band.contains(-0.01));
        assert!(!band.contains(f64::NAN));
        assert!(Band::at_least(1500.0).contains(1e9));
    }

    #[test]
    fn exclusive_lower_bounds_skip_the_threshold() {
        let over = Band::above(700.0);
        assert!(!over.contains(700.0));
        assert!(over.contains(700.0000001));

        let between = Band::strictly_between(600.0, 700.0);
        assert!(!between.contains(600.0));
        assert!(between.contains(600.5));
        assert!(!between.contains(700.0));

        assert!(Band::above(0.0).contains(f64::MIN_POSITIVE));
        assert!(!Band::above(0.0).contains(0.0));
        assert!(Band::above(-1.0).contains(-0.9999999));
    }

    #[test]
    fn exact_rule_tolerates_receipt_drift_but_not_miles() {
        let rule = Rule::exact("outlier", 740.0, 1171.99, 902.09);
        assert!(rule.applies(740.0, 1171.99, false));
        assert!(rule.applies(740.0, 1171.995, false));
        assert!(!rule.applies(740.0, 1172.5, false));
        assert!(!rule.applies(740.5, 1171.99, false));
        assert_eq!(rule.amount(740.0, 1171.99), (902.09, false));
    }

    #[test]
    fn penalty_filters_are_asymmetric() {
        let any = Rule::range("any", Formula::linear(0.0, 1.0, 0.0));
        let required = any.clone().penalty(PenaltyFilter::Required);
        let excluded = any.clone().penalty(PenaltyFilter::Excluded);

        assert!(any.applies(10.0, 10.49, true));
        assert!(any.applies(10.0, 10.0, false));
        assert!(required.applies(10.0, 10.49, true));
        assert!(!required.applies(10.0, 10.0, false));
        assert!(!excluded.applies(10.0, 10.49, true));
        assert!(excluded.applies(10.0, 10.0, false));
    }

    #[test]
    fn linear_formula_respects_cap() {
        let rule = Rule::range("capped", Formula::linear(100.0, 0.5, 0.7)).capped(1490.0);
        let (amount, capped) = rule.amount(900.0, 1400.0);
        assert_eq!(amount, 1490.0);
        assert!(capped);

        let (amount, capped) = rule.amount(100.0, 100.0);
        assert_eq!(amount, 220.0);
        assert!(!capped);
    }

    #[test]
    fn builder_methods_ignore_exact_rules() {
        let rule = Rule::exact("outlier", 1.0, 2.0, 3.0)
            .receipts(Band::below(1.0))
            .penalty(PenaltyFilter::Required)
            .capped(1.0);
        assert_eq!(rule, Rule::exact("outlier", 1.0, 2.0, 3.0));
    }
}
