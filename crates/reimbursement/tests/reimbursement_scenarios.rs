use reimbursement::evaluation::{Formula, RuleKind};
use reimbursement::{
    evaluate, AmountSource, FallbackReason, ReimbursementEngine, RuleTable, TripInput,
};
use std::io::Cursor;

fn assess(days: i64, miles: f64, receipts: f64) -> reimbursement::Assessment {
    ReimbursementEngine::standard().assess(TripInput::new(days, miles, receipts))
}

fn has_two_fraction_digits(value: &str) -> bool {
    match value.split_once('.') {
        Some((whole, fraction)) => {
            let whole = whole.strip_prefix('-').unwrap_or(whole);
            !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && fraction.len() == 2
                && fraction.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[test]
fn exact_case_overrides_penalty_rule_for_one_day_trip() {
    assert_eq!(evaluate(1, 1082.0, 1809.49), "446.94");

    let assessment = assess(1, 1082.0, 1809.49);
    assert!(assessment.penalty);
    assert!(matches!(assessment.source, AmountSource::ExactCase { .. }));

    // One mile off, the over-$1800 penalty rule takes over.
    let neighbour = assess(1, 1083.0, 1809.49);
    match neighbour.source {
        AmountSource::Rule { rule, .. } => assert_eq!(rule, "1d .49 over $1800"),
        other => panic!("expected penalty rule, got {other:?}"),
    }
}

#[test]
fn three_day_outlier_returns_recorded_output() {
    assert_eq!(evaluate(3, 127.0, 293.49), "303.20");
    assert_eq!(evaluate(3, 127.0, 293.485), "303.20");
}

#[test]
fn long_trip_outliers_are_honoured() {
    assert_eq!(evaluate(11, 740.0, 1171.99), "902.09");
    assert_eq!(evaluate(14, 481.0, 939.99), "877.17");
}

#[test]
fn two_day_low_receipts_use_linear_rule() {
    assert_eq!(evaluate(2, 300.0, 50.0), "370.00");

    match assess(2, 300.0, 50.0).source {
        AmountSource::Rule { rule, capped } => {
            assert_eq!(rule, "2d under $300");
            assert!(!capped);
        }
        other => panic!("expected range rule, got {other:?}"),
    }
}

#[test]
fn range_boundaries_compare_raw_values() {
    // Displays as 300.00 but stays inside the under-$300 band.
    assert_eq!(evaluate(2, 100.0, 299.999), "285.00");
    assert_eq!(evaluate(2, 100.0, 300.0), "415.00");
}

#[test]
fn forty_nine_cent_receipts_switch_to_penalty_rules() {
    let penalised = assess(1, 200.0, 396.49);
    assert!(penalised.penalty);
    assert_eq!(penalised.formatted, "150.00");

    let regular = assess(1, 200.0, 396.50);
    assert!(!regular.penalty);
    assert_eq!(regular.formatted, "239.65");
}

#[test]
fn penalty_rules_without_coverage_leave_generic_rules_eligible() {
    // The 3-day penalty rule stops at $600; rules that never mention the flag still apply.
    let assessment = assess(3, 100.0, 700.49);
    assert!(assessment.penalty);
    assert_eq!(assessment.formatted, "745.34");
    match assessment.source {
        AmountSource::Rule { rule, .. } => assert_eq!(rule, "3d $600-1000"),
        other => panic!("expected generic rule, got {other:?}"),
    }
}

#[test]
fn eight_day_penalty_rule_covers_every_receipt_band() {
    for (miles, receipts, expected) in [
        (500.0, 1200.49, "670.05"),
        (1400.0, 1200.49, "760.05"),
        (300.0, 700.49, "600.05"),
    ] {
        let assessment = assess(8, miles, receipts);
        assert!(assessment.penalty);
        assert_eq!(assessment.formatted, expected, "8 days, {miles} miles, ${receipts}");
        match assessment.source {
            AmountSource::Rule { rule, .. } => assert_eq!(rule, "8d .49"),
            other => panic!("expected penalty rule, got {other:?}"),
        }
    }

    assert_eq!(evaluate(8, 500.0, 1200.0), "1520.00");
}

#[test]
fn mileage_thresholds_match_fitted_branches() {
    // Strict "more than X miles" branches leave exactly X miles to the lower branch.
    let rows: [(i64, f64, f64, &str); 18] = [
        (4, 499.0, 200.0, "844.05"),
        (4, 500.0, 200.0, "420.00"),
        (11, 499.0, 1200.0, "1544.55"),
        (11, 500.0, 1200.0, "1720.00"),
        (2, 600.0, 700.0, "800.00"),
        (2, 650.0, 700.0, "985.00"),
        (5, 600.0, 400.0, "925.00"),
        (2, 700.0, 700.0, "830.00"),
        (2, 701.0, 700.0, "1040.80"),
        (6, 700.0, 400.0, "975.00"),
        (7, 799.0, 400.0, "1134.25"),
        (7, 800.0, 400.0, "1105.00"),
        (8, 800.0, 400.0, "1100.00"),
        (12, 899.0, 800.0, "1814.25"),
        (12, 900.0, 800.0, "1775.00"),
        (2, 1000.0, 1200.0, "1524.00"),
        (14, 1000.0, 1200.0, "1995.00"),
        (14, 1001.0, 1200.0, "2330.35"),
    ];

    for (days, miles, receipts, expected) in rows {
        assert_eq!(
            evaluate(days, miles, receipts),
            expected,
            "{days} days, {miles} miles, ${receipts}"
        );
    }
}

#[test]
fn cap_clamps_high_receipt_trips() {
    let assessment = assess(1, 900.0, 1400.0);
    assert_eq!(assessment.formatted, "1490.00");
    assert!(matches!(
        assessment.source,
        AmountSource::Rule { capped: true, .. }
    ));
}

#[test]
fn durations_outside_table_use_fallback_formula() {
    assert_eq!(evaluate(15, 100.0, 50.0), "1590.00");
    assert_eq!(evaluate(0, 100.0, 50.0), "90.00");
    assert_eq!(evaluate(-1, 100.0, 50.0), "-10.00");

    assert_eq!(
        assess(42, 1.0, 1.0).source,
        AmountSource::Fallback {
            reason: FallbackReason::UnmappedDuration
        }
    );
}

#[test]
fn negative_miles_miss_every_band() {
    let assessment = assess(5, -10.0, 100.0);
    assert_eq!(assessment.formatted, "575.00");
    assert_eq!(
        assessment.source,
        AmountSource::Fallback {
            reason: FallbackReason::NoRuleMatched
        }
    );
}

#[test]
fn non_numeric_inputs_degrade_without_failing() {
    assert_eq!(evaluate(4, f64::NAN, 100.0), "NaN");
    assert_eq!(evaluate(20, f64::INFINITY, 0.0), "Infinity");
}

#[test]
fn sweep_is_deterministic_formatted_and_capped() {
    let engine = ReimbursementEngine::standard();
    let table = engine.table();
    let miles_samples = [0.0, 5.0, 99.5, 299.99, 300.0, 499.0, 650.0, 799.99, 905.5, 1082.0, 1400.0];
    let receipt_samples = [
        0.0, 7.49, 19.99, 99.5, 250.0, 299.999, 300.49, 575.25, 999.99, 1250.0, 1500.0, 1809.49,
        2400.0,
    ];

    for days in -1..=16 {
        for &miles in &miles_samples {
            for &receipts in &receipt_samples {
                let input = TripInput::new(days, miles, receipts);
                let first = engine.assess(input);
                let second = engine.assess(input);
                assert_eq!(first, second);
                assert!(
                    has_two_fraction_digits(&first.formatted),
                    "{input:?} produced {}",
                    first.formatted
                );

                if let AmountSource::Rule { rule, .. } = &first.source {
                    let matched = table
                        .rules_for(days)
                        .and_then(|rules| rules.iter().find(|candidate| &candidate.name == rule))
                        .expect("matched rule exists");
                    if let RuleKind::Range {
                        formula: Formula::Linear { cap: Some(cap), .. },
                        ..
                    } = matched.kind
                    {
                        assert!(first.amount <= cap, "{input:?} exceeded cap {cap}");
                    }
                }
            }
        }
    }
}

#[test]
fn custom_table_gap_falls_back() {
    let table = RuleTable::from_json_reader(Cursor::new(
        r#"{ "2": [ { "name": "cheap", "condition": { "maxReceipts": 100 },
                      "formula": { "base": 10, "milesCoeff": 1, "receiptsCoeff": 0 } } ] }"#,
    ))
    .expect("table loads");
    let engine = ReimbursementEngine::new(table);

    assert_eq!(engine.evaluate(TripInput::new(2, 5.0, 50.0)), "15.00");
    assert_eq!(engine.evaluate(TripInput::new(2, 10.0, 100.0)), "285.00");
    assert_eq!(engine.evaluate(TripInput::new(3, 10.0, 100.0)), "385.00");
}

#[test]
fn rules_excluding_penalty_skip_forty_nine_cent_receipts() {
    let excluding = RuleTable::from_json_reader(Cursor::new(
        r#"{ "8": [ { "name": "regular only", "condition": { "hasFortyNinePenalty": false },
                      "formula": { "fixed": 100 } } ] }"#,
    ))
    .expect("table loads");
    let engine = ReimbursementEngine::new(excluding);

    let penalised = engine.assess(TripInput::new(8, 500.0, 1200.49));
    assert_eq!(penalised.formatted, "2010.39");
    assert_eq!(
        penalised.source,
        AmountSource::Fallback {
            reason: FallbackReason::NoRuleMatched
        }
    );
    assert_eq!(engine.evaluate(TripInput::new(8, 500.0, 1200.0)), "100.00");

    // Without the flag the same rule serves both.
    let silent = RuleTable::from_json_reader(Cursor::new(
        r#"{ "8": [ { "name": "anyone", "formula": { "fixed": 100 } } ] }"#,
    ))
    .expect("table loads");
    let engine = ReimbursementEngine::new(silent);
    assert_eq!(engine.evaluate(TripInput::new(8, 500.0, 1200.49)), "100.00");
}
