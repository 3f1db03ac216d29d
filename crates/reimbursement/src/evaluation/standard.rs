use super::rules::{Band, Formula, PenaltyFilter, Rule};
use std::collections::BTreeMap;

use PenaltyFilter::Required;

fn linear(name: &str, base: f64, miles_coeff: f64, receipts_coeff: f64) -> Rule {
    Rule::range(name, Formula::linear(base, miles_coeff, receipts_coeff))
}

/// Fitted rules for trips of one to fourteen days, in priority order.
pub(crate) fn standard_rules() -> BTreeMap<i64, Vec<Rule>> {
    BTreeMap::from([
        (1, one_day()),
        (2, two_day()),
        (3, three_day()),
        (4, four_day()),
        (5, five_day()),
        (6, six_day()),
        (7, seven_day()),
        (8, eight_day()),
        (9, nine_day()),
        (10, ten_day()),
        (11, eleven_day()),
        (12, twelve_day()),
        (13, thirteen_day()),
        (14, fourteen_day()),
    ])
}

fn one_day() -> Vec<Rule> {
    vec![
        Rule::exact("1d outlier 1082mi $1809.49", 1082.0, 1809.49, 446.94),
        linear("1d .49 under $400", 100.0, 0.25, 0.0)
            .receipts(Band::below(400.0))
            .penalty(Required),
        linear("1d .49 $400-600", 100.0, 0.30, 0.0)
            .receipts(Band::new(400.0, 600.0))
            .penalty(Required),
        linear("1d .49 over $1800", 100.0, 0.32, 0.0)
            .receipts(Band::at_least(1800.0))
            .penalty(Required),
        linear("1d .49 $600-1800", 100.0, 0.35, 0.10)
            .receipts(Band::new(600.0, 1800.0))
            .penalty(Required),
        linear("1d under $20", 100.0, 0.58, 0.0).receipts(Band::below(20.0)),
        linear("1d $20-100", 100.0, 0.55, 0.30).receipts(Band::new(20.0, 100.0)),
        linear("1d $100-250", 85.0, 0.48, 0.35).receipts(Band::new(100.0, 250.0)),
        linear("1d $250-300", 100.0, 0.45, 0.0).receipts(Band::new(250.0, 300.0)),
        linear("1d $300-600", 100.0, 0.50, 0.10).receipts(Band::new(300.0, 600.0)),
        linear("1d $600-1000", 100.0, 0.40, 0.65).receipts(Band::new(600.0, 1000.0)),
        linear("1d $1000-1500", 100.0, 0.50, 0.70)
            .receipts(Band::new(1000.0, 1500.0))
            .capped(1490.0),
        linear("1d over $1500", 100.0, 0.30, 0.50)
            .receipts(Band::at_least(1500.0))
            .capped(1350.0),
    ]
}

fn two_day() -> Vec<Rule> {
    vec![
        linear("2d .49 under $500", 150.0, 0.24, 0.0)
            .receipts(Band::below(500.0))
            .penalty(Required),
        linear("2d .49 $500-600", 150.0, 0.30, 0.0)
            .receipts(Band::new(500.0, 600.0))
            .penalty(Required),
        linear("2d .49 over $600", 200.0, 0.38, 0.0)
            .receipts(Band::at_least(600.0))
            .penalty(Required),
        linear("2d under $300", 200.0, 0.55, 0.10).receipts(Band::below(300.0)),
        linear("2d $300-600", 180.0, 0.25, 0.70).receipts(Band::new(300.0, 600.0)),
        linear("2d $600-1000 over 700mi", 200.0, 0.80, 0.40)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::above(700.0)),
        linear("2d $600-1000 600-700mi", 200.0, 0.40, 0.75)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::strictly_between(600.0, 700.0)),
        // Also catches exactly 600 and 700 miles.
        linear("2d $600-1000", 200.0, 0.30, 0.60).receipts(Band::new(600.0, 1000.0)),
        linear("2d $1000-1500 over 1000mi", 350.0, 0.50, 0.70)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::above(1000.0)),
        linear("2d $1000-1500", 280.0, 0.38, 0.72).receipts(Band::new(1000.0, 1500.0)),
        linear("2d over $1500 under 300mi", 250.0, 0.65, 0.55)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(300.0))
            .capped(1350.0),
        linear("2d over $1500 300-500mi", 200.0, 0.70, 0.60)
            .receipts(Band::at_least(1500.0))
            .miles(Band::new(300.0, 500.0))
            .capped(1400.0),
        linear("2d over $1500 over 500mi", 400.0, 0.20, 0.50)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(500.0))
            .capped(1500.0),
    ]
}

fn three_day() -> Vec<Rule> {
    vec![
        Rule::exact("3d outlier 127mi $293.49", 127.0, 293.49, 303.20),
        linear("3d .49 under $600", 150.0, 1.20, 0.0)
            .receipts(Band::below(600.0))
            .penalty(Required),
        linear("3d under $20", 300.0, 0.70, 0.35).receipts(Band::below(20.0)),
        linear("3d $20-100", 350.0, 0.35, 0.65).receipts(Band::new(20.0, 100.0)),
        linear("3d $100-300", 250.0, 0.45, 0.30).receipts(Band::new(100.0, 300.0)),
        linear("3d $300-600", 200.0, 0.45, 0.45).receipts(Band::new(300.0, 600.0)),
        linear("3d $600-1000", 200.0, 0.55, 0.70).receipts(Band::new(600.0, 1000.0)),
        linear("3d $1000-1500", 400.0, 0.30, 0.65).receipts(Band::new(1000.0, 1500.0)),
        linear("3d over $1500 under 300mi", 350.0, 0.20, 0.55)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(300.0))
            .capped(1400.0),
        linear("3d over $1500 300-600mi", 400.0, 0.65, 0.35)
            .receipts(Band::at_least(1500.0))
            .miles(Band::new(300.0, 600.0))
            .capped(1450.0),
        linear("3d over $1500 over 600mi", 350.0, 0.30, 0.45)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(600.0))
            .capped(1600.0),
    ]
}

fn four_day() -> Vec<Rule> {
    vec![
        linear("4d .49", 25.0, 0.90, 0.10).penalty(Required),
        linear("4d under $100", 425.0, 0.30, 0.30).receipts(Band::below(100.0)),
        linear("4d $100-300 under 500mi", 350.0, 0.95, 0.10)
            .receipts(Band::new(100.0, 300.0))
            .miles(Band::below(500.0)),
        linear("4d $100-300", 75.0, 0.65, 0.10)
            .receipts(Band::new(100.0, 300.0))
            .miles(Band::at_least(500.0)),
        linear("4d $300-600 under 500mi", 275.0, 0.75, 0.45)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(500.0)),
        linear("4d $300-600", 325.0, 0.20, 0.85)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(500.0)),
        linear("4d $600-1000 under 500mi", 0.0, 0.85, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(500.0)),
        linear("4d $600-1000", 350.0, 0.15, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(500.0)),
        linear("4d $1000-1500 under 500mi", 550.0, 0.45, 0.55)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(500.0)),
        linear("4d $1000-1500", 325.0, 0.35, 0.70)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(500.0)),
        linear("4d over $1500", 600.0, 0.85, 0.30)
            .receipts(Band::at_least(1500.0))
            .capped(1600.0),
    ]
}

fn five_day() -> Vec<Rule> {
    vec![
        linear("5d .49", 350.0, 0.25, 0.10).penalty(Required),
        linear("5d under $100", 325.0, 0.55, 0.95).receipts(Band::below(100.0)),
        linear("5d $100-300 under 600mi", 350.0, 0.95, 0.10)
            .receipts(Band::new(100.0, 300.0))
            .miles(Band::below(600.0)),
        linear("5d $100-300", 700.0, 0.15, 0.10)
            .receipts(Band::new(100.0, 300.0))
            .miles(Band::at_least(600.0)),
        linear("5d $300-600 under 600mi", 375.0, 0.55, 0.40)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(600.0)),
        linear("5d $300-600", 525.0, 0.10, 0.85)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(600.0)),
        linear("5d $600-1000 under 600mi", 200.0, 0.40, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(600.0)),
        linear("5d $600-1000", 425.0, 0.25, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(600.0)),
        linear("5d $1000-1500 under 600mi", 700.0, 0.45, 0.50)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(600.0))
            .capped(1600.0),
        linear("5d $1000-1500", 425.0, 0.10, 0.95)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(600.0))
            .capped(1700.0),
        linear("5d over $1500 under 600mi", 675.0, 0.95, 0.35)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(600.0))
            .capped(1600.0),
        linear("5d over $1500", 375.0, 0.80, 0.50)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(600.0))
            .capped(1700.0),
    ]
}

fn six_day() -> Vec<Rule> {
    vec![
        linear("6d under $300 under 700mi", 425.0, 0.45, 0.95)
            .receipts(Band::below(300.0))
            .miles(Band::below(700.0)),
        linear("6d under $300", 800.0, 0.25, 0.10)
            .receipts(Band::below(300.0))
            .miles(Band::at_least(700.0)),
        linear("6d $300-600 under 700mi", 300.0, 0.70, 0.65)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(700.0)),
        linear("6d $300-600", 350.0, 0.35, 0.95)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(700.0)),
        linear("6d $600-1000 under 700mi", 300.0, 0.55, 0.85)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(700.0)),
        linear("6d $600-1000", 425.0, 0.50, 0.75)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(700.0)),
        linear("6d $1000-1500 under 700mi", 800.0, 0.30, 0.55)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(700.0))
            .capped(1600.0),
        linear("6d $1000-1500", 575.0, 0.55, 0.60)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(700.0))
            .capped(1800.0),
        linear("6d over $1500 under 700mi", 650.0, 0.95, 0.40)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(700.0))
            .capped(1700.0),
        linear("6d over $1500", 675.0, 0.75, 0.25)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(700.0))
            .capped(1800.0),
    ]
}

fn seven_day() -> Vec<Rule> {
    vec![
        linear("7d .49 under $1500", 450.0, 0.80, 0.40)
            .receipts(Band::below(1500.0))
            .penalty(Required),
        linear("7d under $300 under 800mi", 550.0, 0.45, 0.35)
            .receipts(Band::below(300.0))
            .miles(Band::below(800.0)),
        linear("7d under $300", 700.0, 0.55, 0.20)
            .receipts(Band::below(300.0))
            .miles(Band::at_least(800.0)),
        linear("7d $300-600 under 800mi", 475.0, 0.75, 0.15)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(800.0)),
        linear("7d $300-600", 425.0, 0.75, 0.20)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(800.0)),
        linear("7d $600-1000 under 800mi", 400.0, 0.95, 0.45)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(800.0)),
        linear("7d $600-1000", 425.0, 0.60, 0.75)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(800.0)),
        linear("7d $1000-1500 under 800mi", 450.0, 0.50, 0.70)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(800.0))
            .capped(1900.0),
        linear("7d $1000-1500", 900.0, 0.95, 0.10)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(800.0)),
        linear("7d over $1500 under 800mi", 825.0, 0.70, 0.25)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(800.0))
            .capped(1800.0),
        linear("7d over $1500", 650.0, 0.95, 0.20)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(800.0))
            .capped(1900.0),
    ]
}

fn eight_day() -> Vec<Rule> {
    vec![
        linear("8d .49", 500.0, 0.10, 0.10).penalty(Required),
        linear("8d under $300", 525.0, 0.50, 0.30).receipts(Band::below(300.0)),
        linear("8d $300-600 under 800mi", 550.0, 0.85, 0.10)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(800.0)),
        linear("8d $300-600", 500.0, 0.30, 0.90)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(800.0)),
        linear("8d $600-1000 under 800mi", 500.0, 0.20, 0.65)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(800.0)),
        linear("8d $600-1000", 925.0, 0.15, 0.75)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(800.0)),
        linear("8d $1000-1500 under 800mi", 1000.0, 0.20, 0.35)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(800.0))
            .capped(1700.0),
        linear("8d $1000-1500", 1000.0, 0.85, 0.10)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(800.0)),
        linear("8d over $1500 under 800mi", 1000.0, 0.15, 0.20)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(800.0))
            .capped(1700.0),
        linear("8d over $1500", 775.0, 0.95, 0.10)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(800.0))
            .capped(1800.0),
    ]
}

fn nine_day() -> Vec<Rule> {
    vec![
        linear("9d .49", 650.0, 0.40, 0.30).penalty(Required),
        linear("9d under $300 under 800mi", 650.0, 0.45, 0.15)
            .receipts(Band::below(300.0))
            .miles(Band::below(800.0)),
        linear("9d under $300", 1050.0, 0.10, 0.65)
            .receipts(Band::below(300.0))
            .miles(Band::at_least(800.0)),
        linear("9d $300-600 under 800mi", 625.0, 0.45, 0.15)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(800.0)),
        linear("9d $300-600", 600.0, 0.25, 0.95)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(800.0)),
        linear("9d $600-1000 under 800mi", 625.0, 0.15, 0.65)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(800.0)),
        linear("9d $600-1000", 800.0, 0.65, 0.30)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(800.0)),
        linear("9d $1000-1500 under 800mi", 800.0, 0.25, 0.55)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(800.0))
            .capped(1800.0),
        linear("9d $1000-1500", 775.0, 0.95, 0.20)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(800.0)),
        linear("9d over $1500 under 800mi", 1100.0, 0.25, 0.20)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(800.0))
            .capped(1800.0),
        linear("9d over $1500", 650.0, 0.80, 0.20)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(800.0))
            .capped(1800.0),
    ]
}

fn ten_day() -> Vec<Rule> {
    vec![
        linear("10d under $300", 700.0, 0.35, 0.45).receipts(Band::below(300.0)),
        linear("10d $300-600", 700.0, 0.55, 0.10).receipts(Band::new(300.0, 600.0)),
        linear("10d $600-1000 under 900mi", 700.0, 0.65, 0.50)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(900.0)),
        linear("10d $600-1000", 700.0, 0.35, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(900.0)),
        linear("10d $1000-1500", 700.0, 0.55, 0.60)
            .receipts(Band::new(1000.0, 1500.0))
            .capped(2000.0),
        linear("10d over $1500 under 900mi", 1200.0, 0.30, 0.15)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(900.0))
            .capped(1900.0),
        linear("10d over $1500", 800.0, 0.85, 0.10)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(900.0))
            .capped(2100.0),
    ]
}

fn eleven_day() -> Vec<Rule> {
    vec![
        Rule::exact("11d outlier 740mi $1171.99", 740.0, 1171.99, 902.09),
        linear("11d under $300 under 900mi", 700.0, 0.60, 0.30)
            .receipts(Band::below(300.0))
            .miles(Band::below(900.0)),
        linear("11d under $300", 950.0, 0.50, 0.35)
            .receipts(Band::below(300.0))
            .miles(Band::at_least(900.0)),
        linear("11d $300-600", 775.0, 0.45, 0.10).receipts(Band::new(300.0, 600.0)),
        linear("11d $600-1000", 700.0, 0.95, 0.20).receipts(Band::new(600.0, 1000.0)),
        linear("11d $1000-1500 under 500mi", 900.0, 0.45, 0.35)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(500.0))
            .capped(1800.0),
        linear("11d $1000-1500 500-900mi", 975.0, 0.65, 0.35)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::new(500.0, 900.0))
            .capped(2000.0),
        linear("11d $1000-1500", 875.0, 0.95, 0.10)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(900.0))
            .capped(2100.0),
        linear("11d over $1500 under 500mi", 1200.0, 0.20, 0.20)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(500.0))
            .capped(2200.0),
        linear("11d over $1500 500-900mi", 1000.0, 0.20, 0.35)
            .receipts(Band::at_least(1500.0))
            .miles(Band::new(500.0, 900.0))
            .capped(2200.0),
        linear("11d over $1500", 500.0, 0.60, 0.25)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(900.0))
            .capped(2200.0),
    ]
}

fn twelve_day() -> Vec<Rule> {
    vec![
        linear("12d under $300", 775.0, 0.55, 0.10).receipts(Band::below(300.0)),
        linear("12d $300-600", 700.0, 0.55, 0.25).receipts(Band::new(300.0, 600.0)),
        linear("12d $600-1000 under 900mi", 700.0, 0.75, 0.55)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(900.0)),
        linear("12d $600-1000", 700.0, 0.35, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(900.0)),
        linear("12d $1000-1500 under 900mi", 725.0, 0.35, 0.70)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(900.0))
            .capped(2000.0),
        linear("12d $1000-1500", 950.0, 0.90, 0.10)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(900.0))
            .capped(2200.0),
        linear("12d over $1500 under 900mi", 1300.0, 0.50, 0.10)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(900.0))
            .capped(2000.0),
        linear("12d over $1500", 775.0, 0.80, 0.10)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(900.0))
            .capped(2000.0),
    ]
}

fn thirteen_day() -> Vec<Rule> {
    vec![
        linear("13d under $300", 700.0, 0.55, 0.45).receipts(Band::below(300.0)),
        linear("13d $300-600", 700.0, 0.75, 0.10).receipts(Band::new(300.0, 600.0)),
        linear("13d $600-1000 under 900mi", 700.0, 0.50, 0.75)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(900.0))
            .capped(2000.0),
        linear("13d $600-1000", 1150.0, 0.10, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(900.0))
            .capped(2200.0),
        linear("13d $1000-1500 under 900mi", 1275.0, 0.40, 0.25)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::below(900.0))
            .capped(2000.0),
        linear("13d $1000-1500", 1100.0, 0.90, 0.10)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::at_least(900.0))
            .capped(2200.0),
        linear("13d over $1500", 1300.0, 0.75, 0.15)
            .receipts(Band::at_least(1500.0))
            .capped(2000.0),
    ]
}

fn fourteen_day() -> Vec<Rule> {
    vec![
        Rule::exact("14d outlier 481mi $939.99", 481.0, 939.99, 877.17),
        linear("14d under $300", 1150.0, 0.10, 0.15).receipts(Band::below(300.0)),
        linear("14d $300-600 under 900mi", 700.0, 0.90, 0.25)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::below(900.0)),
        linear("14d $300-600", 750.0, 0.20, 0.90)
            .receipts(Band::new(300.0, 600.0))
            .miles(Band::at_least(900.0)),
        linear("14d $600-1000 under 500mi", 900.0, 0.50, 0.60)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::below(500.0)),
        linear("14d $600-1000 500-900mi", 700.0, 0.25, 0.80)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::new(500.0, 900.0)),
        linear("14d $600-1000", 700.0, 0.30, 0.95)
            .receipts(Band::new(600.0, 1000.0))
            .miles(Band::at_least(900.0))
            .capped(2000.0),
        linear("14d $1000-1500 over 1000mi", 1500.0, 0.35, 0.40)
            .receipts(Band::new(1000.0, 1500.0))
            .miles(Band::above(1000.0)),
        linear("14d $1000-1500", 1275.0, 0.30, 0.35)
            .receipts(Band::new(1000.0, 1500.0))
            .capped(2000.0),
        linear("14d over $1500 under 300mi", 350.0, 0.55, 0.55)
            .receipts(Band::at_least(1500.0))
            .miles(Band::below(300.0))
            .capped(1850.0),
        linear("14d over $1500 300-900mi", 900.0, 0.15, 0.50)
            .receipts(Band::at_least(1500.0))
            .miles(Band::new(300.0, 900.0))
            .capped(2000.0),
        linear("14d over $1500", 925.0, 0.95, 0.10)
            .receipts(Band::at_least(1500.0))
            .miles(Band::at_least(900.0))
            .capped(2400.0),
    ]
}
