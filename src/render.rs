use reimbursement::batch::{BatchReport, CaseResult};
use reimbursement::config::BatchConfig;
use reimbursement::{format_amount, Assessment};
use serde::Serialize;

pub(crate) fn json<T: Serialize>(value: &T) -> Result<(), std::io::Error> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    std::io::Write::write_all(&mut handle, b"\n")
}

pub(crate) fn assessment(assessment: &Assessment) {
    let input = assessment.input;
    println!("Amount: {}", assessment.formatted);
    println!(
        "Trip: {} day(s), {} miles, ${} receipts",
        input.days,
        input.miles,
        format_amount(input.receipts)
    );
    println!(
        ".49 receipts penalty: {}",
        if assessment.penalty { "yes" } else { "no" }
    );
    println!("Source: {}", assessment.source.summary());
}

pub(crate) fn outputs(report: &BatchReport) {
    for result in &report.results {
        println!("{}", result.actual);
    }
}

pub(crate) fn batch_summary(report: &BatchReport, config: &BatchConfig) {
    println!("Batch evaluation");
    println!("Total cases: {}", report.total_cases);
    println!("Scored cases: {}", report.scored_cases);

    if report.scored_cases == 0 {
        println!("\nNo expected outputs in the case file; use --outputs to list amounts.");
        return;
    }

    println!(
        "Exact matches (±{}): {} ({:.1}%)",
        format_amount(config.exact_tolerance),
        report.exact_matches,
        report.exact_rate()
    );
    println!(
        "Close matches (±{}): {} ({:.1}%)",
        format_amount(config.close_tolerance),
        report.close_matches,
        report.close_rate()
    );
    println!("Average error: ${}", format_amount(report.average_error));
    println!("Maximum error: ${}", format_amount(report.max_error));
    println!("Score: {} (lower is better)", format_amount(report.score));

    if report.worst_cases.is_empty() {
        return;
    }

    println!("\nLargest errors");
    for result in &report.worst_cases {
        println!("- {}", describe(result));
    }
}

fn describe(result: &CaseResult) -> String {
    let input = result.input;
    let expected = result
        .expected
        .map(format_amount)
        .unwrap_or_else(|| "n/a".to_string());
    let error = result
        .error
        .map(format_amount)
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "case {}: {} day(s), {} miles, ${} receipts; expected ${}, got ${} (error ${}) via {}",
        result.case,
        input.days,
        input.miles,
        format_amount(input.receipts),
        expected,
        result.actual,
        error,
        result.source.summary()
    )
}
