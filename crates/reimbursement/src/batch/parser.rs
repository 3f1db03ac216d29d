use super::{BatchCase, BatchError};
use crate::evaluation::TripInput;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// On-disk layout of a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    Csv,
    Json,
}

impl CaseFormat {
    /// `.json` files are JSON; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

pub(crate) fn parse_cases<R: Read>(
    reader: R,
    format: CaseFormat,
) -> Result<Vec<BatchCase>, BatchError> {
    let cases = match format {
        CaseFormat::Csv => parse_csv(reader)?,
        CaseFormat::Json => parse_json(reader)?,
    };

    if cases.is_empty() {
        return Err(BatchError::Empty);
    }
    Ok(cases)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    trip_duration_days: i64,
    miles_traveled: f64,
    total_receipts_amount: f64,
    #[serde(default)]
    expected_output: Option<f64>,
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<BatchCase>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut cases = Vec::new();

    for record in csv_reader.deserialize::<CsvRow>() {
        let row = record?;
        cases.push(BatchCase {
            input: TripInput::new(
                row.trip_duration_days,
                row.miles_traveled,
                row.total_receipts_amount,
            ),
            expected: row.expected_output,
        });
    }

    Ok(cases)
}

#[derive(Debug, Deserialize)]
struct JsonCase {
    input: JsonInput,
    #[serde(default)]
    expected_output: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct JsonInput {
    trip_duration_days: i64,
    miles_traveled: f64,
    total_receipts_amount: f64,
}

fn parse_json<R: Read>(reader: R) -> Result<Vec<BatchCase>, serde_json::Error> {
    let rows: Vec<JsonCase> = serde_json::from_reader(reader)?;
    Ok(rows
        .into_iter()
        .map(|row| BatchCase {
            input: TripInput::new(
                row.input.trip_duration_days,
                row.input.miles_traveled,
                row.input.total_receipts_amount,
            ),
            expected: row.expected_output,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(CaseFormat::from_path(Path::new("cases.json")), CaseFormat::Json);
        assert_eq!(CaseFormat::from_path(Path::new("CASES.JSON")), CaseFormat::Json);
        assert_eq!(CaseFormat::from_path(Path::new("cases.csv")), CaseFormat::Csv);
        assert_eq!(CaseFormat::from_path(Path::new("cases")), CaseFormat::Csv);
    }

    #[test]
    fn csv_expected_output_is_optional() {
        let cases = parse_cases(
            Cursor::new(
                "trip_duration_days,miles_traveled,total_receipts_amount,expected_output\n\
                 3, 127, 293.49, 303.20\n\
                 2,300,50,\n",
            ),
            CaseFormat::Csv,
        )
        .expect("csv parses");

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].input, TripInput::new(3, 127.0, 293.49));
        assert_eq!(cases[0].expected, Some(303.20));
        assert_eq!(cases[1].expected, None);
    }

    #[test]
    fn csv_without_expected_column_parses() {
        let cases = parse_cases(
            Cursor::new("trip_duration_days,miles_traveled,total_receipts_amount\n1,10,5\n"),
            CaseFormat::Csv,
        )
        .expect("csv parses");
        assert_eq!(cases[0].expected, None);
    }

    #[test]
    fn json_cases_use_nested_input() {
        let cases = parse_cases(
            Cursor::new(
                r#"[
                    { "input": { "trip_duration_days": 1, "miles_traveled": 1082, "total_receipts_amount": 1809.49 },
                      "expected_output": 446.94 },
                    { "input": { "trip_duration_days": 5, "miles_traveled": 250, "total_receipts_amount": 150.75 } }
                ]"#,
            ),
            CaseFormat::Json,
        )
        .expect("json parses");

        assert_eq!(cases[0].input, TripInput::new(1, 1082.0, 1809.49));
        assert_eq!(cases[0].expected, Some(446.94));
        assert_eq!(cases[1].expected, None);
    }

    #[test]
    fn rejects_non_numeric_fields_and_empty_files() {
        let error = parse_cases(
            Cursor::new("trip_duration_days,miles_traveled,total_receipts_amount\nthree,1,1\n"),
            CaseFormat::Csv,
        )
        .expect_err("non-numeric days");
        assert!(matches!(error, BatchError::Csv(_)));

        let error = parse_cases(Cursor::new("[]"), CaseFormat::Json).expect_err("empty");
        assert!(matches!(error, BatchError::Empty));
    }
}
