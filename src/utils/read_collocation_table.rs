use crate::constants::{
    COLLOCATION_COUNT_HEADER, COLLOCATION_STATISTIC_HEADER, COLLOCATION_WORD1_HEADER,
    COLLOCATION_WORD2_HEADER, COLLOCATION_WORD3_HEADER,
};
use crate::models::{CollocationRecord, Error};
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reads a collocation table from CSV text.
///
/// The header row must contain `word1` and `word2`. The `word3`, `count` and `statistic`
/// columns are optional; an empty `word3` denotes a bigram.
pub fn read_collocation_table_from_string(csv: &str) -> Result<Vec<CollocationRecord>, Error> {
    read_collocation_table(Cursor::new(csv))
}

/// Reads a collocation table from a CSV file. Files ending in `.gz` are decompressed first.
pub fn read_collocation_table_from_path(path: &Path) -> Result<Vec<CollocationRecord>, Error> {
    let file = File::open(path)?;

    debug!("Reading collocation table from {}", path.display());

    if path.extension().map_or(false, |ext| ext == "gz") {
        read_collocation_table(GzDecoder::new(file))
    } else {
        read_collocation_table(file)
    }
}

fn read_collocation_table<R: Read>(input: R) -> Result<Vec<CollocationRecord>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| Error::CsvError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let word1_column = column(COLLOCATION_WORD1_HEADER).ok_or_else(|| {
        Error::CsvError(format!("Missing '{}' column", COLLOCATION_WORD1_HEADER))
    })?;
    let word2_column = column(COLLOCATION_WORD2_HEADER).ok_or_else(|| {
        Error::CsvError(format!("Missing '{}' column", COLLOCATION_WORD2_HEADER))
    })?;
    let word3_column = column(COLLOCATION_WORD3_HEADER);
    let count_column = column(COLLOCATION_COUNT_HEADER);
    let statistic_column = column(COLLOCATION_STATISTIC_HEADER);

    let mut records = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::CsvError(format!("Failed to read record: {}", e)))?;

        let word1 = get_field(&record, Some(word1_column));
        let word2 = get_field(&record, Some(word2_column));

        if word1.is_empty() || word2.is_empty() {
            return Err(Error::CsvError(format!(
                "Row {} is missing '{}' or '{}'",
                row_idx + 1,
                COLLOCATION_WORD1_HEADER,
                COLLOCATION_WORD2_HEADER
            )));
        }

        let count = parse_field(&record, count_column, row_idx, COLLOCATION_COUNT_HEADER)?;
        let statistic =
            parse_field(&record, statistic_column, row_idx, COLLOCATION_STATISTIC_HEADER)?;

        records.push(CollocationRecord {
            word1: word1.to_string(),
            word2: word2.to_string(),
            word3: get_field(&record, word3_column).to_string(),
            count: count.unwrap_or(0),
            statistic: statistic.unwrap_or(0.0),
        });
    }

    debug!("Read {} collocation records", records.len());

    Ok(records)
}

fn get_field(record: &StringRecord, column: Option<usize>) -> &str {
    column.and_then(|idx| record.get(idx)).unwrap_or_default()
}

fn parse_field<T: std::str::FromStr>(
    record: &StringRecord,
    column: Option<usize>,
    row_idx: usize,
    header: &str,
) -> Result<Option<T>, Error> {
    match column.and_then(|idx| record.get(idx)) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| {
            Error::CsvError(format!(
                "Row {}: invalid '{}' value \"{}\"",
                row_idx + 1,
                header,
                value
            ))
        }),
    }
}
