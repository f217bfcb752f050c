//! Travel-by-month CSV loading

use crate::models::TravelRecord;
use crate::{Result, TravelAtlasError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load travel records from a CSV file with a header row
pub fn load_travel_records(path: impl AsRef<Path>) -> Result<Vec<TravelRecord>> {
    let path = path.as_ref();
    debug!("Loading travel records from {}", path.display());
    let file = File::open(path)?;
    let records = parse_travel_records(file)?;
    info!("Loaded {} travel records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse travel records from CSV text.
///
/// Rows may be short or long; missing columns become empty strings and
/// unknown columns are ignored. Rows with every field blank are skipped.
pub fn parse_travel_records<R: Read>(reader: R) -> Result<Vec<TravelRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| TravelAtlasError::data(format!("travel CSV header: {e}")))?
        .clone();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let mut row = row
            .map_err(|e| TravelAtlasError::data(format!("travel CSV row {}: {e}", index + 1)))?;
        // Pad short rows so absent trailing columns read as empty strings
        row.truncate(headers.len());
        while row.len() < headers.len() {
            row.push_field("");
        }

        let record: TravelRecord = row.deserialize(Some(&headers)).map_err(|e| {
            TravelAtlasError::data(format!("travel CSV row {}: {e}", index + 1))
        })?;
        if record == TravelRecord::default() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_with_missing_and_extra_columns() {
        let csv = "\
month,destination,country,category_raw,reason_he,extra
January,Miami,USA,Beach,Warm,x
February,Patagonia,\"Chile / Argentina\",Trekking
,,,,
March,Tokyo
";
        let records = parse_travel_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].reason_he, "Warm");
        assert_eq!(records[1].country, "Chile / Argentina");
        assert_eq!(records[1].reason_he, "");
        assert_eq!(records[2].destination, "Tokyo");
        assert_eq!(records[2].country, "");
    }

    #[test]
    fn test_short_row_is_not_rejected() {
        let csv = "month,destination,country,category_raw,reason_he\nJanuary,Miami,USA,beach\n";
        let records = parse_travel_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![TravelRecord::new("January", "Miami", "USA", "beach")]
        );
    }

    #[test]
    fn test_parse_reordered_header() {
        let csv = "country,month,category_raw\n Kenya , July ,Safari\n";
        let records = parse_travel_records(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![TravelRecord::new("July", "", "Kenya", "Safari")]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "month,destination,country,category_raw,reason_he").unwrap();
        writeln!(file, "April,Amsterdam,Netherlands,City,Tulips").unwrap();
        let records = load_travel_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month(), Some(chrono::Month::April));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_travel_records("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, TravelAtlasError::Io { .. }));
    }
}
