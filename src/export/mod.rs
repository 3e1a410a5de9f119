//! CSV export of the entry snapshot.
//!
//! Serializes entries to a comma-separated table, one row per entry in
//! snapshot order. Every field is double-quoted and embedded quotes are
//! escaped by doubling them, so free-text fields cannot break the row
//! structure. Reads the snapshot only; never touches the store.

use crate::constants::{CSV_DATE_FORMAT, CSV_HEADER};
use crate::errors::AppResult;
use crate::model::Entry;
use std::io::Write;

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes the snapshot as a CSV table.
///
/// Columns are `Date, Drink Type, Specific Drink, Location, Temperature,
/// Milk, Price, Rating, Notes`. The price column is empty when the price
/// is unspecified.
///
/// # Errors
///
/// Returns `AppError::Io` if writing fails.
pub fn write_csv(entries: &[Entry], writer: &mut impl Write) -> AppResult<()> {
    let header: Vec<String> = CSV_HEADER.iter().map(|c| c.to_string()).collect();
    writeln!(writer, "{}", row(&header))?;

    for entry in entries {
        let fields = vec![
            entry.created_at.format(CSV_DATE_FORMAT).to_string(),
            entry.drink_type.to_string(),
            entry.specific_drink.clone(),
            entry.location.clone(),
            entry.temperature.to_string(),
            entry.milk_type.to_string(),
            entry
                .price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default(),
            entry.rating.to_string(),
            entry.notes.clone(),
        ];
        writeln!(writer, "{}", row(&fields))?;
    }

    Ok(())
}

/// Renders the snapshot as an in-memory CSV string.
///
/// # Errors
///
/// Propagates any error from [`write_csv`]; writing to a `Vec` itself
/// cannot fail.
pub fn to_csv_string(entries: &[Entry]) -> AppResult<String> {
    let mut buffer = Vec::new();
    write_csv(entries, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DrinkType, MilkType, Temperature};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_entry() -> Entry {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
        Entry {
            id: Uuid::new_v4(),
            drink_type: DrinkType::Coffee,
            specific_drink: "Latte".to_string(),
            location: "Corner Cafe".to_string(),
            temperature: Temperature::Hot,
            milk_type: MilkType::Oat,
            price: Some(4.5),
            rating: 4,
            notes: "smooth".to_string(),
            mood: None,
            tags: Vec::new(),
            photo: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_header_row() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(
            csv,
            "\"Date\",\"Drink Type\",\"Specific Drink\",\"Location\",\"Temperature\",\"Milk\",\"Price\",\"Rating\",\"Notes\"\n"
        );
    }

    #[test]
    fn test_every_field_quoted() {
        let csv = to_csv_string(&[sample_entry()]).unwrap();
        let data_row = csv.lines().nth(1).unwrap();

        assert_eq!(
            data_row,
            "\"2024-03-15\",\"Coffee\",\"Latte\",\"Corner Cafe\",\"Hot\",\"Oat\",\"4.50\",\"4\",\"smooth\""
        );
    }

    #[test]
    fn test_embedded_quote_doubled() {
        let entry = Entry {
            notes: "the \"best\" cup".to_string(),
            ..sample_entry()
        };

        let csv = to_csv_string(&[entry]).unwrap();
        assert!(csv.contains("\"the \"\"best\"\" cup\""));
    }

    #[test]
    fn test_unspecified_price_is_empty_field() {
        let entry = Entry {
            price: None,
            ..sample_entry()
        };

        let csv = to_csv_string(&[entry]).unwrap();
        let data_row = csv.lines().nth(1).unwrap();
        assert!(data_row.contains(",\"\",\"4\","));
    }

    #[test]
    fn test_rows_follow_snapshot_order() {
        let first = Entry {
            specific_drink: "First".to_string(),
            ..sample_entry()
        };
        let second = Entry {
            specific_drink: "Second".to_string(),
            ..sample_entry()
        };

        let csv = to_csv_string(&[first, second]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].contains("\"First\""));
        assert!(lines[2].contains("\"Second\""));
    }

    #[test]
    fn test_comma_in_field_stays_inside_quotes() {
        let entry = Entry {
            location: "Cafe, downtown".to_string(),
            ..sample_entry()
        };

        let csv = to_csv_string(&[entry]).unwrap();
        assert!(csv.contains("\"Cafe, downtown\""));
    }
}
