//! CSV export functionality
//!
//! Exports the full entry list as CSV rows, newest entry first. Notes have
//! literal commas replaced by semicolons to preserve column integrity;
//! there is no other quoting or escaping.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::Ledger;

use super::flattened_entries;

/// Write the full entry list as CSV
///
/// Header row is `Date,Amount,Category,Note`. The date is formatted with
/// the user's date format (strftime), the amount is fixed to two decimal
/// places, and the category is the raw id.
pub fn export_entries_csv<W: Write>(
    ledger: &Ledger,
    date_format: &str,
    writer: &mut W,
) -> SpendResult<()> {
    writeln!(writer, "Date,Amount,Category,Note")
        .map_err(|e| SpendError::Export(e.to_string()))?;

    for (day, entry) in flattened_entries(ledger) {
        writeln!(
            writer,
            "{},{:.2},{},{}",
            day.date().format(date_format),
            entry.amount.to_major_units(),
            entry.category_id.as_uuid(),
            sanitize_note(entry.note_text()),
        )
        .map_err(|e| SpendError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Replace literal commas so a note cannot break the column layout
fn sanitize_note(note: &str) -> String {
    note.replace(',', ";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, DayKey, ExpenseEntry, Money};

    fn export(ledger: &Ledger) -> String {
        let mut buf = Vec::new();
        export_entries_csv(ledger, "%m/%d/%Y", &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_and_row() {
        let mut ledger = Ledger::new();
        let day: DayKey = "2024-06-07".parse().unwrap();
        let cat = CategoryId::new();
        ledger.add(day, ExpenseEntry::new(Money::from_cents(450), cat, Some("latte".into())));

        let text = export(&ledger);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Date,Amount,Category,Note");
        assert_eq!(lines[1], format!("06/07/2024,4.50,{},latte", cat.as_uuid()));
    }

    #[test]
    fn test_note_commas_become_semicolons() {
        let mut ledger = Ledger::new();
        let day: DayKey = "2024-06-07".parse().unwrap();
        ledger.add(
            day,
            ExpenseEntry::new(
                Money::from_cents(600),
                CategoryId::new(),
                Some("coffee, latte".into()),
            ),
        );

        let text = export(&ledger);
        assert!(text.contains("coffee; latte"));
        // Exactly 3 commas per data row once the note is sanitized
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row.matches(',').count(), 3);
    }

    #[test]
    fn test_empty_note_field() {
        let mut ledger = Ledger::new();
        let day: DayKey = "2024-06-07".parse().unwrap();
        ledger.add(day, ExpenseEntry::new(Money::from_cents(100), CategoryId::new(), None));

        let text = export(&ledger);
        assert!(text.lines().nth(1).unwrap().ends_with(','));
    }

    #[test]
    fn test_only_header_for_empty_ledger() {
        let text = export(&Ledger::new());
        assert_eq!(text, "Date,Amount,Category,Note\n");
    }
}
