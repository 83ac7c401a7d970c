//! Entry CLI commands
//!
//! Implements the add/delete/list/clear commands over the ledger service.

use std::io::{self, BufRead, Write};

use crate::display::format_amount;
use crate::error::SpendResult;
use crate::models::{category, CategoryId, DayKey, EntryId, Money};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Resolve the day to operate on: an explicit `--day`, or today
pub fn resolve_day(day: Option<&str>) -> SpendResult<DayKey> {
    match day {
        Some(s) => s
            .parse()
            .map_err(|e| crate::error::SpendError::Validation(format!("Invalid day '{}': {}", s, e))),
        None => Ok(DayKey::now()),
    }
}

/// Resolve a category argument to an id
///
/// Falls back to the "Other" category (or the first one) when the name is
/// unknown or absent; entries always carry some category id.
fn resolve_category(storage: &Storage, name: Option<&str>) -> SpendResult<CategoryId> {
    if let Some(name) = name {
        if let Some(cat) = storage.categories.find_by_name(name)? {
            return Ok(cat.id);
        }
        println!("Unknown category '{}', using Other.", name);
    }

    let categories = storage.categories.list()?;
    Ok(categories
        .iter()
        .find(|c| c.name == "Other")
        .or_else(|| categories.first())
        .map(|c| c.id)
        .unwrap_or_default())
}

/// Handle `add <amount>`
pub fn handle_add(
    storage: &Storage,
    amount: &str,
    category_name: Option<&str>,
    note: Option<String>,
    day: Option<&str>,
) -> SpendResult<()> {
    let day = resolve_day(day)?;

    // Invalid numeric input is a silent no-op at the boundary
    let amount = match Money::parse(amount) {
        Ok(a) => a,
        Err(_) => {
            println!("Nothing added.");
            return Ok(());
        }
    };

    let category_id = resolve_category(storage, category_name)?;
    let service = LedgerService::new(storage);

    match service.add_entry(day, amount, category_id, note)? {
        Some(id) => {
            let currency = storage.currency.get()?;
            println!("Added {} to {} ({})", format_amount(amount, &currency), day, id);
        }
        None => println!("Nothing added."),
    }

    Ok(())
}

/// Handle `delete <entry-id>`
pub fn handle_delete(storage: &Storage, id: &str, day: Option<&str>) -> SpendResult<()> {
    let day = resolve_day(day)?;

    // Accept either the full UUID or the short form shown by `list`
    let resolved: Option<EntryId> = match id.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => storage
            .ledger
            .entries_for(day)?
            .iter()
            .find(|e| e.id.to_string() == id)
            .map(|e| e.id),
    };

    let Some(id) = resolved else {
        println!("No matching entry.");
        return Ok(());
    };

    let service = LedgerService::new(storage);
    if service.delete_entry(day, id)? {
        println!("Deleted {} from {}", id, day);
    } else {
        println!("No matching entry.");
    }

    Ok(())
}

/// Handle `list`
pub fn handle_list(storage: &Storage, day: Option<&str>) -> SpendResult<()> {
    let day = resolve_day(day)?;
    let entries = storage.ledger.entries_for(day)?;
    let categories = storage.categories.list()?;
    let currency = storage.currency.get()?;

    println!("Entries for {}", day);
    if entries.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for entry in &entries {
        let cat_name = category::display_name(&categories, entry.category_id);
        let note = entry.note_text();
        if note.is_empty() {
            println!(
                "  {}  {:>10}  {}",
                entry.id,
                format_amount(entry.amount, &currency),
                cat_name
            );
        } else {
            println!(
                "  {}  {:>10}  {}  \"{}\"",
                entry.id,
                format_amount(entry.amount, &currency),
                cat_name,
                note
            );
        }
    }

    let total: Money = entries.iter().map(|e| e.amount).sum();
    println!("  Total: {}", format_amount(total, &currency));

    Ok(())
}

/// Handle `clear`
///
/// Clearing a day is destructive, so it prompts for confirmation unless
/// `--yes` was passed.
pub fn handle_clear(storage: &Storage, day: Option<&str>, yes: bool) -> SpendResult<()> {
    let day = resolve_day(day)?;

    if !yes && !confirm(&format!("Clear all entries for {}? [y/N] ", day))? {
        println!("Aborted.");
        return Ok(());
    }

    let service = LedgerService::new(storage);
    service.clear_day(day)?;
    println!("Cleared {}", day);

    Ok(())
}

/// Prompt on stdin for a yes/no answer
fn confirm(prompt: &str) -> SpendResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
