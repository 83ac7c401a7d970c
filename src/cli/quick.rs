//! Quick-amount CLI commands

use clap::Subcommand;

use crate::display::format_amount;
use crate::error::SpendResult;
use crate::models::Money;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Quick-amount subcommands
#[derive(Subcommand)]
pub enum QuickCommands {
    /// List the quick-add amounts
    List,

    /// Add a quick-add amount (e.g., "5" or "7.50")
    Add {
        /// Amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Remove a quick-add amount
    Remove {
        /// Amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}

/// Handle a quick-amount command
pub fn handle_quick_command(storage: &Storage, cmd: QuickCommands) -> SpendResult<()> {
    let service = LedgerService::new(storage);
    let currency = storage.currency.get()?;

    match cmd {
        QuickCommands::List => {
            let amounts = storage.quick_amounts.get()?;
            if amounts.is_empty() {
                println!("No quick amounts configured.");
            } else {
                for amount in amounts.as_slice() {
                    println!("{}", format_amount(*amount, &currency));
                }
            }
        }
        QuickCommands::Add { amount } => match Money::parse(&amount) {
            Ok(amount) if service.add_quick_amount(amount)? => {
                println!("Added quick amount {}", format_amount(amount, &currency));
            }
            _ => println!("Nothing added."),
        },
        QuickCommands::Remove { amount } => match Money::parse(&amount) {
            Ok(amount) if service.remove_quick_amount(amount)? => {
                println!("Removed quick amount {}", format_amount(amount, &currency));
            }
            _ => println!("Nothing removed."),
        },
    }

    Ok(())
}
