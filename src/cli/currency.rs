//! Currency CLI commands

use clap::Subcommand;

use crate::error::{SpendError, SpendResult};
use crate::models::Currency;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the selected currency
    Show,

    /// Select a currency by code (e.g., "EUR")
    Set {
        /// ISO 4217 code
        code: String,
    },

    /// List the selectable currencies
    List,
}

/// Handle a currency command
pub fn handle_currency_command(storage: &Storage, cmd: CurrencyCommands) -> SpendResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            println!("{}", storage.currency.get()?);
        }
        CurrencyCommands::Set { code } => {
            let currency = Currency::by_code(&code)
                .ok_or_else(|| SpendError::currency_not_found(code.to_ascii_uppercase()))?;
            let service = LedgerService::new(storage);
            service.set_currency(currency.clone())?;
            println!("Currency set to {}", currency);
        }
        CurrencyCommands::List => {
            let selected = storage.currency.get()?;
            for currency in Currency::all() {
                let marker = if currency.code == selected.code { "*" } else { " " };
                println!("{} {}", marker, currency);
            }
        }
    }

    Ok(())
}
