//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_amount;
use crate::error::SpendResult;
use crate::models::Money;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the daily budget
    Show,

    /// Set the daily budget (e.g., "30" or "30.00")
    Set {
        /// Amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> SpendResult<()> {
    let currency = storage.currency.get()?;

    match cmd {
        BudgetCommands::Show => {
            let budget = storage.budget.get()?;
            println!("Daily budget: {}", format_amount(budget, &currency));
        }
        BudgetCommands::Set { amount } => {
            let service = LedgerService::new(storage);
            match Money::parse(&amount) {
                Ok(amount) if service.set_budget(amount)? => {
                    println!("Daily budget set to {}", format_amount(amount, &currency));
                }
                _ => println!("Budget unchanged."),
            }
        }
    }

    Ok(())
}
