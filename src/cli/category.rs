//! Category CLI commands

use clap::Subcommand;

use crate::error::SpendResult;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> SpendResult<()> {
    match cmd {
        CategoryCommands::List => {
            for category in storage.categories.list()? {
                println!("{}  ({})", category, category.id);
            }
        }
    }

    Ok(())
}
