//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::config::settings::Settings;
use crate::models::{DayKey, ExpenseEntry, Money};
use crate::services::{DayClock, LedgerService};
use crate::storage::Storage;
use tracing::warn;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Week,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a custom amount into the entry form
    EnteringAmount,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Confirm clearing today's entries
    ConfirmClear,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Tracks the current day key
    pub clock: DayClock,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Custom amount being typed
    pub amount_input: String,

    /// Selected entry index in today's list
    pub selected_entry_index: usize,

    /// Transient status message
    pub status: Option<String>,

    /// When the day key was last re-evaluated
    last_day_check: Instant,
}

impl<'a> App<'a> {
    /// Create a new App and initialize today's bucket
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let clock = DayClock::start();
        let app = Self {
            storage,
            settings,
            clock,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            amount_input: String::new(),
            selected_entry_index: 0,
            status: None,
            last_day_check: Instant::now(),
        };
        app.ensure_today();
        app
    }

    /// The day currently shown on the dashboard
    pub fn today(&self) -> DayKey {
        self.clock.current()
    }

    /// Today's entries in insertion order
    pub fn today_entries(&self) -> Vec<ExpenseEntry> {
        self.storage
            .ledger
            .entries_for(self.today())
            .unwrap_or_default()
    }

    /// Called on every tick; re-checks the day key on the configured interval
    pub fn on_tick(&mut self) {
        let interval = Duration::from_secs(self.settings.day_check_interval_secs);
        if self.last_day_check.elapsed() >= interval {
            self.refresh_day();
        }
    }

    /// Re-evaluate the day key now (tick interval elapsed or focus gained)
    ///
    /// Both triggers funnel into the clock's idempotent refresh, so it does
    /// not matter if they fire back-to-back.
    pub fn refresh_day(&mut self) {
        self.last_day_check = Instant::now();
        if let Some(change) = self.clock.refresh(Local::now()) {
            self.ensure_today();
            self.selected_entry_index = 0;
            self.status = Some(format!("New day: {}", change.current));
        }
    }

    /// Add a quick amount by its 1-based slot number
    pub fn quick_add(&mut self, slot: usize) {
        let amounts = match self.storage.quick_amounts.get() {
            Ok(a) => a,
            Err(e) => {
                warn!("failed to read quick amounts: {}", e);
                return;
            }
        };
        if let Some(&amount) = amounts.as_slice().get(slot - 1) {
            self.add_amount(amount);
        }
    }

    /// Submit the typed custom amount
    pub fn submit_amount_input(&mut self) {
        let input = std::mem::take(&mut self.amount_input);
        self.input_mode = InputMode::Normal;

        match Money::parse(&input) {
            Ok(amount) => self.add_amount(amount),
            Err(_) => {
                // Invalid input is a silent no-op; just drop the form state
                self.status = None;
            }
        }
    }

    /// Delete the currently selected entry
    pub fn delete_selected(&mut self) {
        let entries = self.today_entries();
        let Some(entry) = entries.get(self.selected_entry_index) else {
            return;
        };

        let service = LedgerService::new(self.storage);
        match service.delete_entry(self.today(), entry.id) {
            Ok(true) => {
                if self.selected_entry_index > 0 {
                    self.selected_entry_index -= 1;
                }
                self.status = Some("Entry deleted".into());
            }
            Ok(false) => {}
            Err(e) => warn!("delete failed: {}", e),
        }
    }

    /// Clear today's entries (called after the dialog confirms)
    pub fn clear_today(&mut self) {
        let service = LedgerService::new(self.storage);
        if let Err(e) = service.clear_day(self.today()) {
            warn!("clear failed: {}", e);
            return;
        }
        self.selected_entry_index = 0;
        self.status = Some(format!("Cleared {}", self.today()));
    }

    /// Move the selection within today's list
    pub fn select_next(&mut self) {
        let len = self.today_entries().len();
        if len > 0 && self.selected_entry_index + 1 < len {
            self.selected_entry_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected_entry_index > 0 {
            self.selected_entry_index -= 1;
        }
    }

    fn add_amount(&mut self, amount: Money) {
        let categories = self.storage.categories.list().unwrap_or_default();
        let category_id = categories
            .iter()
            .find(|c| c.name == "Other")
            .or_else(|| categories.first())
            .map(|c| c.id)
            .unwrap_or_default();

        let service = LedgerService::new(self.storage);
        match service.add_entry(self.today(), amount, category_id, None) {
            Ok(Some(_)) => {
                let currency = self.storage.currency.get().unwrap_or_default();
                self.status = Some(format!("Added {}", amount.format_with_symbol(&currency.symbol)));
            }
            Ok(None) => {}
            Err(e) => warn!("add failed: {}", e),
        }
    }

    fn ensure_today(&self) {
        let service = LedgerService::new(self.storage);
        if let Err(e) = service.ensure_day(self.clock.current()) {
            warn!("failed to initialize day bucket: {}", e);
        }
    }
}
