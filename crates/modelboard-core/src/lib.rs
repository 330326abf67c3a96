//! modelboard-core: model library console library.
//!
//! Provides:
//! - `record`: the listed model record and its status
//! - `seed`: deterministic seed records for the console
//! - `columns`: static column metadata with typed value accessors
//! - `table`: table view-model (search → sort → paginate)
//! - `form`: create-model draft, validation and modal lifecycle
//! - `notice`: user-facing notices (toasts)
//! - `util`: helper utilities
//!
//! With `tui` feature (default):
//! - `tui`: TUI rendering with ratatui and crossterm
//! - `view`: render-ready view models built from the table view-model

pub mod columns;
pub mod form;
pub mod notice;
pub mod record;
pub mod seed;
pub mod table;
pub mod util;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "tui")]
pub mod view;
