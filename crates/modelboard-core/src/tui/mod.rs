//! Terminal User Interface for the model console.
//!
//! A sidebar, a searchable and sortable model table with page controls, and
//! a create-model modal. All behavior lives in the table view-model and the
//! form; this module only maps keys to those operations and draws the result.

mod app;
mod event;
mod input;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use input::{KeyAction, handle_key};
pub use state::{AppState, InputMode, PopupState};
