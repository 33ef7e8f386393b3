//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency. Owned by the
//! engine, read by the renderer.

mod form;
mod view_state;

pub use form::{ContactForm, FieldInput};
pub use view_state::{Notice, SectionFocus, UiOptions, ViewState};
