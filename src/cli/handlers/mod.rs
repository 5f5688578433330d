//! Command handlers for the CLI.
//!
//! Each handler works on an already loaded [`NoteStore`]; every effective
//! mutation is saved by the store before the handler returns.
//!
//! [`NoteStore`]: crate::store::NoteStore

mod completions;
mod list;
mod new;
mod remove;
mod resolve;
mod show_edit;


pub use completions::handle_completions;
pub use list::{handle_list, handle_search};
pub use new::{fields_from_args, handle_new};
pub use remove::handle_rm;
pub use resolve::{ResolveResult, resolve_note};
pub use show_edit::{handle_edit, handle_show};

// Re-export for tests
#[cfg(test)]
pub(crate) use list::render_listing;
#[cfg(test)]
pub(crate) use show_edit::{EditorLauncher, handle_edit_impl, render_note};

use anyhow::{Context, Result};

use crate::store::StoreError;

/// Reports a failed save as a command error.
pub(crate) fn saved<T>(result: Result<T, StoreError>) -> Result<T> {
    result.context("failed to save notes")
}
