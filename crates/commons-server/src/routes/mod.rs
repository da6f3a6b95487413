//! Route handlers, grouped by concern.

pub mod content;
pub mod forms;
pub mod revalidate;
