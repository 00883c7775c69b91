//! # fibbench-cli
//!
//! Report presenters, output formatting, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{JsonPresenter, OutputFormat, TextPresenter};
