//! maokai
//!
//! Append-only file logging: timestamped records, flushed on every write, with debug
//! records gated by a [`Mode`].
#![deny(
    clippy::all,
    clippy::correctness,
    clippy::perf,
    clippy::complexity,
    clippy::style,
    absolute_paths_not_starting_with_crate,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    variant_size_differences,
    clippy::clone_on_ref_ptr,
    clippy::else_if_without_else,
    clippy::exit,
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::shadow_unrelated,
    clippy::unwrap_used,
)]
#![cfg_attr(
    test,
    allow(
        unused_results,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::shadow_unrelated,
        clippy::pedantic,
    )
)]

mod config;
mod error;
mod level;
mod logger;
pub mod record;
#[cfg(test)]
mod tests;

pub use config::{LoggerConfig, Mode, MODE_VAR};
pub use error::{IoOperation, LoggerError, Result};
pub use level::Level;
pub use logger::{create_logger, Log, Logger};
