//! Cross-platform helper routines shared by our command-line tools.
//!
//! Small, self-contained pieces: string padding and numeric parsing,
//! byte-size formatting, config-path resolution, JSON load-or-initialize
//! persistence, file plumbing, external-command lookup, terminal helpers,
//! and a single-shot [`InterruptHandler`] that runs a cleanup callback
//! before the process exits.
//!
//! OS-specific behavior (config roots, forceful child termination) is
//! selected once via [`Platform::detect`] instead of being branched at
//! every call site.

pub mod command;
pub mod format;
pub mod fsutil;
pub mod interrupt;
pub mod json_store;
pub mod parse;
pub mod paths;
pub mod platform;
pub mod term;
pub mod text;

pub use interrupt::InterruptHandler;
pub use platform::{ConfigRoot, Platform};
