//! Terminal support for the Grotto interactive fiction shell.
//!
//! Game text can easily outrun a 24 row screen. This crate provides a small
//! "more" facility: a [`Pager`] that every line of output passes through,
//! which counts lines since the player last typed something and, when pacing
//! is enabled, pauses with a prompt once a screenful has gone by. The row
//! count comes from a capability probe selected by [`CapabilityPolicy`].

/// Error types for terminal output.
pub mod error;
/// Paced line output.
pub mod pager;
/// Terminal row-count discovery.
pub mod probe;
/// Per-process pacing state.
pub mod session;

pub use error::{TermError, TermResult};
pub use pager::{CONTINUE_PROMPT, Pager, StdioPager};
pub use probe::{CapabilityPolicy, DEFAULT_ROWS, FixedRows, PlatformProbe, RowProbe};
pub use probe::terminfo::{TermInfoError, TermInfoProbe};
pub use session::{Pacing, TerminalSession};
