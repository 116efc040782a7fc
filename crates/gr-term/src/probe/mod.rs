//! Terminal row-count discovery.
//!
//! Every backend degrades to [`DEFAULT_ROWS`] instead of failing: a wrong
//! guess at the screen height only makes pauses land early or late.

pub mod terminfo;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use self::terminfo::TermInfoProbe;

/// Row count assumed when nothing better is known.
pub const DEFAULT_ROWS: u16 = 24;

/// Something that can tell how many rows the output terminal has.
pub trait RowProbe {
    /// Usable rows on the terminal. Never zero.
    fn probe_rows(&self) -> u16;

    /// Whether output on this terminal should be paced at all.
    fn supports_pacing(&self) -> bool {
        true
    }
}

/// How the row count is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityPolicy {
    /// Always assume a 24 row terminal.
    #[default]
    Fixed,
    /// Read the `lines` capability from the terminfo database entry for `$TERM`.
    #[serde(rename = "terminfo")]
    TermInfo,
    /// Ask the operating system for the terminal geometry.
    Platform,
    /// Don't probe; output is never paced.
    None,
}

impl RowProbe for CapabilityPolicy {
    fn probe_rows(&self) -> u16 {
        match self {
            Self::Fixed | Self::None => DEFAULT_ROWS,
            Self::TermInfo => TermInfoProbe::from_env().probe_rows(),
            Self::Platform => PlatformProbe.probe_rows(),
        }
    }

    fn supports_pacing(&self) -> bool {
        *self != Self::None
    }
}

/// Probe that reports a chosen row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRows(pub u16);

impl RowProbe for FixedRows {
    fn probe_rows(&self) -> u16 {
        if self.0 == 0 { DEFAULT_ROWS } else { self.0 }
    }
}

/// Probe backed by the operating system's terminal size query.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformProbe;

impl RowProbe for PlatformProbe {
    fn probe_rows(&self) -> u16 {
        match crossterm::terminal::size() {
            Ok((_, rows)) if rows > 0 => rows,
            Ok(_) => {
                warn!("terminal reported zero rows, assuming {DEFAULT_ROWS}");
                DEFAULT_ROWS
            }
            Err(e) => {
                debug!(error = %e, "terminal size unavailable, assuming {DEFAULT_ROWS}");
                DEFAULT_ROWS
            }
        }
    }
}
