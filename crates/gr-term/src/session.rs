use serde::{Deserialize, Serialize};

/// Whether the pager actually pauses once a screenful has been shown.
///
/// The line counter is maintained either way; `Unpaced` only suppresses
/// the prompt, which keeps output streamable to pipes and scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pacing {
    /// Pause with a prompt when the screen is full.
    Paced,
    /// Never pause.
    #[default]
    Unpaced,
}

/// Pacing state for one terminal.
///
/// Owned by the [`Pager`](crate::Pager); nothing else touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSession {
    row_capacity: u16,
    lines_since_input: u32,
    pacing_enabled: bool,
}

impl TerminalSession {
    /// Create a session for a terminal with the given number of rows.
    pub fn new(row_capacity: u16, pacing: Pacing) -> Self {
        Self {
            row_capacity,
            lines_since_input: 0,
            pacing_enabled: pacing == Pacing::Paced,
        }
    }

    /// Rows visible before a pause is needed.
    pub fn row_capacity(&self) -> u16 {
        self.row_capacity
    }

    /// Lines emitted since the player last entered input (or last pause).
    pub fn lines_since_input(&self) -> u32 {
        self.lines_since_input
    }

    /// Whether pauses are enabled.
    pub fn pacing_enabled(&self) -> bool {
        self.pacing_enabled
    }

    /// Whether the next line must wait for the reader.
    ///
    /// True when showing one more line would push the counter past
    /// `row_capacity - 2`. A zero row count never pauses.
    pub fn pause_due(&self) -> bool {
        if !self.pacing_enabled || self.row_capacity == 0 {
            return false;
        }
        let threshold = i64::from(self.row_capacity) - 2;
        i64::from(self.lines_since_input) + 1 > threshold
    }

    /// Count one line of output.
    pub fn record_line(&mut self) {
        self.lines_since_input = self.lines_since_input.saturating_add(1);
    }

    /// Forget all lines shown so far.
    pub fn reset(&mut self) {
        self.lines_since_input = 0;
    }
}
