//! Session lifecycle: initialize the world, play, terminate.
//!
//! ```text
//! Uninitialized ──init ok──▶ Initialized ──▶ Playing ──loop returns──▶ Terminated
//!       │                                                              │  ▲
//!       └────────────────────────init failed───────────────────────────┘  │
//!                                    (continuous mode) re-initialize ─────┘
//! ```

use std::io::{BufRead, Write};

use gr_term::TermResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::RuntimeResult;
use crate::host::Host;

/// Notice printed to stderr when the process is about to end.
pub const GAME_OVER: &str = "The game is over.";

/// What happens after a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifecycleMode {
    /// Print the termination notice and exit.
    #[default]
    SingleRun,
    /// Start a fresh session, forever.
    Continuous,
}

/// Where the controller is in the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Nothing has happened yet.
    Uninitialized,
    /// The world is ready to play.
    Initialized,
    /// The game loop is (about to be) running.
    Playing,
    /// The session is over.
    Terminated,
}

/// Outcome of one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More steps follow.
    Continue,
    /// The process should exit successfully.
    Exit,
}

/// A game the shell can run.
pub trait Game {
    /// Set up the world for a new session. Returns `Ok(false)` if the world
    /// could not be built, in which case no play happens. Terminal errors
    /// are fatal.
    fn initialize_world<W: Write, R: BufRead>(
        &mut self,
        host: &mut Host<W, R>,
    ) -> TermResult<bool>;

    /// Play until the player quits. Terminal errors are fatal.
    fn run_game_loop<W: Write, R: BufRead>(&mut self, host: &mut Host<W, R>) -> TermResult<()>;
}

/// Drives a [`Game`] through its lifecycle.
pub struct Controller<G, W, R, E> {
    game: G,
    host: Host<W, R>,
    mode: LifecycleMode,
    state: LifecycleState,
    notices: E,
    sessions: u64,
}

impl<G, W, R, E> Controller<G, W, R, E>
where
    G: Game,
    W: Write,
    R: BufRead,
    E: Write,
{
    /// Create a controller. The termination notice is written to `notices`.
    pub fn new(game: G, host: Host<W, R>, mode: LifecycleMode, notices: E) -> Self {
        Self {
            game,
            host,
            mode,
            state: LifecycleState::Uninitialized,
            notices,
            sessions: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Number of game loops that have run to completion.
    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    /// The game being run.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The host services.
    pub fn host(&self) -> &Host<W, R> {
        &self.host
    }

    /// Where termination notices go.
    pub fn notices(&self) -> &E {
        &self.notices
    }

    /// Run until the process should exit.
    ///
    /// In continuous mode this only returns on error.
    pub fn run(&mut self) -> RuntimeResult<()> {
        while self.step()? == Step::Continue {}
        Ok(())
    }

    /// Perform a single state transition.
    pub fn step(&mut self) -> RuntimeResult<Step> {
        match self.state {
            LifecycleState::Uninitialized => self.initialize(),
            LifecycleState::Initialized => {
                self.state = LifecycleState::Playing;
                Ok(Step::Continue)
            }
            LifecycleState::Playing => {
                debug!(session = self.sessions + 1, "entering game loop");
                self.game.run_game_loop(&mut self.host)?;
                self.sessions += 1;
                self.state = LifecycleState::Terminated;
                info!(sessions = self.sessions, "session ended");
                Ok(Step::Continue)
            }
            LifecycleState::Terminated => match self.mode {
                LifecycleMode::SingleRun => {
                    self.terminate()?;
                    Ok(Step::Exit)
                }
                LifecycleMode::Continuous => self.initialize(),
            },
        }
    }

    fn initialize(&mut self) -> RuntimeResult<Step> {
        if self.game.initialize_world(&mut self.host)? {
            debug!("world initialized");
            self.state = LifecycleState::Initialized;
        } else {
            warn!("world initialization failed, skipping play");
            self.state = LifecycleState::Terminated;
        }
        Ok(Step::Continue)
    }

    fn terminate(&mut self) -> RuntimeResult<()> {
        writeln!(self.notices, "{GAME_OVER}")?;
        self.notices.flush()?;
        self.host.pager_mut().flush()?;
        Ok(())
    }
}
