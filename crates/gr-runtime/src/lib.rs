//! Runtime shell for Grotto interactive fiction.
//!
//! Sequences a game through initialization, play and termination, and
//! supplies it with the services it needs: the paged terminal, a wall clock
//! and a random source. The game itself plugs in through the [`Game`] trait.

pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod random;

pub use clock::{ClockSource, FixedClock, LocalClock, TimeOfDay};
pub use config::ShellConfig;
pub use error::{ConfigError, RuntimeError, RuntimeResult};
pub use host::Host;
pub use lifecycle::{Controller, GAME_OVER, Game, LifecycleMode, LifecycleState, Step};
pub use random::{RandomSource, StdRandom};
