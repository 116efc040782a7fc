//! Services handed to a running game.

use std::fmt;
use std::io::{BufRead, Write};

use gr_term::{Pager, TermResult};

use crate::clock::{ClockSource, TimeOfDay};
use crate::random::RandomSource;

/// Everything a game may use to talk to the outside world.
///
/// All terminal traffic goes through the one [`Pager`] owned here.
pub struct Host<W, R> {
    pager: Pager<W, R>,
    clock: Box<dyn ClockSource>,
    random: Box<dyn RandomSource>,
}

impl<W: Write, R: BufRead> Host<W, R> {
    /// Bundle a pager with clock and random sources.
    pub fn new(
        pager: Pager<W, R>,
        clock: Box<dyn ClockSource>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            pager,
            clock,
            random,
        }
    }

    /// The terminal pager.
    pub fn pager(&self) -> &Pager<W, R> {
        &self.pager
    }

    /// The terminal pager, mutably.
    pub fn pager_mut(&mut self) -> &mut Pager<W, R> {
        &mut self.pager
    }

    /// Show one or more lines of text.
    pub fn say(&mut self, text: &str) -> TermResult<()> {
        self.pager.emit_text(text)
    }

    /// Show one formatted line.
    pub fn say_fmt(&mut self, args: fmt::Arguments<'_>) -> TermResult<()> {
        self.pager.emit_fmt(args)
    }

    /// Prompt for and read a line of player input. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> TermResult<Option<String>> {
        self.pager.write_prompt(prompt)?;
        self.pager.read_line()
    }

    /// The current time of day.
    pub fn time(&self) -> TimeOfDay {
        self.clock.current_time()
    }

    /// A random value in `[0, bound)`.
    pub fn random_int(&mut self, bound: u32) -> u32 {
        self.random.random_int(bound)
    }
}
