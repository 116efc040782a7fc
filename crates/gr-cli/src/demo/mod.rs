//! A tiny built-in adventure so the shell has something to run.

pub mod command;

use std::io::{BufRead, Write};

use gr_runtime::{Game, Host};
use gr_term::TermResult;

use self::command::{Command, Direction, parse_command};

/// Prompt shown when waiting for a command.
pub const PROMPT: &str = "> ";

struct Room {
    name: &'static str,
    description: &'static str,
    exits: &'static [(Direction, usize)],
    inscription: Option<&'static [&'static str]>,
}

const CAVE_MOUTH: usize = 0;

const ROOMS: &[Room] = &[
    Room {
        name: "Cave Mouth",
        description: "Daylight fades behind you. A damp passage leads north into the hill.",
        exits: &[(Direction::North, 1)],
        inscription: None,
    },
    Room {
        name: "Dripping Hall",
        description: "Water beads on the ceiling and falls in slow, echoing drops.\n\
                      Passages lead south, east and west.",
        exits: &[(Direction::South, 0), (Direction::East, 2), (Direction::West, 3)],
        inscription: None,
    },
    Room {
        name: "Carved Gallery",
        description: "The walls here are smooth and covered in tiny, careful lettering.\n\
                      The only way out is west.",
        exits: &[(Direction::West, 1)],
        inscription: Some(CHRONICLE),
    },
    Room {
        name: "Still Pool",
        description: "A black pool fills most of this chamber. Nothing disturbs its surface.\n\
                      The passage back lies east.",
        exits: &[(Direction::East, 1)],
        inscription: None,
    },
];

const CHRONICLE: &[&str] = &[
    "THE CHRONICLE OF THE DEEP ROADS",
    "",
    "In the first age the miners came with lamps of brass.",
    "They followed the silver vein from the cave mouth inward.",
    "In the second year they found the hall where water sings.",
    "In the third year they carved this gallery, and wrote.",
    "They wrote of the lake that has no bottom.",
    "They wrote of the stair that goes down and never up.",
    "They wrote of the lamp that burned without oil.",
    "They wrote of the thief who stole the lamp.",
    "They wrote of the dark that followed the theft.",
    "In the fourth year the silver ran thin.",
    "In the fifth year the water rose.",
    "In the sixth year the lamps went out one by one.",
    "The last miner wrote these lines by touch alone:",
    "",
    "  Whoever reads this, read slowly.",
    "  The deep roads do not forgive haste.",
    "  Count your steps. Count your breaths.",
    "  Count the lines you have read, and rest",
    "  before the wall runs out of words.",
    "",
    "Below, in a different and shakier hand:",
    "",
    "  The pool to the west is not a pool.",
    "  Do not drink from it. Do not look too long.",
    "",
    "Below that, scratched very small:",
    "",
    "  Turn back.",
];

const HELP: &str = "Commands:\n\
    \x20 look                 describe where you are\n\
    \x20 north, south, ...    move (or n, s, e, w; go <direction>)\n\
    \x20 read                 read any writing here\n\
    \x20 time                 check the time\n\
    \x20 roll [sides]         roll a die (default six sides)\n\
    \x20 help                 show this list\n\
    \x20 quit                 end the game";

/// The demo adventure.
#[derive(Debug, Default)]
pub struct Demo {
    location: usize,
    moves: u32,
}

impl Demo {
    /// A fresh adventure.
    pub fn new() -> Self {
        Self::default()
    }

    fn room(&self) -> &'static Room {
        &ROOMS[self.location]
    }

    fn describe<W: Write, R: BufRead>(&self, host: &mut Host<W, R>) -> TermResult<()> {
        let room = self.room();
        host.say(room.name)?;
        host.say(room.description)
    }

    /// Apply one command. Returns `false` when the game should end.
    fn execute<W: Write, R: BufRead>(
        &mut self,
        command: Command,
        host: &mut Host<W, R>,
    ) -> TermResult<bool> {
        match command {
            Command::Empty => {}
            Command::Look => self.describe(host)?,
            Command::Move(direction) => {
                let exit = self
                    .room()
                    .exits
                    .iter()
                    .find(|(d, _)| *d == direction)
                    .map(|&(_, to)| to);
                match exit {
                    Some(to) => {
                        self.location = to;
                        self.moves += 1;
                        self.describe(host)?;
                    }
                    None => host.say_fmt(format_args!("You can't go {} from here.", direction.name()))?,
                }
            }
            Command::Read => match self.room().inscription {
                Some(lines) => {
                    for &line in lines {
                        host.pager_mut().emit(Some(line))?;
                    }
                }
                None => host.say("There is nothing here to read.")?,
            },
            Command::Time => {
                let now = host.time();
                host.say_fmt(format_args!("Somewhere above, it is {now}."))?;
            }
            Command::Roll(sides) => {
                let value = host.random_int(sides) + 1;
                host.say_fmt(format_args!("You roll a d{sides}: {value}."))?;
            }
            Command::Help => host.say(HELP)?,
            Command::Quit => {
                host.say_fmt(format_args!("You leave after {} moves.", self.moves))?;
                return Ok(false);
            }
            Command::Unknown(input) => {
                host.say_fmt(format_args!("I don't know how to \"{input}\"."))?;
            }
        }
        Ok(true)
    }
}

impl Game for Demo {
    fn initialize_world<W: Write, R: BufRead>(
        &mut self,
        host: &mut Host<W, R>,
    ) -> TermResult<bool> {
        self.location = CAVE_MOUTH;
        self.moves = 0;
        host.say("Welcome to Grotto. Type \"help\" for commands.")?;
        self.describe(host)?;
        Ok(true)
    }

    fn run_game_loop<W: Write, R: BufRead>(&mut self, host: &mut Host<W, R>) -> TermResult<()> {
        loop {
            let Some(line) = host.ask(PROMPT)? else {
                // leave the cursor on a fresh line after end of input
                host.pager_mut().emit(Some(""))?;
                return Ok(());
            };
            if !self.execute(parse_command(&line), host)? {
                return Ok(());
            }
        }
    }
}
