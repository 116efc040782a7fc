//! Command parsing for the demo adventure.

/// Compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction from a word.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Display name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing was typed.
    Empty,
    /// Describe the current room.
    Look,
    /// Move in a direction.
    Move(Direction),
    /// Read whatever is written here.
    Read,
    /// Tell the time.
    Time,
    /// Roll a die with this many sides.
    Roll(u32),
    /// Show help.
    Help,
    /// End the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

const MOVE_VERBS: &[&str] = &["go", "walk", "move"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const READ_VERBS: &[&str] = &["read", "study"];
const TIME_VERBS: &[&str] = &["time", "clock"];
const ROLL_VERBS: &[&str] = &["roll", "dice"];
const HELP_VERBS: &[&str] = &["help", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q"];

/// Sides on the die rolled when none are given.
const DEFAULT_SIDES: u32 = 6;

/// Parse a line of player input.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
    let Some(verb) = words.first() else {
        return Command::Empty;
    };
    let verb = verb.as_str();
    let rest = &words[1..];

    if let Some(direction) = Direction::parse(verb) {
        return Command::Move(direction);
    }
    if MOVE_VERBS.contains(&verb) {
        return match rest.first().and_then(|w| Direction::parse(w)) {
            Some(direction) => Command::Move(direction),
            None => Command::Unknown(input.trim().to_string()),
        };
    }
    if ROLL_VERBS.contains(&verb) {
        let sides = match rest.first() {
            None => DEFAULT_SIDES,
            Some(word) => match word.trim_start_matches('d').parse() {
                Ok(n) if n > 0 => n,
                _ => return Command::Unknown(input.trim().to_string()),
            },
        };
        return Command::Roll(sides);
    }

    if LOOK_VERBS.contains(&verb) {
        Command::Look
    } else if READ_VERBS.contains(&verb) {
        Command::Read
    } else if TIME_VERBS.contains(&verb) {
        Command::Time
    } else if HELP_VERBS.contains(&verb) {
        Command::Help
    } else if QUIT_VERBS.contains(&verb) {
        Command::Quit
    } else {
        Command::Unknown(input.trim().to_string())
    }
}
