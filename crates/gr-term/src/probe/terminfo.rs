//! Row count from the compiled terminfo database.
//!
//! Only the numeric `lines` capability is read. Both the legacy format
//! (16-bit numbers) and the extended-number format (32-bit numbers) are
//! understood; extended capability sections are ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::{DEFAULT_ROWS, RowProbe};

const MAGIC_LEGACY: u16 = 0o432;
const MAGIC_EXTENDED: u16 = 0o1036;
const HEADER_LEN: usize = 12;
/// Position of `lines` in the predefined numeric capabilities.
const LINES_INDEX: usize = 2;

const SYSTEM_DIRS: [&str; 3] = ["/etc/terminfo", "/lib/terminfo", "/usr/share/terminfo"];

/// Why the terminfo database could not supply a row count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermInfoError {
    /// No terminal type is known.
    #[error("terminal type is not set")]
    NoTerm,

    /// No database entry for the terminal type.
    #[error("no terminfo entry for {0}")]
    NotFound(String),

    /// The entry could not be read.
    #[error("cannot read terminfo entry {path}: {reason}")]
    Unreadable {
        /// Path of the entry.
        path: PathBuf,
        /// Underlying I/O error message.
        reason: String,
    },

    /// The file does not start with a known magic number.
    #[error("bad terminfo magic {0:#o}")]
    BadMagic(u16),

    /// The file ends before the data it describes.
    #[error("terminfo entry is truncated")]
    Truncated,

    /// The entry has no usable `lines` capability.
    #[error("terminfo entry has no lines capability")]
    MissingLines,
}

/// Looks up the `lines` capability for a terminal type.
#[derive(Debug, Clone)]
pub struct TermInfoProbe {
    term: Option<String>,
    search_dirs: Vec<PathBuf>,
}

impl TermInfoProbe {
    /// Probe a specific terminal type in the given directories, in order.
    pub fn new(term: impl Into<String>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            term: Some(term.into()),
            search_dirs,
        }
    }

    /// Probe `$TERM` using the standard search path.
    ///
    /// Looks in `$TERMINFO`, `~/.terminfo`, each entry of `$TERMINFO_DIRS`,
    /// then the usual system locations.
    pub fn from_env() -> Self {
        let term = env::var("TERM").ok().filter(|t| !t.is_empty());

        let mut search_dirs = Vec::new();
        if let Some(dir) = env::var_os("TERMINFO") {
            search_dirs.push(PathBuf::from(dir));
        }
        if let Some(home) = env::var_os("HOME") {
            search_dirs.push(Path::new(&home).join(".terminfo"));
        }
        if let Ok(dirs) = env::var("TERMINFO_DIRS") {
            search_dirs.extend(
                dirs.split(':')
                    .filter(|d| !d.is_empty())
                    .map(PathBuf::from),
            );
        }
        search_dirs.extend(SYSTEM_DIRS.iter().map(PathBuf::from));

        Self { term, search_dirs }
    }

    /// The `lines` capability of the terminal.
    pub fn lines(&self) -> Result<u16, TermInfoError> {
        let term = self.term.as_deref().ok_or(TermInfoError::NoTerm)?;
        let path = self.locate(term)?;
        let bytes = fs::read(&path).map_err(|e| TermInfoError::Unreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        parse_lines(&bytes)
    }

    /// Find the compiled entry for `term`.
    fn locate(&self, term: &str) -> Result<PathBuf, TermInfoError> {
        // a terminal name is a single path component, never a path
        if term.contains(['/', '\\']) || term == "." || term == ".." {
            return Err(TermInfoError::NotFound(term.to_string()));
        }
        let first = term
            .chars()
            .next()
            .ok_or_else(|| TermInfoError::NotFound(term.to_string()))?;
        let letter_dir = first.to_string();
        let hex_dir = format!("{:x}", u32::from(first));

        self.search_dirs
            .iter()
            .flat_map(|dir| [dir.join(&letter_dir).join(term), dir.join(&hex_dir).join(term)])
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| TermInfoError::NotFound(term.to_string()))
    }
}

impl RowProbe for TermInfoProbe {
    fn probe_rows(&self) -> u16 {
        match self.lines() {
            Ok(rows) => rows,
            Err(e) => {
                debug!(error = %e, "terminfo lookup failed, assuming {DEFAULT_ROWS}");
                DEFAULT_ROWS
            }
        }
    }
}

/// Extract the `lines` capability from a compiled terminfo entry.
pub fn parse_lines(bytes: &[u8]) -> Result<u16, TermInfoError> {
    let magic = read_u16(bytes, 0)?;
    let number_width = match magic {
        MAGIC_LEGACY => 2,
        MAGIC_EXTENDED => 4,
        other => return Err(TermInfoError::BadMagic(other)),
    };
    let names_size = usize::from(read_u16(bytes, 2)?);
    let bool_count = usize::from(read_u16(bytes, 4)?);
    let number_count = usize::from(read_u16(bytes, 6)?);

    if number_count <= LINES_INDEX || number_count == usize::from(u16::MAX) {
        return Err(TermInfoError::MissingLines);
    }

    // The number section starts on an even offset.
    let mut offset = HEADER_LEN + names_size + bool_count;
    offset += offset % 2;
    let at = offset + LINES_INDEX * number_width;

    let value = if number_width == 2 {
        i32::from(read_u16(bytes, at)? as i16)
    } else {
        read_i32(bytes, at)?
    };

    // -1 is "absent", -2 is "cancelled".
    if value <= 0 {
        return Err(TermInfoError::MissingLines);
    }
    u16::try_from(value).map_err(|_| TermInfoError::MissingLines)
}

fn read_u16(bytes: &[u8], at: usize) -> Result<u16, TermInfoError> {
    bytes
        .get(at..at + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or(TermInfoError::Truncated)
}

fn read_i32(bytes: &[u8], at: usize) -> Result<i32, TermInfoError> {
    bytes
        .get(at..at + 4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(TermInfoError::Truncated)
}
