//! Paced line output.
//!
//! All game text goes through a [`Pager`]. It writes and flushes each line
//! immediately, counts lines since the player last typed something, and when
//! pacing is on it stops before a screenful scrolls away, waiting for the
//! player to press return.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::error::TermResult;
use crate::probe::RowProbe;
use crate::session::{Pacing, TerminalSession};

/// Prompt shown while output is paused.
pub const CONTINUE_PROMPT: &str = "Press return to continue: ";

/// Pager over the process's standard streams.
pub type StdioPager = Pager<io::Stdout, io::StdinLock<'static>>;

/// Line-oriented terminal writer with a "more" facility.
pub struct Pager<W, R> {
    session: TerminalSession,
    output: W,
    input: R,
}

impl StdioPager {
    /// Create a pager on stdout/stdin.
    pub fn stdio(probe: &impl RowProbe, pacing: Pacing) -> Self {
        Self::new(probe, pacing, io::stdout(), io::stdin().lock())
    }
}

impl<W: Write, R: BufRead> Pager<W, R> {
    /// Create a pager, probing the terminal for its row count.
    ///
    /// If the probe does not support pacing the pager runs unpaced
    /// regardless of `pacing`.
    pub fn new(probe: &impl RowProbe, pacing: Pacing, output: W, input: R) -> Self {
        let row_capacity = probe.probe_rows();
        let pacing = if probe.supports_pacing() {
            pacing
        } else {
            Pacing::Unpaced
        };
        debug!(row_capacity, ?pacing, "pager initialized");

        Self {
            session: TerminalSession::new(row_capacity, pacing),
            output,
            input,
        }
    }

    /// Current pacing state.
    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Emit one line of output.
    ///
    /// With `Some(line)` the text is written followed by a newline. With
    /// `None` the caller has already written the line through
    /// [`writer`](Self::writer) and this only flushes and counts it.
    pub fn emit(&mut self, line: Option<&str>) -> TermResult<()> {
        self.wait_if_due()?;
        if let Some(line) = line {
            writeln!(self.output, "{line}")?;
        }
        self.finish_line()
    }

    /// Emit one formatted line, pausing first if the screen is full.
    pub fn emit_fmt(&mut self, args: fmt::Arguments<'_>) -> TermResult<()> {
        self.wait_if_due()?;
        self.output.write_fmt(args)?;
        self.output.write_all(b"\n")?;
        self.finish_line()
    }

    /// Emit every line of a block of text, in order.
    pub fn emit_text(&mut self, text: &str) -> TermResult<()> {
        for line in text.lines() {
            self.emit(Some(line))?;
        }
        Ok(())
    }

    /// Note that the player just entered a line of input.
    pub fn notify_input(&mut self) {
        self.session.reset();
    }

    /// Write a prompt without a trailing newline.
    ///
    /// Prompts are not counted: the player answers them straight away.
    pub fn write_prompt(&mut self, prompt: &str) -> TermResult<()> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line of player input, without its line terminator.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self) -> TermResult<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.notify_input();

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Flush pending output.
    pub fn flush(&mut self) -> TermResult<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Direct access to the output stream for pre-formatted lines.
    ///
    /// Follow each line written here with `emit(None)`.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// The output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn wait_if_due(&mut self) -> TermResult<()> {
        if !self.session.pause_due() {
            return Ok(());
        }
        debug!(
            lines = self.session.lines_since_input(),
            rows = self.session.row_capacity(),
            "screen full, waiting for reader"
        );
        self.write_prompt(CONTINUE_PROMPT)?;
        self.skip_to_newline()?;
        self.session.reset();
        Ok(())
    }

    /// Consume input up to and including the next newline.
    ///
    /// End of input also releases the wait, since nothing more can arrive.
    fn skip_to_newline(&mut self) -> io::Result<()> {
        let mut discarded = Vec::new();
        let read = self.input.read_until(b'\n', &mut discarded)?;
        trace!(read, "pause released");
        Ok(())
    }

    fn finish_line(&mut self) -> TermResult<()> {
        self.output.flush()?;
        self.session.record_line();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TermError;
    use crate::probe::{CapabilityPolicy, FixedRows};
    use proptest::prelude::*;
    use std::io::Cursor;

    type TestPager = Pager<Vec<u8>, Cursor<Vec<u8>>>;

    fn pager(rows: u16, pacing: Pacing, input: &str) -> TestPager {
        Pager::new(
            &FixedRows(rows),
            pacing,
            Vec::new(),
            Cursor::new(input.as_bytes().to_vec()),
        )
    }

    fn text(pager: &TestPager) -> String {
        String::from_utf8(pager.output().clone()).unwrap()
    }

    fn lines(range: std::ops::RangeInclusive<usize>) -> String {
        range.map(|i| format!("line {i}\n")).collect()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    /// Writer that keeps flushed and pending bytes apart.
    #[derive(Default)]
    struct FlushLog {
        flushed: Vec<u8>,
        pending: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.pending.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed.append(&mut self.pending);
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn new_probes_rows() {
        let pager = pager(40, Pacing::Paced, "");
        assert_eq!(pager.session().row_capacity(), 40);
        assert_eq!(pager.session().lines_since_input(), 0);
    }

    #[test]
    fn emit_writes_line_and_counts() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        pager.emit(Some("West of House")).unwrap();
        pager.emit(Some("")).unwrap();

        assert_eq!(text(&pager), "West of House\n\n");
        assert_eq!(pager.session().lines_since_input(), 2);
    }

    #[test]
    fn emit_none_only_counts() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        writeln!(pager.writer(), "You have {} points.", 10).unwrap();
        pager.emit(None).unwrap();

        assert_eq!(text(&pager), "You have 10 points.\n");
        assert_eq!(pager.session().lines_since_input(), 1);
    }

    #[test]
    fn emit_fmt_formats_line() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        pager.emit_fmt(format_args!("Score: {}/{}", 3, 350)).unwrap();
        assert_eq!(text(&pager), "Score: 3/350\n");
        assert_eq!(pager.session().lines_since_input(), 1);
    }

    #[test]
    fn every_emit_flushes() {
        let mut pager = Pager::new(
            &FixedRows(24),
            Pacing::Unpaced,
            FlushLog::default(),
            Cursor::new(Vec::new()),
        );

        pager.emit(Some("Dripping Hall")).unwrap();
        assert_eq!(pager.output().flushes, 1);
        assert!(pager.output().pending.is_empty());

        writeln!(pager.writer(), "Score: 3").unwrap();
        assert_eq!(pager.output().pending, b"Score: 3\n");
        pager.emit(None).unwrap();
        assert_eq!(pager.output().flushes, 2);
        assert!(pager.output().pending.is_empty());

        pager.emit_fmt(format_args!("{} moves", 4)).unwrap();
        assert_eq!(pager.output().flushes, 3);
        assert!(pager.output().pending.is_empty());
        assert_eq!(pager.output().flushed, b"Dripping Hall\nScore: 3\n4 moves\n");
    }

    #[test]
    fn emit_text_splits_lines() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        pager.emit_text("one\ntwo\nthree").unwrap();
        assert_eq!(text(&pager), "one\ntwo\nthree\n");
        assert_eq!(pager.session().lines_since_input(), 3);
    }

    #[test]
    fn notify_input_resets() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        pager.notify_input();
        assert_eq!(pager.session().lines_since_input(), 0);
        for _ in 0..30 {
            pager.emit(Some("x")).unwrap();
        }
        pager.notify_input();
        assert_eq!(pager.session().lines_since_input(), 0);
    }

    #[test]
    fn unpaced_never_prompts() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        for i in 1..=100 {
            pager.emit(Some(format!("line {i}").as_str())).unwrap();
        }
        assert_eq!(text(&pager), lines(1..=100));
        assert_eq!(pager.session().lines_since_input(), 100);
    }

    #[test]
    fn paced_prompts_before_23rd_line() {
        let mut pager = pager(24, Pacing::Paced, "\n");
        for i in 1..=22 {
            pager.emit(Some(format!("line {i}").as_str())).unwrap();
        }
        assert_eq!(text(&pager), lines(1..=22));

        pager.emit(Some("line 23")).unwrap();
        let expected = format!("{}{CONTINUE_PROMPT}line 23\n", lines(1..=22));
        assert_eq!(text(&pager), expected);
        assert_eq!(pager.session().lines_since_input(), 1);
    }

    #[test]
    fn input_postpones_pause() {
        let mut pager = pager(24, Pacing::Paced, "look\n");
        for _ in 0..20 {
            pager.emit(Some("text")).unwrap();
        }
        assert_eq!(pager.read_line().unwrap(), Some("look".to_string()));
        for _ in 0..22 {
            pager.emit(Some("text")).unwrap();
        }
        assert!(!text(&pager).contains(CONTINUE_PROMPT));
    }

    #[test]
    fn pause_consumes_only_one_line() {
        let mut pager = pager(4, Pacing::Paced, "ignored words\nnorth\n");
        for _ in 0..3 {
            pager.emit(Some("text")).unwrap();
        }
        assert!(text(&pager).contains(CONTINUE_PROMPT));
        assert_eq!(pager.read_line().unwrap(), Some("north".to_string()));
    }

    #[test]
    fn pause_released_at_end_of_input() {
        let mut pager = pager(4, Pacing::Paced, "");
        for _ in 0..10 {
            pager.emit(Some("text")).unwrap();
        }
        assert_eq!(text(&pager).matches(CONTINUE_PROMPT).count(), 4);
        assert_eq!(text(&pager).matches("text\n").count(), 10);
    }

    #[test]
    fn none_policy_forces_unpaced() {
        let mut pager = Pager::new(
            &CapabilityPolicy::None,
            Pacing::Paced,
            Vec::new(),
            Cursor::new(Vec::new()),
        );
        assert!(!pager.session().pacing_enabled());
        for _ in 0..50 {
            pager.emit(Some("text")).unwrap();
        }
        assert!(!String::from_utf8_lossy(pager.output()).contains(CONTINUE_PROMPT));
    }

    #[test]
    fn read_line_strips_terminators() {
        let mut pager = pager(24, Pacing::Unpaced, "open mailbox\r\nread leaflet");
        assert_eq!(pager.read_line().unwrap(), Some("open mailbox".to_string()));
        assert_eq!(pager.read_line().unwrap(), Some("read leaflet".to_string()));
        assert_eq!(pager.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_is_not_counted() {
        let mut pager = pager(24, Pacing::Unpaced, "");
        pager.write_prompt(">").unwrap();
        assert_eq!(text(&pager), ">");
        assert_eq!(pager.session().lines_since_input(), 0);
    }

    #[test]
    fn write_failure_is_error() {
        let mut pager = Pager::new(
            &FixedRows(24),
            Pacing::Unpaced,
            BrokenPipe,
            Cursor::new(Vec::new()),
        );
        let err = pager.emit(Some("lost")).unwrap_err();
        assert!(matches!(err, TermError::Io(_)));
        assert_eq!(pager.session().lines_since_input(), 0);
    }

    proptest! {
        #[test]
        fn output_preserves_order(
            input in proptest::collection::vec("[a-zA-Z0-9 .,!?]{0,40}", 0..80),
            rows in 3u16..40,
            paced in any::<bool>(),
        ) {
            let pacing = if paced { Pacing::Paced } else { Pacing::Unpaced };
            let mut pager = pager(rows, pacing, "");
            for line in &input {
                pager.emit(Some(line.as_str())).unwrap();
            }
            let shown = text(&pager).replace(CONTINUE_PROMPT, "");
            let expected: String = input.iter().map(|l| format!("{l}\n")).collect();
            prop_assert_eq!(shown, expected);
        }

        #[test]
        fn at_most_one_pause_per_screen(count in 1usize..200, rows in 3u16..40) {
            let replies = "\n".repeat(count);
            let mut pager = pager(rows, Pacing::Paced, &replies);
            for _ in 0..count {
                pager.emit(Some("text")).unwrap();
            }
            let pauses = text(&pager).matches(CONTINUE_PROMPT).count();
            let screen = usize::from(rows) - 2;
            prop_assert!(pauses <= count / screen);
            prop_assert_eq!(pauses, (count - 1) / screen);
        }
    }
}
