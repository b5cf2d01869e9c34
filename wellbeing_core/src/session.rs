//! Interactive session controller.
//!
//! A [`Session`] owns the mood history for the lifetime of the process,
//! renders the menu, validates every line of input and dispatches to the
//! tip catalog, the breathing guide or the mood log.
//!
//! Input and output are generic so the same loop drives a real terminal
//! and an in-memory transcript in tests. Timing and randomness are
//! injected for the same reason.

use crate::breathing::{BreathingGuide, Delay, SleepDelay};
use crate::catalog::TipCatalog;
use crate::types::{MoodHistory, MoodRecord, MAX_RATING, MIN_RATING, NO_NOTE};
use crate::{Error, Result};
use rand::RngCore;
use std::io::{BufRead, Write};

const MENU: &[&str] = &[
    "",
    "--- Menu ---",
    "1. Log today's mood",
    "2. View mood history",
    "3. Get a random self-care tip",
    "4. View all self-care tips",
    "5. Do a quick breathing exercise",
    "6. Exit",
    "------------",
    "",
];

const CHOICE_PROMPT: &str = "Enter your choice (1-6): ";
const RATING_PROMPT: &str = "Rate your mood (1-10, 1=very low, 10=excellent): ";
const NOTE_PROMPT: &str = "Add a short note (optional, or press Enter to skip): ";

/// Printed when a line that should be a number is not one
pub const INVALID_INPUT_MSG: &str = "Invalid input. Please enter a number.";
/// Printed when a rating parses but falls outside 1-10
pub const OUT_OF_RANGE_MSG: &str = "Please enter a number between 1 and 10.";
/// Printed for a numeric menu choice that maps to no action
pub const INVALID_CHOICE_MSG: &str = "Invalid choice. Please try again.";
/// Printed when viewing an empty history
pub const EMPTY_HISTORY_MSG: &str = "No moods logged yet. Start with option 1!";
/// Printed on exit through the menu
pub const FAREWELL_MSG: &str = "Take care! Prioritize your wellbeing.";

/// Lifecycle of a session; `Terminated` is final
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Actions reachable from the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    LogMood,
    ViewHistory,
    RandomTip,
    ListTips,
    Breathing,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its action; anything outside 1-6 is `None`
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::LogMood),
            2 => Some(MenuChoice::ViewHistory),
            3 => Some(MenuChoice::RandomTip),
            4 => Some(MenuChoice::ListTips),
            5 => Some(MenuChoice::Breathing),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parse one line of input as an integer; surrounding whitespace is rejected
pub fn parse_int(line: &str) -> Option<i32> {
    line.parse().ok()
}

/// The interactive command loop and the history it owns
pub struct Session<R, W> {
    input: R,
    output: W,
    catalog: TipCatalog,
    history: MoodHistory,
    delay: Box<dyn Delay>,
    rng: Box<dyn RngCore>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with real sleeps and a thread-local RNG
    pub fn new(input: R, output: W, catalog: TipCatalog) -> Self {
        Self {
            input,
            output,
            catalog,
            history: MoodHistory::new(),
            delay: Box::new(SleepDelay::default()),
            rng: Box::new(rand::thread_rng()),
            state: SessionState::Running,
        }
    }

    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Start from an existing history instead of an empty one
    pub fn with_history(mut self, history: MoodHistory) -> Self {
        self.history = history;
        self
    }

    pub fn history(&self) -> &MoodHistory {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run until the user exits or input runs out
    ///
    /// Consumes the session so the input stream is released on return.
    /// Hands back the history that was built up.
    pub fn run(mut self) -> Result<MoodHistory> {
        self.print_welcome()?;

        while self.state == SessionState::Running {
            match self.step() {
                Ok(()) => {}
                Err(Error::InputClosed) => {
                    tracing::info!("Input closed, ending session");
                    self.state = SessionState::Terminated;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!("Session ended with {} mood(s) logged", self.history.len());
        let Session { history, .. } = self;
        Ok(history)
    }

    /// One pass of the loop: show the menu, read a choice, act on it
    pub fn step(&mut self) -> Result<()> {
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        let line = self.prompt(CHOICE_PROMPT)?;

        match parse_int(&line) {
            Some(choice) => self.dispatch(choice),
            None => {
                writeln!(self.output, "{}", INVALID_INPUT_MSG)?;
                Ok(())
            }
        }
    }

    /// Act on an already-parsed menu number
    pub fn dispatch(&mut self, choice: i32) -> Result<()> {
        let Some(action) = MenuChoice::from_number(choice) else {
            tracing::debug!("Rejected menu choice {}", choice);
            writeln!(self.output, "{}", INVALID_CHOICE_MSG)?;
            writeln!(self.output)?;
            return Ok(());
        };

        tracing::debug!("Dispatching {:?}", action);
        match action {
            MenuChoice::LogMood => self.log_mood(),
            MenuChoice::ViewHistory => self.view_history(),
            MenuChoice::RandomTip => self.random_tip(),
            MenuChoice::ListTips => self.list_tips(),
            MenuChoice::Breathing => self.breathing(),
            MenuChoice::Exit => self.exit(),
        }
    }

    /// Ask for date, rating and note, then append a new record
    pub fn log_mood(&mut self) -> Result<()> {
        let today = chrono::Local::now().format("%Y-%m-%d");
        let date = self.prompt(&format!("Enter today's date (e.g., {}): ", today))?;
        let rating = self.prompt_rating()?;
        let note = self.prompt(NOTE_PROMPT)?;
        let note = if note.is_empty() {
            NO_NOTE.to_string()
        } else {
            note
        };

        let record = MoodRecord::new(rating, date, note);
        let level = record.level();
        self.history.push(record);
        tracing::info!("Logged mood {} ({} entries)", rating, self.history.len());

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Mood logged! Your rating: {}/10 ({}). Great job checking in.",
            rating, level
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Print every record followed by the average rating
    pub fn view_history(&mut self) -> Result<()> {
        let Some(average) = self.history.average_display() else {
            writeln!(self.output, "{}", EMPTY_HISTORY_MSG)?;
            writeln!(self.output)?;
            return Ok(());
        };

        writeln!(self.output)?;
        writeln!(self.output, "--- Mood History ---")?;
        for record in self.history.iter() {
            writeln!(self.output, "{}", record)?;
        }
        writeln!(self.output, "Average mood: {}/10", average)?;
        writeln!(self.output, "-------------------")?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn random_tip(&mut self) -> Result<()> {
        let tip = self.catalog.pick_random(&mut *self.rng);
        writeln!(self.output, "Here's a random self-care tip: {}", tip)?;
        Ok(())
    }

    pub fn list_tips(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Self-Care Tips:")?;
        for (number, tip) in self.catalog.list_all() {
            writeln!(self.output, "{}. {}", number, tip)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Run the full breathing script; returns only once it has finished
    pub fn breathing(&mut self) -> Result<()> {
        BreathingGuide::default().run(&mut self.output, &mut *self.delay)
    }

    pub fn exit(&mut self) -> Result<()> {
        writeln!(self.output, "{}", FAREWELL_MSG)?;
        self.output.flush()?;
        self.state = SessionState::Terminated;
        Ok(())
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Wellbeing Journal")?;
        writeln!(
            self.output,
            "This app helps track your mood and offers simple wellbeing tools."
        )?;
        writeln!(
            self.output,
            "Remember: You're not alone. Small steps make a big difference."
        )?;
        Ok(())
    }

    /// Keep asking until the answer is a whole number from 1 to 10
    fn prompt_rating(&mut self) -> Result<i32> {
        loop {
            let line = self.prompt(RATING_PROMPT)?;
            match parse_int(&line) {
                Some(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => {
                    return Ok(rating)
                }
                Some(rating) => {
                    tracing::debug!("Rating {} out of range", rating);
                    writeln!(self.output, "{}", OUT_OF_RANGE_MSG)?;
                }
                None => writeln!(self.output, "{}", INVALID_INPUT_MSG)?,
            }
        }
    }

    /// Print `text` without a newline and read the reply
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line with its line ending removed
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// a stray byte in a note or a menu choice never ends the session.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
