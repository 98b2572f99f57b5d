use crate::{Controls, Wait};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    collections::VecDeque,
    io,
    time::{Duration, Instant},
};

/// Keys kept between generation boundaries; later presses are dropped.
const MAX_PENDING: usize = 16;

/// Where key presses come from.
pub trait KeySource {
    /// Next key press, if one arrives within `timeout`.
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Key presses from the terminal via crossterm.
#[derive(Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Keyboard controls of a running simulation.
///
/// Keys pressed while waiting are queued and only looked at on the next
/// [`Controls::cancel_requested`] call, one key per call. Ctrl-C and Esc
/// interrupt the wait.
pub struct TerminalControls<S: KeySource = CrosstermKeys> {
    source: S,
    pending: VecDeque<KeyEvent>,
    interrupted: bool,
}

impl TerminalControls {
    pub fn new() -> Self {
        Self::with_source(CrosstermKeys)
    }
}

impl Default for TerminalControls {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KeySource> TerminalControls<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            interrupted: false,
        }
    }

    fn queue(&mut self, key: KeyEvent) {
        if is_interrupt(&key) {
            self.interrupted = true;
        } else if self.pending.len() < MAX_PENDING {
            self.pending.push_back(key);
        } else {
            log::trace!("Dropping key {:?}, queue is full", key.code);
        }
    }
}

pub fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char(' ')
}

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl<S: KeySource> Controls for TerminalControls<S> {
    fn cancel_requested(&mut self) -> bool {
        if self.pending.is_empty() {
            match self.source.next_key(Duration::ZERO) {
                Ok(Some(key)) => self.queue(key),
                Ok(None) => {}
                Err(e) => log::error!("Error reading user input: {e}"),
            }
        }
        // one key is consumed per check
        self.pending.pop_front().is_some_and(|key| is_cancel(&key))
    }

    fn wait(&mut self, timeout: Duration) -> Wait {
        if self.interrupted {
            return Wait::Interrupted;
        }
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.source.next_key(remaining) {
                Ok(Some(key)) => {
                    self.queue(key);
                    if self.interrupted {
                        return Wait::Interrupted;
                    }
                }
                Ok(None) if remaining.is_zero() => return Wait::Elapsed,
                Ok(None) => {}
                Err(e) => {
                    log::error!("Error reading user input: {e}");
                    return Wait::Interrupted;
                }
            }
        }
    }
}
