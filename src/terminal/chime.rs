use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

const BELL: &[u8] = b"\x07";
const GAP: Duration = Duration::from_millis(150);

/// Sound cues played through the terminal bell.
#[derive(Clone, Copy, Debug)]
pub struct Chime {
    enabled: bool,
}

impl Chime {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn silent() -> Self {
        Self::new(false)
    }

    /// Blocks until the cue is over.
    pub fn start(&self) {
        self.ring(2);
    }

    /// Returns immediately; the cue runs on a detached thread.
    pub fn generation(&self) {
        if !self.enabled {
            return;
        }
        thread::spawn(|| {
            if let Err(e) = ring_once() {
                log::debug!("Generation cue failed: {e}");
            }
        });
    }

    /// Blocks until the cue is over.
    pub fn end(&self) {
        self.ring(3);
    }

    fn ring(&self, times: usize) {
        if !self.enabled {
            return;
        }
        for i in 0..times {
            if i > 0 {
                thread::sleep(GAP);
            }
            if let Err(e) = ring_once() {
                log::debug!("Cue failed: {e}");
                return;
            }
        }
    }
}

fn ring_once() -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(BELL)?;
    out.flush()
}
