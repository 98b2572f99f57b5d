use super::Chime;
use crate::{Frame, StopReason, ALIVE_GLYPH, DEAD_GLYPH};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Prints frames and lifecycle notices.
///
/// Lines end with `\r\n` since the terminal is in raw mode while the loop runs.
pub struct TerminalView<W: Write> {
    out: W,
    chime: Chime,
}

impl TerminalView<io::Stdout> {
    pub fn stdout(chime: Chime) -> Self {
        Self::new(io::stdout(), chime)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, chime: Chime) -> Self {
        Self { out, chime }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        write!(self.out, "\r\n{}\r\n", frame.title().bold().yellow())?;
        for row in frame.rows() {
            for &alive in row {
                if alive {
                    write!(self.out, "{} ", ALIVE_GLYPH.green())?;
                } else {
                    write!(self.out, "{} ", DEAD_GLYPH.dark_grey())?;
                }
            }
            write!(self.out, "\r\n")?;
        }
        let (alive, dead) = frame.summary_parts();
        write!(self.out, "{} | {}\r\n", alive.green(), dead.red())?;
        self.out.flush()
    }

    fn notice(&mut self, text: String) {
        let result = write!(self.out, "\r\n{}\r\n", text.yellow()).and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::error!("Failed to write to the terminal: {e}");
        }
    }
}

impl<W: Write> crate::Observer for TerminalView<W> {
    fn frame(&mut self, frame: &Frame) {
        if let Err(e) = self.write_frame(frame) {
            log::error!("Failed to draw generation {}: {e}", frame.generation());
        }
    }

    fn generation_produced(&mut self, _generation: u64) {
        self.chime.generation();
    }

    fn stopped(&mut self, reason: StopReason, generation: u64) {
        let text = match reason {
            StopReason::User => format!("Simulation stopped by the user at generation {generation}."),
            StopReason::Interrupted => format!("Simulation interrupted at generation {generation}."),
        };
        self.notice(text);
    }

    fn completed(&mut self, limit: u64) {
        self.notice(format!(
            "Simulation completed: reached the limit of {limit} generations."
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalView;
    use crate::{Chime, Grid, Neighborhood, Observer, Population, StopReason};

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_frame_output() {
        let grid = Grid::new(3, 2, Neighborhood::Full, &Population::Pattern("11".into()), None);
        let mut view = TerminalView::new(Vec::new(), Chime::silent());
        view.frame(&grid.render(0));

        let text = output(view);
        assert!(text.contains("Seed generation"));
        assert!(text.contains("Alive: 2"));
        assert!(text.contains("Dead: 4"));
        assert_eq!(text.matches('■').count(), 2);
        assert_eq!(text.matches('·').count(), 4);
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_notices() {
        let mut view = TerminalView::new(Vec::new(), Chime::silent());
        view.stopped(StopReason::User, 7);
        view.completed(20);

        let text = output(view);
        assert!(text.contains("stopped by the user at generation 7"));
        assert!(text.contains("limit of 20 generations"));
    }
}
