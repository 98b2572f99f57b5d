use crate::NiceInt;

pub const ALIVE_GLYPH: char = '■';
pub const DEAD_GLYPH: char = '·';

/// One rendered generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    generation: u64,
    rows: Vec<Vec<bool>>,
    alive: usize,
    dead: usize,
}

impl Frame {
    pub fn new(generation: u64, rows: Vec<Vec<bool>>) -> Self {
        let total = rows.iter().map(Vec::len).sum::<usize>();
        let alive = rows.iter().flatten().filter(|&&x| x).count();
        Self {
            generation,
            rows,
            alive,
            dead: total - alive,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn alive(&self) -> usize {
        self.alive
    }

    pub fn dead(&self) -> usize {
        self.dead
    }

    pub fn title(&self) -> String {
        if self.generation == 0 {
            "=== Seed generation ===".to_string()
        } else {
            format!("=== Generation {} ===", NiceInt::from(self.generation))
        }
    }

    /// Cells of the row separated by spaces.
    pub fn row_text(row: &[bool]) -> String {
        row.iter()
            .map(|&alive| (if alive { ALIVE_GLYPH } else { DEAD_GLYPH }).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn summary(&self) -> String {
        let (alive, dead) = self.summary_parts();
        format!("{alive} | {dead}")
    }

    /// Alive and dead counts, labelled.
    pub fn summary_parts(&self) -> (String, String) {
        (
            format!("Alive: {}", NiceInt::from_usize(self.alive)),
            format!("Dead: {}", NiceInt::from_usize(self.dead)),
        )
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title())?;
        for row in &self.rows {
            writeln!(f, "{}", Self::row_text(row))?;
        }
        write!(f, "{}", self.summary())
    }
}
