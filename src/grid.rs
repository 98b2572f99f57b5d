mod frame;

pub use frame::{Frame, ALIVE_GLYPH, DEAD_GLYPH};

use crate::Neighborhood;

/// Separator between rows of a population pattern.
pub const ROW_SEPARATOR: char = '#';
/// Population value that requests a random fill.
pub const RANDOM_SENTINEL: &str = "rnd";

/// Initial state of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Population {
    /// Every cell alive with probability 1/2.
    Random,
    /// Rows separated by [`ROW_SEPARATOR`], `'1'` is alive, anything else is dead.
    Pattern(String),
}

impl Population {
    pub fn parse(value: &str) -> Self {
        if value == RANDOM_SENTINEL {
            Self::Random
        } else {
            Self::Pattern(value.to_owned())
        }
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "{RANDOM_SENTINEL}"),
            Self::Pattern(pattern) => write!(f, "{pattern}"),
        }
    }
}

/// Bounded field of cells; positions outside of it are never read.
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    neighborhood: Neighborhood,
}

impl Grid {
    /// Field with every cell dead.
    pub fn blank(width: usize, height: usize, neighborhood: Neighborhood) -> Self {
        let size = width * height;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            neighborhood,
        }
    }

    /// Field filled from `population`.
    ///
    /// `seed` is only used by [`Population::Random`] (if `None`, then random seed is generated).
    pub fn new(
        width: usize,
        height: usize,
        neighborhood: Neighborhood,
        population: &Population,
        seed: Option<u64>,
    ) -> Self {
        let mut result = Self::blank(width, height, neighborhood);
        result.initialize(population, seed);
        result
    }

    pub fn initialize(&mut self, population: &Population, seed: Option<u64>) {
        self.cells_curr.fill(false);
        match population {
            Population::Random => self.randomize(seed),
            Population::Pattern(pattern) => self.apply_pattern(pattern),
        }
        log::debug!(
            "Initialized {}x{} grid with {} alive cells",
            self.width,
            self.height,
            self.population()
        );
    }

    fn randomize(&mut self, seed: Option<u64>) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
    }

    fn apply_pattern(&mut self, pattern: &str) {
        for (row, line) in pattern
            .split(ROW_SEPARATOR)
            .take(self.height)
            .enumerate()
        {
            // only ASCII control characters and spaces are trimmed
            let line = line.trim_matches(|c: char| c <= ' ');
            for (col, c) in line.chars().take(self.width).enumerate() {
                self.set(row, col, c == '1');
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells_curr[col + row * self.width]
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        self.cells_curr[col + row * self.width] = state;
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&x| x).count()
    }

    /// Alive cells among the in-bounds neighbors of `(row, col)`.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        Self::count_in(&self.cells_curr, self.width, self.height, self.neighborhood, row, col)
    }

    fn count_in(
        cells: &[bool],
        width: usize,
        height: usize,
        neighborhood: Neighborhood,
        row: usize,
        col: usize,
    ) -> usize {
        neighborhood
            .offsets()
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr).filter(|&r| r < height)?;
                let c = col.checked_add_signed(dc).filter(|&c| c < width)?;
                Some(cells[c + r * width])
            })
            .filter(|&alive| alive)
            .count()
    }

    /// Moves the field one generation forward.
    ///
    /// Every next state is read from the untouched current buffer, the buffers
    /// are swapped only after the whole field is computed.
    pub fn advance(&mut self) {
        let (w, h, neighborhood) = (self.width, self.height, self.neighborhood);
        for row in 0..h {
            for col in 0..w {
                let neibs = Self::count_in(&self.cells_curr, w, h, neighborhood, row, col);
                self.cells_next[col + row * w] = next_state(self.cells_curr[col + row * w], neibs);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }

    pub fn render(&self, generation: u64) -> Frame {
        let rows = self
            .cells_curr
            .chunks_exact(self.width)
            .map(|row| row.to_vec())
            .collect();
        Frame::new(generation, rows)
    }
}

/// Conway's rule: survival on 2 or 3 neighbors, birth on exactly 3.
pub fn next_state(alive: bool, neibs: usize) -> bool {
    match (alive, neibs) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}
