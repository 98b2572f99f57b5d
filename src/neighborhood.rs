/// Which surrounding cells count as neighbors.
///
/// Chosen once from the configured selector and used unchanged for every cell
/// and every generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Neighborhood {
    /// Up, down, left and right.
    Orthogonal,
    /// Orthogonal plus the top-left and bottom-right diagonals.
    Partial,
    /// All eight surrounding cells.
    #[default]
    Full,
    /// The four diagonals only.
    Diagonal,
    /// The three cells above and the three cells below.
    DiagonalHorizontal,
}

const ORTHOGONAL: &[(isize, isize)] = &[(-1, 0), (1, 0), (0, -1), (0, 1)];
const PARTIAL: &[(isize, isize)] = &[(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (1, 1)];
const FULL: &[(isize, isize)] = &[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const DIAGONAL: &[(isize, isize)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
const DIAGONAL_HORIZONTAL: &[(isize, isize)] =
    &[(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 0), (1, 1)];

impl Neighborhood {
    /// Maps selector `1..=5` to a neighborhood.
    ///
    /// Any other selector falls back to [`Neighborhood::Full`] with a warning.
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            1 => Self::Orthogonal,
            2 => Self::Partial,
            3 => Self::Full,
            4 => Self::Diagonal,
            5 => Self::DiagonalHorizontal,
            other => {
                log::warn!("Neighborhood {other} is not defined, using full (n=3)");
                Self::Full
            }
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            Self::Orthogonal => 1,
            Self::Partial => 2,
            Self::Full => 3,
            Self::Diagonal => 4,
            Self::DiagonalHorizontal => 5,
        }
    }

    /// Relative `(Δrow, Δcol)` positions of the neighbors.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Orthogonal => ORTHOGONAL,
            Self::Partial => PARTIAL,
            Self::Full => FULL,
            Self::Diagonal => DIAGONAL,
            Self::DiagonalHorizontal => DIAGONAL_HORIZONTAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Orthogonal => "orthogonal",
            Self::Partial => "partial",
            Self::Full => "full",
            Self::Diagonal => "diagonal",
            Self::DiagonalHorizontal => "diagonal + horizontal",
        }
    }
}
