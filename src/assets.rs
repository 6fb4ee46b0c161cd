//! Sprite images.
//!
//! Images are small text files compiled into the binary: a `WIDTHxHEIGHT`
//! header giving the size of the entity in screen pixels, followed by a mask
//! grid where `#` is ink and `.` is transparent. The mask is stretched over
//! the entity's rect when drawn.

use core::fmt;

const SHIP_SRC: &str = include_str!("../assets/ship.txt");
const ALIEN_SRC: &str = include_str!("../assets/alien.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    MissingHeader { name: String },
    BadHeader { name: String, found: String },
    EmptyMask { name: String },
    RaggedRow { name: String, row: usize, expected: usize, found: usize },
    BadCell { name: String, row: usize, col: usize, found: char },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader { name } => write!(f, "image '{name}' has no size header"),
            Self::BadHeader { name, found } => {
                write!(f, "image '{name}' has a malformed size header: {found:?}")
            }
            Self::EmptyMask { name } => write!(f, "image '{name}' has an empty mask"),
            Self::RaggedRow { name, row, expected, found } => write!(
                f,
                "image '{name}' mask row {row} is {found} cells wide, expected {expected}"
            ),
            Self::BadCell { name, row, col, found } => write!(
                f,
                "image '{name}' has invalid mask cell {found:?} at row {row}, column {col}"
            ),
        }
    }
}

impl std::error::Error for AssetError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: i32,
    pub height: i32,
    mask: Vec<Vec<bool>>,
}

impl Image {
    pub fn parse(name: &str, text: &str) -> Result<Self, AssetError> {
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines.next().ok_or_else(|| AssetError::MissingHeader {
            name: name.to_string(),
        })?;
        let (width, height) = parse_header(header).ok_or_else(|| AssetError::BadHeader {
            name: name.to_string(),
            found: header.to_string(),
        })?;

        let mut mask: Vec<Vec<bool>> = Vec::new();
        for (row, line) in lines.enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    other => {
                        return Err(AssetError::BadCell {
                            name: name.to_string(),
                            row,
                            col,
                            found: other,
                        })
                    }
                }
            }
            if let Some(first) = mask.first() {
                if first.len() != cells.len() {
                    return Err(AssetError::RaggedRow {
                        name: name.to_string(),
                        row,
                        expected: first.len(),
                        found: cells.len(),
                    });
                }
            }
            mask.push(cells);
        }

        if mask.is_empty() || mask[0].is_empty() {
            return Err(AssetError::EmptyMask { name: name.to_string() });
        }

        Ok(Self { width, height, mask })
    }

    pub fn mask_size(&self) -> (usize, usize) {
        (self.mask[0].len(), self.mask.len())
    }

    /// Whether the mask is inked at normalised coordinates `u, v` in `[0, 1)`.
    pub fn sample(&self, u: f32, v: f32) -> bool {
        let (mw, mh) = self.mask_size();
        let col = ((u * mw as f32) as usize).min(mw - 1);
        let row = ((v * mh as f32) as usize).min(mh - 1);
        self.mask[row][col]
    }
}

fn parse_header(header: &str) -> Option<(i32, i32)> {
    let (w, h) = header.split_once('x')?;
    let w: i32 = w.trim().parse().ok()?;
    let h: i32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

pub fn load_ship() -> Result<Image, AssetError> {
    Image::parse("ship", SHIP_SRC)
}

pub fn load_alien() -> Result<Image, AssetError> {
    Image::parse("alien", ALIEN_SRC)
}
