use std::iter::FusedIterator;

use crate::geometry::{ScreenPoint, ScreenSize};

/// Axis aligned rectangle of pixels, `min` inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScreenBlock {
    pub min: ScreenPoint,
    pub max: ScreenPoint,
}

impl ScreenBlock {
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        ScreenBlock { min, max }
    }

    /// Block covering a whole image of the given size.
    pub fn from_size(size: ScreenSize) -> Self {
        ScreenBlock {
            min: ScreenPoint::origin(),
            max: ScreenPoint::from(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub fn width(&self) -> u32 {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn height(&self) -> u32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Number of pixels; zero for empty or inverted blocks.
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Create an iterator over coordinates (x, y) pairs inside the block,
    /// in C order (x changes first, then y)
    pub fn internal_points(&self) -> InternalPoints {
        if self.is_empty() {
            InternalPoints::empty()
        } else {
            InternalPoints {
                min_x: self.min.x,
                max: self.max,
                cursor: self.min,
            }
        }
    }

    /// One pixel high sub blocks, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = ScreenBlock> {
        let (min_x, max_x) = (self.min.x, self.max.x);
        let ys = if self.is_empty() {
            0..0
        } else {
            self.min.y..self.max.y
        };
        ys.map(move |y| ScreenBlock::new(ScreenPoint::new(min_x, y), ScreenPoint::new(max_x, y + 1)))
    }
}

#[derive(Copy, Clone, Debug)]
pub struct InternalPoints {
    min_x: u32,
    max: ScreenPoint,

    cursor: ScreenPoint,
}

impl InternalPoints {
    // Construct an iterator over internal points that returns no points
    fn empty() -> Self {
        InternalPoints {
            min_x: 0,
            max: ScreenPoint::origin(),
            cursor: ScreenPoint::origin(),
        }
    }
}

impl Iterator for InternalPoints {
    type Item = ScreenPoint;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.y >= self.max.y {
            return None;
        }

        let ret = self.cursor;

        debug_assert!(self.cursor.x < self.max.x);
        self.cursor.x += 1;
        if self.cursor.x >= self.max.x {
            self.cursor.x = self.min_x;
            self.cursor.y += 1;
        }

        Some(ret)
    }
}

impl ExactSizeIterator for InternalPoints {
    fn len(&self) -> usize {
        if self.cursor.y >= self.max.y {
            0
        } else {
            let row_width = (self.max.x - self.min_x) as usize;
            let whole_rows = (self.max.y - self.cursor.y - 1) as usize;
            let current_row = (self.max.x - self.cursor.x) as usize;
            whole_rows * row_width + current_row
        }
    }
}

impl FusedIterator for InternalPoints {}
