// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use thiserror::Error;

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';
pub const BOX_TEE_RIGHT: char = '├';
pub const BOX_TEE_LEFT: char = '┤';
pub const BOX_TEE_DOWN: char = '┬';
pub const BOX_TEE_UP: char = '┴';
pub const BOX_CROSS: char = '┼';

/// Which sides of a cell a box-drawing stroke leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Strokes(u8);

impl Strokes {
    const LEFT: u8 = 1 << 0;
    const RIGHT: u8 = 1 << 1;
    const UP: u8 = 1 << 2;
    const DOWN: u8 = 1 << 3;
    const HORIZONTAL: Self = Self(Self::LEFT | Self::RIGHT);
    const VERTICAL: Self = Self(Self::UP | Self::DOWN);

    fn has(self, side: u8) -> bool {
        self.0 & side != 0
    }

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn from_char(ch: char) -> Option<Self> {
        let bits = match ch {
            BOX_HORIZONTAL => Self::LEFT | Self::RIGHT,
            BOX_VERTICAL => Self::UP | Self::DOWN,
            BOX_TOP_LEFT => Self::RIGHT | Self::DOWN,
            BOX_TOP_RIGHT => Self::LEFT | Self::DOWN,
            BOX_BOTTOM_LEFT => Self::RIGHT | Self::UP,
            BOX_BOTTOM_RIGHT => Self::LEFT | Self::UP,
            BOX_TEE_RIGHT => Self::UP | Self::DOWN | Self::RIGHT,
            BOX_TEE_LEFT => Self::UP | Self::DOWN | Self::LEFT,
            BOX_TEE_DOWN => Self::LEFT | Self::RIGHT | Self::DOWN,
            BOX_TEE_UP => Self::LEFT | Self::RIGHT | Self::UP,
            BOX_CROSS => Self::LEFT | Self::RIGHT | Self::UP | Self::DOWN,
            _ => return None,
        };
        Some(Self(bits))
    }

    fn to_char(self) -> char {
        let horizontal = self.has(Self::LEFT) || self.has(Self::RIGHT);
        let vertical = self.has(Self::UP) || self.has(Self::DOWN);
        match (self.has(Self::LEFT), self.has(Self::RIGHT), self.has(Self::UP), self.has(Self::DOWN)) {
            (false, true, false, true) => BOX_TOP_LEFT,
            (true, false, false, true) => BOX_TOP_RIGHT,
            (false, true, true, false) => BOX_BOTTOM_LEFT,
            (true, false, true, false) => BOX_BOTTOM_RIGHT,
            (false, true, true, true) => BOX_TEE_RIGHT,
            (true, false, true, true) => BOX_TEE_LEFT,
            (true, true, false, true) => BOX_TEE_DOWN,
            (true, true, true, false) => BOX_TEE_UP,
            (true, true, true, true) => BOX_CROSS,
            _ if vertical && !horizontal => BOX_VERTICAL,
            _ if horizontal => BOX_HORIZONTAL,
            _ => ' ',
        }
    }
}

/// Fixed-size character surface.
///
/// Plain characters overwrite. Box-drawing characters accumulate strokes, and a cell is drawn
/// with only the strokes that meet a matching stroke in the neighbouring cell, so crossing and
/// touching lines become junctions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    chars: Vec<char>,
    strokes: Vec<Strokes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, chars: vec![' '; len], strokes: vec![Strokes::default(); len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.char_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match Strokes::from_char(ch) {
            Some(strokes) => self.strokes[idx].0 |= strokes.0,
            None => {
                self.chars[idx] = ch;
                self.strokes[idx] = Strokes::default();
            }
        }
        Ok(())
    }

    /// Writes `text` rightwards from `(x, y)`, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        self.check(x.min(self.width.saturating_sub(1)), y)?;
        for (offset, ch) in text.chars().enumerate() {
            let Some(cx) = x.checked_add(offset).filter(|cx| *cx < self.width) else {
                break;
            };
            self.set(cx, y, ch)?;
        }
        Ok(())
    }

    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.check(lo, y)?;
        self.check(hi, y)?;
        for x in lo..=hi {
            self.stroke(x, y, Strokes::HORIZONTAL);
        }
        Ok(())
    }

    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.check(x, lo)?;
        self.check(x, hi)?;
        for y in lo..=hi {
            self.stroke(x, y, Strokes::VERTICAL);
        }
        Ok(())
    }

    /// Draws a single-line box with opposite corners `(x0, y0)` and `(x1, y1)`.
    ///
    /// Bounds are checked up front; nothing is drawn on error.
    pub fn draw_box(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<(), CanvasError> {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.check(left, top)?;
        self.check(right, bottom)?;

        for x in left..=right {
            self.stroke(x, top, Strokes::HORIZONTAL);
            self.stroke(x, bottom, Strokes::HORIZONTAL);
        }
        for y in top..=bottom {
            self.stroke(left, y, Strokes::VERTICAL);
            self.stroke(right, y, Strokes::VERTICAL);
        }
        Ok(())
    }

    /// Rendered text with trailing spaces and trailing blank lines removed.
    pub fn to_string_trimmed(&self) -> String {
        let mut lines = (0..self.height)
            .map(|y| {
                let line = (0..self.width)
                    .map(|x| self.char_at(x, y, (y * self.width) + x))
                    .collect::<String>();
                line.trim_end_matches(' ').to_owned()
            })
            .collect::<Vec<_>>();

        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn stroke(&mut self, x: usize, y: usize, strokes: Strokes) {
        let idx = (y * self.width) + x;
        self.strokes[idx].0 |= strokes.0;
    }

    fn check(&self, x: usize, y: usize) -> Result<(), CanvasError> {
        if x < self.width && y < self.height {
            return Ok(());
        }
        Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height })
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        self.check(x, y)?;
        Ok((y * self.width) + x)
    }

    fn char_at(&self, x: usize, y: usize, idx: usize) -> char {
        let strokes = self.strokes[idx];
        if strokes.is_empty() {
            return self.chars[idx];
        }

        let neighbour = |nx: Option<usize>, ny: Option<usize>, side: u8| {
            match (nx, ny) {
                (Some(nx), Some(ny)) if nx < self.width && ny < self.height => {
                    self.strokes[(ny * self.width) + nx].has(side)
                }
                _ => false,
            }
        };

        let mut joined = 0u8;
        if strokes.has(Strokes::LEFT) && neighbour(x.checked_sub(1), Some(y), Strokes::RIGHT) {
            joined |= Strokes::LEFT;
        }
        if strokes.has(Strokes::RIGHT) && neighbour(x.checked_add(1), Some(y), Strokes::LEFT) {
            joined |= Strokes::RIGHT;
        }
        if strokes.has(Strokes::UP) && neighbour(Some(x), y.checked_sub(1), Strokes::DOWN) {
            joined |= Strokes::UP;
        }
        if strokes.has(Strokes::DOWN) && neighbour(Some(x), y.checked_add(1), Strokes::UP) {
            joined |= Strokes::DOWN;
        }

        if joined == 0 {
            strokes.to_char()
        } else {
            Strokes(joined).to_char()
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.char_at(x, y, (y * self.width) + x))?;
            }
        }
        Ok(())
    }
}
