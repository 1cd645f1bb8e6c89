// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for laid-out grids.
//!
//! Output is deterministic Unicode box drawing: the same grid and options always give the same
//! string, with trailing whitespace trimmed.

mod canvas;
pub mod grid;
mod text;

pub use canvas::{
    Canvas, CanvasError, BOX_BOTTOM_LEFT, BOX_BOTTOM_RIGHT, BOX_CROSS, BOX_HORIZONTAL,
    BOX_TEE_DOWN, BOX_TEE_LEFT, BOX_TEE_RIGHT, BOX_TEE_UP, BOX_TOP_LEFT, BOX_TOP_RIGHT,
    BOX_VERTICAL,
};
pub use grid::{render_grid_unicode, GridRenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Characters available inside each box.
    pub cell_width: usize,
    /// Blank columns between neighbouring boxes.
    pub col_gap: usize,
    pub show_annotations: bool,
    pub show_tags: bool,
    /// Prefix labels with `1.` / `1...` style move numbers.
    pub numbered_moves: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 10,
            col_gap: 2,
            show_annotations: false,
            show_tags: true,
            numbered_moves: true,
        }
    }
}
