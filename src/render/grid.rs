// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use thiserror::Error;

use crate::layout::GridBuild;
use crate::model::{Cell, PathKey};

use super::text::truncate_with_ellipsis;
use super::{Canvas, CanvasError, RenderOptions};

const ROW_GAP: usize = 2;
const ROOT_LABEL: &str = "start";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridRenderError {
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
    #[error("cell {key} at depth {depth} has no parent in the row above")]
    DetachedCell { depth: usize, key: PathKey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    inner_width: usize,
    col_pitch: usize,
    box_height: usize,
    row_pitch: usize,
}

impl Frame {
    fn new(options: &RenderOptions) -> Self {
        let inner_width = options.cell_width.max(1);
        let box_height = 3 + usize::from(options.show_annotations) + usize::from(options.show_tags);
        Self {
            inner_width,
            col_pitch: inner_width + 2 + options.col_gap,
            box_height,
            row_pitch: box_height + ROW_GAP,
        }
    }

    fn box_x0(&self, column: usize) -> usize {
        column * self.col_pitch
    }

    fn center_x(&self, column: usize) -> usize {
        self.box_x0(column) + (self.inner_width + 2) / 2
    }

    fn box_y0(&self, depth: usize) -> usize {
        depth * self.row_pitch
    }

    fn box_y1(&self, depth: usize) -> usize {
        self.box_y0(depth) + self.box_height - 1
    }
}

/// Draws the grid as one box per real cell, with placeholder columns left blank.
///
/// Every row occupies the same band of lines and every column the same band of characters, so a
/// line of play reads straight down. Parent and child are joined through the gap between their
/// rows.
pub fn render_grid_unicode(
    built: &GridBuild,
    options: &RenderOptions,
) -> Result<String, GridRenderError> {
    let grid = built.grid();
    let _span = tracing::debug_span!(
        "render_grid_unicode",
        rows = grid.rows().len(),
        width = built.width()
    )
    .entered();

    let frame = Frame::new(options);
    let columns = built.width().max(1);
    let rows = grid.rows().len().max(1);

    let area_overflow = || CanvasError::AreaOverflow { width: columns, height: rows };
    let canvas_width = columns
        .checked_mul(frame.col_pitch)
        .ok_or_else(area_overflow)?
        .saturating_sub(options.col_gap);
    let canvas_height = rows
        .checked_mul(frame.row_pitch)
        .ok_or_else(area_overflow)?
        .saturating_sub(ROW_GAP);
    let mut canvas = Canvas::new(canvas_width, canvas_height)?;

    for row in grid.rows() {
        for (column, cell) in row.cells().enumerate() {
            if cell.is_placeholder() {
                continue;
            }
            draw_cell(&mut canvas, &frame, column, cell, built, options)?;
        }
    }

    for (depth, pair) in grid.rows().windows(2).enumerate() {
        let (upper, lower) = (&pair[0], &pair[1]);
        let parent_columns = upper
            .keys()
            .enumerate()
            .map(|(column, key)| (key.as_str(), column))
            .collect::<HashMap<_, _>>();

        for (child_column, child) in lower.cells().enumerate() {
            let Some(parent_key) = child.parent_key() else {
                continue;
            };
            let parent_column = parent_columns.get(parent_key.as_str()).copied().ok_or_else(|| {
                GridRenderError::DetachedCell { depth: depth + 1, key: child.key().clone() }
            })?;
            draw_connector(&mut canvas, &frame, depth, parent_column, child_column)?;
        }
    }

    Ok(canvas.to_string_trimmed())
}

fn draw_cell(
    canvas: &mut Canvas,
    frame: &Frame,
    column: usize,
    cell: &Cell,
    built: &GridBuild,
    options: &RenderOptions,
) -> Result<(), GridRenderError> {
    let x0 = frame.box_x0(column);
    let y0 = frame.box_y0(cell.depth());
    canvas.draw_box(x0, y0, x0 + frame.inner_width + 1, frame.box_y1(cell.depth()))?;

    let mut y = y0 + 1;
    let label = cell_label(cell, options.numbered_moves);
    canvas.write_str(x0 + 1, y, &truncate_with_ellipsis(&label, frame.inner_width))?;

    if options.show_annotations {
        y += 1;
        if let Some(annotation) = cell.annotation() {
            canvas.write_str(x0 + 1, y, &truncate_with_ellipsis(annotation, frame.inner_width))?;
        }
    }

    if options.show_tags {
        y += 1;
        if let Some(tag) = built.terminal_tags().get(cell.key().as_str()) {
            canvas.write_str(x0 + 1, y, &truncate_with_ellipsis(tag, frame.inner_width))?;
        }
    }

    Ok(())
}

fn draw_connector(
    canvas: &mut Canvas,
    frame: &Frame,
    parent_depth: usize,
    parent_column: usize,
    child_column: usize,
) -> Result<(), CanvasError> {
    let parent_x = frame.center_x(parent_column);
    let child_x = frame.center_x(child_column);
    let parent_bottom = frame.box_y1(parent_depth);
    let gap_y = parent_bottom + 1;
    let child_top = frame.box_y0(parent_depth + 1);

    canvas.draw_vline(parent_x, parent_bottom, gap_y)?;
    canvas.draw_hline(parent_x, child_x, gap_y)?;
    canvas.draw_vline(child_x, gap_y, child_top)?;
    Ok(())
}

/// `1. e4` for white moves and `1... e5` for black ones; depth 1 is the first move.
fn cell_label(cell: &Cell, numbered: bool) -> String {
    let depth = cell.depth();
    if depth == 0 {
        return ROOT_LABEL.to_owned();
    }
    if !numbered {
        return cell.label().to_owned();
    }

    let mut buffer = itoa::Buffer::new();
    let number = buffer.format(depth.div_ceil(2));
    if depth % 2 == 1 {
        format!("{number}. {}", cell.label())
    } else {
        format!("{number}... {}", cell.label())
    }
}
