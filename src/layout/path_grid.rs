// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rayon::prelude::*;
use smol_str::SmolStr;
use thiserror::Error;

use crate::model::{Cell, Grid, PathKey, Row, Sequence, TerminalTags};

mod padding;

/// Board field of the standard chess starting position.
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Position key of the root cell; also the first segment of every `PathKey`.
    pub root_position: SmolStr,
    /// Validate and key sequences on the rayon pool before the single-writer merge.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { root_position: SmolStr::new_static(START_POSITION), parallel: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathGridError {
    #[error("sequence {sequence} step {step} ({label:?}) has an empty position key")]
    InvalidStep { sequence: usize, step: usize, label: String },
    #[error("root position must not be empty")]
    EmptyRootPosition,
}

/// Result of laying out a set of sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuild {
    grid: Grid,
    terminal_tags: TerminalTags,
    width: usize,
    paths: Vec<Vec<PathKey>>,
}

impl GridBuild {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn terminal_tags(&self) -> &TerminalTags {
        &self.terminal_tags
    }

    /// Widest row, placeholders included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Keys traversed by each input sequence, in input order (depth 1 first).
    pub fn paths(&self) -> &[Vec<PathKey>] {
        &self.paths
    }

    pub fn into_parts(self) -> (Grid, TerminalTags, usize) {
        (self.grid, self.terminal_tags, self.width)
    }
}

/// Lays out `sequences` with default options.
pub fn build(sequences: &[Sequence]) -> Result<GridBuild, PathGridError> {
    build_with_options(sequences, &BuildOptions::default())
}

/// Lays out `sequences` into a depth-indexed grid of merged, ordered, padded columns.
///
/// Phases:
/// - walk: every sequence is keyed and merged into the grid; the first writer of a key wins
/// - terminal padding: a branch with no continuation keeps a slot in every deeper row
/// - branch padding: bottom-up, a cell whose subtree covers `n` columns in the next row gets
///   `n - 1` slots beside it, so parent and child columns line up
///
/// Any invalid step aborts the whole build; no partial grid is returned.
pub fn build_with_options(
    sequences: &[Sequence],
    options: &BuildOptions,
) -> Result<GridBuild, PathGridError> {
    let _span = tracing::debug_span!(
        "path_grid_build",
        sequences = sequences.len(),
        parallel = options.parallel
    )
    .entered();

    if options.root_position.is_empty() {
        return Err(PathGridError::EmptyRootPosition);
    }

    let root_key = PathKey::root(&options.root_position);
    let paths = key_sequences(&root_key, sequences, options.parallel)?;

    let mut grid = Grid::with_root(Cell::root(root_key.clone(), options.root_position.clone()));
    let mut terminal_tags = TerminalTags::default();
    for (sequence, keys) in sequences.iter().zip(&paths) {
        merge_sequence(&mut grid, &mut terminal_tags, &root_key, sequence, keys);
    }

    let terminal_slots = padding::apply_terminal_slots(&mut grid);
    let branch_slots = padding::apply_branch_slots(&mut grid);

    let width = grid.rows().iter().map(Row::len).max().unwrap_or(0);
    tracing::debug!(
        max_depth = grid.max_depth(),
        width,
        terminal_slots,
        branch_slots,
        tags = terminal_tags.len(),
        "grid built"
    );

    Ok(GridBuild { grid, terminal_tags, width, paths })
}

fn key_sequences(
    root_key: &PathKey,
    sequences: &[Sequence],
    parallel: bool,
) -> Result<Vec<Vec<PathKey>>, PathGridError> {
    if !parallel {
        return sequences
            .iter()
            .enumerate()
            .map(|(index, sequence)| key_sequence(root_key, index, sequence))
            .collect();
    }

    // Collect every outcome first so the reported error is the first one in input order.
    let keyed = sequences
        .par_iter()
        .enumerate()
        .map(|(index, sequence)| key_sequence(root_key, index, sequence))
        .collect::<Vec<_>>();
    keyed.into_iter().collect()
}

fn key_sequence(
    root_key: &PathKey,
    index: usize,
    sequence: &Sequence,
) -> Result<Vec<PathKey>, PathGridError> {
    let mut keys = Vec::<PathKey>::with_capacity(sequence.len());
    let mut current = root_key.clone();
    for (step_index, step) in sequence.steps().iter().enumerate() {
        if step.position().is_empty() {
            return Err(PathGridError::InvalidStep {
                sequence: index,
                step: step_index,
                label: step.label().to_owned(),
            });
        }
        current = current.child(step.position());
        keys.push(current.clone());
    }
    Ok(keys)
}

fn merge_sequence(
    grid: &mut Grid,
    terminal_tags: &mut TerminalTags,
    root_key: &PathKey,
    sequence: &Sequence,
    keys: &[PathKey],
) {
    let mut parent = root_key;
    for (offset, (step, key)) in sequence.steps().iter().zip(keys).enumerate() {
        let depth = offset + 1;
        let row = grid.ensure_depth(depth);

        if let Some(existing) = row.get(key.as_str()) {
            if existing.label() != step.label() || existing.annotation() != step.annotation() {
                tracing::debug!(
                    depth,
                    key = %key,
                    kept_label = existing.label(),
                    ignored_label = step.label(),
                    "conflicting step for existing path; first write wins"
                );
            }
        } else {
            row.insert_if_vacant(Cell::step(key.clone(), depth, parent.clone(), step));
        }

        parent = key;
    }

    let (Some(tag), Some(last)) = (sequence.final_tag(), keys.last()) else {
        return;
    };
    if let Some(kept) = terminal_tags.record(last.clone(), tag) {
        if kept != tag {
            tracing::debug!(
                key = %last,
                kept_tag = kept,
                ignored_tag = tag,
                "conflicting terminal tag; first write wins"
            );
        }
    }
}
