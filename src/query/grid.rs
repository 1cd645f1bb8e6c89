// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use crate::layout::GridBuild;
use crate::model::{Cell, Grid, PathKey, Row};

/// A parent/child link between two adjacent rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub depth: usize,
    pub parent_column: usize,
    pub child_column: usize,
    pub parent_key: PathKey,
    pub child_key: PathKey,
}

pub fn column_of(row: &Row, key: &str) -> Option<usize> {
    row.column_of(key)
}

pub fn row_widths(grid: &Grid) -> Vec<usize> {
    grid.rows().iter().map(Row::len).collect()
}

/// Real cells one row below `key` whose explicit parent is `key`.
pub fn children<'a>(grid: &'a Grid, depth: usize, key: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
    grid.row(depth + 1)
        .into_iter()
        .flat_map(move |below| below.prefixed(key))
        .filter(move |cell| cell.parent_key().is_some_and(|parent| parent.as_str() == key))
}

/// Root..=cell chain following explicit parent keys. Empty if the cell is unknown or is a
/// placeholder.
pub fn lineage<'a>(grid: &'a Grid, depth: usize, key: &str) -> Vec<&'a Cell> {
    let Some(mut cell) = grid.cell(depth, key) else {
        return Vec::new();
    };
    if cell.is_placeholder() {
        return Vec::new();
    }

    let mut chain = Vec::<&Cell>::with_capacity(depth + 1);
    chain.push(cell);
    let mut depth = depth;
    while let Some(parent_key) = cell.parent_key() {
        let Some(parent) = depth.checked_sub(1).and_then(|up| grid.cell(up, parent_key.as_str()))
        else {
            break;
        };
        chain.push(parent);
        cell = parent;
        depth -= 1;
    }

    chain.reverse();
    chain
}

/// Every parent -> child edge, row by row, in column order of the child.
///
/// Only real children produce connectors; placeholders never do.
pub fn connectors(grid: &Grid) -> Vec<Connector> {
    let mut out = Vec::<Connector>::new();

    for (depth, pair) in grid.rows().windows(2).enumerate() {
        let (upper, lower) = (&pair[0], &pair[1]);
        let parent_columns = upper
            .keys()
            .enumerate()
            .map(|(col, key)| (key.as_str(), col))
            .collect::<HashMap<_, _>>();

        for (child_column, child) in lower.cells().enumerate() {
            let Some(parent_key) = child.parent_key() else {
                continue;
            };
            let Some(&parent_column) = parent_columns.get(parent_key.as_str()) else {
                continue;
            };
            out.push(Connector {
                depth,
                parent_column,
                child_column,
                parent_key: parent_key.clone(),
                child_key: child.key().clone(),
            });
        }
    }

    out
}

/// Cells carrying a terminal tag, in depth then column order.
pub fn terminal_cells(built: &GridBuild) -> Vec<(&Cell, &str)> {
    let tags = built.terminal_tags();
    if tags.is_empty() {
        return Vec::new();
    }

    built
        .grid()
        .cells()
        .filter_map(|cell| tags.get(cell.key().as_str()).map(|tag| (cell, tag)))
        .filter(|(cell, _)| !cell.is_placeholder())
        .collect()
}
