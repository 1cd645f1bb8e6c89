// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::Bound;

use smol_str::SmolStr;

use super::path_key::PathKey;
use super::sequence::Step;

/// Opaque reference to the picture of a position, filled in by a `VisualResolver`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(String);

impl VisualHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisualHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a cell exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellOrigin {
    /// The starting position (depth 0).
    Root,
    /// A real move; `parent` is the key of the cell one row above.
    Step { parent: PathKey },
    /// A column reserved next to `owner` (same row) for its `ordinal`-th extra child.
    BranchSlot { owner: PathKey, ordinal: usize },
    /// A column carrying the branch that ended at `owner` (depth `ended_at`) down the grid.
    TerminalSlot { owner: PathKey, ended_at: usize },
}

/// One `(PathKey, depth)` node of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    key: PathKey,
    depth: usize,
    origin: CellOrigin,
    label: SmolStr,
    position: SmolStr,
    annotation: Option<String>,
    visual: Option<VisualHandle>,
}

impl Cell {
    pub(crate) fn root(key: PathKey, position: SmolStr) -> Self {
        Self {
            key,
            depth: 0,
            origin: CellOrigin::Root,
            label: SmolStr::default(),
            position,
            annotation: None,
            visual: None,
        }
    }

    pub(crate) fn step(key: PathKey, depth: usize, parent: PathKey, step: &Step) -> Self {
        Self {
            key,
            depth,
            origin: CellOrigin::Step { parent },
            label: step.label_smol().clone(),
            position: step.position_smol().clone(),
            annotation: step.annotation().map(str::to_owned),
            visual: None,
        }
    }

    pub(crate) fn branch_slot(owner: &PathKey, depth: usize, ordinal: usize) -> Self {
        Self::placeholder(
            owner.slot(ordinal),
            depth,
            CellOrigin::BranchSlot { owner: owner.clone(), ordinal },
        )
    }

    pub(crate) fn terminal_slot(owner: &PathKey, depth: usize, ended_at: usize) -> Self {
        Self::placeholder(
            owner.slot(0),
            depth,
            CellOrigin::TerminalSlot { owner: owner.clone(), ended_at },
        )
    }

    fn placeholder(key: PathKey, depth: usize, origin: CellOrigin) -> Self {
        Self {
            key,
            depth,
            origin,
            label: SmolStr::default(),
            position: SmolStr::default(),
            annotation: None,
            visual: None,
        }
    }

    pub fn key(&self) -> &PathKey {
        &self.key
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn origin(&self) -> &CellOrigin {
        &self.origin
    }

    /// Empty for the root and for placeholders.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Empty for placeholders.
    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Always `None` for placeholders; `None` for real cells until visuals are resolved.
    pub fn visual(&self) -> Option<&VisualHandle> {
        self.visual.as_ref()
    }

    /// Explicit parent key of a real move. `None` for the root and for placeholders.
    pub fn parent_key(&self) -> Option<&PathKey> {
        match &self.origin {
            CellOrigin::Step { parent } => Some(parent),
            _ => None,
        }
    }

    /// The real cell a placeholder reserves space for.
    pub fn owner_key(&self) -> Option<&PathKey> {
        match &self.origin {
            CellOrigin::BranchSlot { owner, .. } | CellOrigin::TerminalSlot { owner, .. } => {
                Some(owner)
            }
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, CellOrigin::BranchSlot { .. } | CellOrigin::TerminalSlot { .. })
    }

    pub fn is_step(&self) -> bool {
        matches!(self.origin, CellOrigin::Step { .. })
    }

    pub(crate) fn set_visual(&mut self, visual: Option<VisualHandle>) {
        if self.is_placeholder() {
            return;
        }
        self.visual = visual;
    }
}

/// All cells at one depth, ordered by ascending `PathKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    depth: usize,
    cells: BTreeMap<PathKey, Cell>,
}

impl Row {
    pub(crate) fn new(depth: usize) -> Self {
        Self { depth, cells: BTreeMap::new() }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of columns (real and placeholder).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    /// Cells in left-to-right column order.
    pub fn cells(&self) -> btree_map::Values<'_, PathKey, Cell> {
        self.cells.values()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, PathKey, Cell> {
        self.cells.keys()
    }

    pub fn real_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values().filter(|cell| !cell.is_placeholder())
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values().filter(|cell| cell.is_placeholder())
    }

    /// Cells whose key starts with `prefix`.
    ///
    /// Keys sharing a prefix are contiguous under ordinal ordering, so this is a range scan that
    /// stops at the first key outside the prefix.
    pub fn prefixed<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
        self.cells
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.as_str().starts_with(prefix))
            .map(|(_, cell)| cell)
    }

    pub fn count_prefixed(&self, prefix: &str) -> usize {
        self.prefixed(prefix).count()
    }

    /// Zero-based column of `key`, if present.
    pub fn column_of(&self, key: &str) -> Option<usize> {
        if !self.cells.contains_key(key) {
            return None;
        }
        Some(self.cells.range::<str, _>((Bound::Unbounded, Bound::Excluded(key))).count())
    }

    /// Inserts `cell` unless its key is already taken. Returns whether it was inserted.
    pub(crate) fn insert_if_vacant(&mut self, cell: Cell) -> bool {
        match self.cells.entry(cell.key.clone()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(cell);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub(crate) fn cells_mut(&mut self) -> btree_map::ValuesMut<'_, PathKey, Cell> {
        self.cells.values_mut()
    }
}

/// Depth-indexed rows; `rows()[0]` holds the root and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub(crate) fn with_root(root: Cell) -> Self {
        let mut row = Row::new(0);
        row.insert_if_vacant(root);
        Self { rows: vec![row] }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, depth: usize) -> Option<&Row> {
        self.rows.get(depth)
    }

    /// Length of the longest input sequence.
    pub fn max_depth(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn root(&self) -> Option<&Cell> {
        self.rows.first().and_then(|row| row.cells().next())
    }

    pub fn cell(&self, depth: usize, key: &str) -> Option<&Cell> {
        self.rows.get(depth).and_then(|row| row.get(key))
    }

    /// Every cell, row by row, left to right.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flat_map(Row::cells)
    }

    pub(crate) fn ensure_depth(&mut self, depth: usize) -> &mut Row {
        while self.rows.len() <= depth {
            let next = self.rows.len();
            self.rows.push(Row::new(next));
        }
        &mut self.rows[depth]
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }
}

/// `PathKey` of a sequence's final cell -> the tag that sequence carried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalTags {
    tags: BTreeMap<PathKey, String>,
}

impl TerminalTags {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathKey, &str)> + '_ {
        self.tags.iter().map(|(key, tag)| (key, tag.as_str()))
    }

    /// Records `tag` for `key` unless one is already recorded; returns the kept tag on conflict.
    pub(crate) fn record(&mut self, key: PathKey, tag: &str) -> Option<&str> {
        match self.tags.entry(key) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(tag.to_owned());
                None
            }
            btree_map::Entry::Occupied(entry) => Some(entry.into_mut().as_str()),
        }
    }
}
