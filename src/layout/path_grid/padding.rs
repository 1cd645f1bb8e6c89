// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Placeholder passes run after every sequence has been merged.
//!
//! Both passes plan their insertions against an unmodified view first and only then write, so no
//! row is mutated while it (or the row below it) is being scanned.

use smallvec::SmallVec;

use crate::model::{Cell, Grid};

type SlotPlan = SmallVec<[Cell; 4]>;

/// Carries every branch that ends before the last row down to the bottom of the grid.
///
/// A real cell at depth `d` (`1 <= d < max_depth`) with no key below it in row `d + 1` gets one
/// slot keyed `key + "0"` in every row `d' > d`. Returns the number of slots inserted.
pub(super) fn apply_terminal_slots(grid: &mut Grid) -> usize {
    let max_depth = grid.max_depth();
    if max_depth < 2 {
        return 0;
    }

    let mut plan = Vec::<(usize, Cell)>::new();
    {
        let rows = grid.rows();
        for depth in 1..max_depth {
            let below = &rows[depth + 1];
            for cell in rows[depth].cells().filter(|cell| cell.is_step()) {
                if below.prefixed(cell.key().as_str()).next().is_some() {
                    continue;
                }
                for later in (depth + 1)..=max_depth {
                    plan.push((later, Cell::terminal_slot(cell.key(), later, depth)));
                }
            }
        }
    }

    let rows = grid.rows_mut();
    let mut inserted = 0usize;
    for (depth, cell) in plan {
        if rows[depth].insert_if_vacant(cell) {
            inserted += 1;
        }
    }
    inserted
}

/// Widens each real cell to the number of columns its subtree covers in the next row.
///
/// Runs bottom-up so that a row's own slots are in place before its parent row is counted. A cell
/// with `n` keys below it gets slots keyed `key + "1"` .. `key + "(n-1)"`. The root row is never
/// widened. Returns the number of slots inserted.
pub(super) fn apply_branch_slots(grid: &mut Grid) -> usize {
    let max_depth = grid.max_depth();
    let mut inserted = 0usize;

    for depth in (1..max_depth).rev() {
        let plan = {
            let rows = grid.rows();
            let below = &rows[depth + 1];
            rows[depth]
                .cells()
                .filter(|cell| cell.is_step())
                .flat_map(|cell| {
                    let covered = below.count_prefixed(cell.key().as_str());
                    (1..covered).map(move |ordinal| Cell::branch_slot(cell.key(), depth, ordinal))
                })
                .collect::<SlotPlan>()
        };

        let row = &mut grid.rows_mut()[depth];
        for cell in plan {
            if row.insert_if_vacant(cell) {
                inserted += 1;
            } else {
                tracing::debug!(depth, "branch slot key already taken; slot skipped");
            }
        }
    }

    inserted
}
