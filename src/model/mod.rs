// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Input lines (`Sequence` of `Step`s) and the grid they are laid out into (`Grid` of `Row`s of
//! `Cell`s keyed by `PathKey`).

#[cfg(test)]
pub(crate) mod fixtures;
pub mod grid;
pub mod path_key;
pub mod sequence;

pub use grid::{Cell, CellOrigin, Grid, Row, TerminalTags, VisualHandle};
pub use path_key::PathKey;
pub use sequence::{Sequence, Step};
