// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms.
//!
//! `path_grid` turns independent move sequences into a depth-indexed column grid.

pub mod path_grid;

pub use path_grid::{
    build, build_with_options, BuildOptions, GridBuild, PathGridError, START_POSITION,
};
