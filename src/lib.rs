// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! branchgrid: lay out branching lines of play as a column grid.
//!
//! Lines that share a prefix of moves share cells. Every branch gets its own column, and a line
//! that ends early keeps its column down to the last row, so a renderer can draw each row at the
//! same width and read a line straight down.
//!
//! ```
//! use branchgrid::layout::build;
//! use branchgrid::model::{Sequence, Step};
//!
//! let lines = vec![
//!     Sequence::new(vec![Step::new("e4", "P_e4"), Step::new("e5", "Pe_e5")]),
//!     Sequence::new(vec![Step::new("e4", "P_e4"), Step::new("c5", "Pc_c5")]),
//! ];
//! let built = build(&lines).unwrap();
//! assert_eq!(built.width(), 2);
//! ```

pub mod cli;
pub mod format;
pub mod layout;
pub mod model;
pub mod query;
pub mod render;
pub mod visual;
