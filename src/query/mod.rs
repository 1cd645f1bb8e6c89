// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a built grid (connectors, lineage, columns).

pub mod grid;

pub use grid::{children, column_of, connectors, lineage, row_widths, terminal_cells, Connector};
