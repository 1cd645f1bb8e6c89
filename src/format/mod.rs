// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input and export formats.
//!
//! Lines of play come in as a JSON sequence document; laid-out grids go out as a JSON grid
//! document.

pub mod json;

pub use json::{
    export_grid, parse_sequence_document, sequence_document_schema, to_json, CellKind,
    CellRecord, FormatError, GridDocument, RowRecord, SequenceDocument, SequenceLine, StepRecord,
};
