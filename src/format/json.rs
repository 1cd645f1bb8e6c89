// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::GridBuild;
use crate::model::{Cell, CellOrigin, Sequence, Step};

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid sequence document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize grid document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Lines of play to lay out, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SequenceDocument {
    /// Position key of the starting board. Defaults to the standard start position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_position: Option<String>,
    pub lines: Vec<SequenceLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SequenceLine {
    /// Name attached to the last move of the line, e.g. an opening name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_tag: Option<String>,
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StepRecord {
    /// Move text, e.g. `Nf3`.
    pub label: String,
    /// Canonical key of the board after the move.
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl SequenceDocument {
    pub fn into_sequences(self) -> Vec<Sequence> {
        self.lines.into_iter().map(SequenceLine::into_sequence).collect()
    }
}

impl SequenceLine {
    pub fn into_sequence(self) -> Sequence {
        let steps = self
            .steps
            .into_iter()
            .map(|record| {
                let step = Step::new(record.label, record.position);
                match record.annotation {
                    Some(annotation) => step.with_annotation(annotation),
                    None => step,
                }
            })
            .collect();

        let sequence = Sequence::new(steps);
        match self.final_tag {
            Some(tag) => sequence.with_final_tag(tag),
            None => sequence,
        }
    }
}

pub fn parse_sequence_document(input: &str) -> Result<SequenceDocument, FormatError> {
    serde_json::from_str(input).map_err(FormatError::Parse)
}

pub fn sequence_document_schema() -> schemars::Schema {
    schemars::schema_for!(SequenceDocument)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Root,
    Step,
    BranchSlot,
    TerminalSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CellRecord {
    pub key: String,
    pub kind: CellKind,
    pub label: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Key of the cell one row above, for moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Key of the cell a placeholder reserves space for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RowRecord {
    pub depth: usize,
    pub cells: Vec<CellRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GridDocument {
    pub width: usize,
    pub max_depth: usize,
    pub rows: Vec<RowRecord>,
    pub terminal_tags: BTreeMap<String, String>,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        let kind = match cell.origin() {
            CellOrigin::Root => CellKind::Root,
            CellOrigin::Step { .. } => CellKind::Step,
            CellOrigin::BranchSlot { .. } => CellKind::BranchSlot,
            CellOrigin::TerminalSlot { .. } => CellKind::TerminalSlot,
        };
        Self {
            key: cell.key().to_string(),
            kind,
            label: cell.label().to_owned(),
            position: cell.position().to_owned(),
            annotation: cell.annotation().map(str::to_owned),
            parent: cell.parent_key().map(ToString::to_string),
            owner: cell.owner_key().map(ToString::to_string),
            visual: cell.visual().map(ToString::to_string),
        }
    }
}

pub fn export_grid(built: &GridBuild) -> GridDocument {
    let grid = built.grid();
    GridDocument {
        width: built.width(),
        max_depth: grid.max_depth(),
        rows: grid
            .rows()
            .iter()
            .map(|row| RowRecord {
                depth: row.depth(),
                cells: row.cells().map(CellRecord::from).collect(),
            })
            .collect(),
        terminal_tags: built
            .terminal_tags()
            .iter()
            .map(|(key, tag)| (key.to_string(), tag.to_owned()))
            .collect(),
    }
}

pub fn to_json(document: &GridDocument, pretty: bool) -> Result<String, FormatError> {
    let out = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    out.map_err(FormatError::Serialize)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        export_grid, parse_sequence_document, sequence_document_schema, to_json, CellKind,
        FormatError,
    };
    use crate::layout::{build_with_options, BuildOptions};
    use crate::model::fixtures::{self, ROOT};

    #[test]
    fn parses_lines_and_normalizes_empty_annotations() {
        let doc = parse_sequence_document(
            r#"{
                "root_position": "root+",
                "lines": [
                    { "final_tag": "Open Game", "steps": [
                        { "label": "e4", "position": "P_e4", "annotation": "" },
                        { "label": "e5", "position": "Pe_e5", "annotation": "symmetric" }
                    ] },
                    { "steps": [] }
                ]
            }"#,
        )
        .expect("parse");

        assert_eq!(doc.root_position.as_deref(), Some(ROOT));
        let sequences = doc.into_sequences();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].final_tag(), Some("Open Game"));
        assert_eq!(sequences[0].steps()[0].annotation(), None);
        assert_eq!(sequences[0].steps()[1].annotation(), Some("symmetric"));
        assert!(sequences[1].is_empty());
        assert_eq!(sequences[1].final_tag(), None);
    }

    #[test]
    fn rejects_unknown_fields_and_missing_positions() {
        let err = parse_sequence_document(r#"{ "lines": [], "colour": "white" }"#).unwrap_err();
        assert!(matches!(err, FormatError::Parse(_)));
        assert!(err.to_string().contains("colour"), "{err}");

        let err =
            parse_sequence_document(r#"{ "lines": [ { "steps": [ { "label": "e4" } ] } ] }"#)
                .unwrap_err();
        assert!(err.to_string().contains("position"), "{err}");
    }

    #[test]
    fn schema_describes_the_input_document() {
        let schema = serde_json::to_value(sequence_document_schema()).expect("schema json");
        let properties = &schema["properties"];
        assert!(properties.get("lines").is_some());
        assert!(properties.get("root_position").is_some());
        assert_eq!(schema["required"], json!(["lines"]));
    }

    #[test]
    fn export_lists_every_cell_with_its_origin() {
        let options = BuildOptions { root_position: ROOT.into(), parallel: false };
        let built = build_with_options(&[fixtures::open_game(), fixtures::sicilian()], &options)
            .expect("build");
        let doc = export_grid(&built);

        assert_eq!(doc.width, 2);
        assert_eq!(doc.max_depth, 2);
        let kinds = doc
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|cell| cell.kind).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                vec![CellKind::Root],
                vec![CellKind::Step, CellKind::BranchSlot],
                vec![CellKind::Step, CellKind::Step],
            ]
        );

        let value = serde_json::from_str::<serde_json::Value>(&to_json(&doc, false).expect("json"))
            .expect("valid json");
        assert_eq!(
            value["rows"][1]["cells"],
            json!([
                { "key": "root+P_e4", "kind": "step", "label": "e4", "position": "P_e4", "parent": "root+" },
                { "key": "root+P_e41", "kind": "branch_slot", "label": "", "position": "", "owner": "root+P_e4" }
            ])
        );
        assert_eq!(
            value["terminal_tags"],
            json!({ "root+P_e4Pc_c5": "Sicilian", "root+P_e4Pe_e5": "Open Game" })
        );
    }
}
