// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;

use branchgrid::format::{export_grid, parse_sequence_document};
use branchgrid::layout::{build_with_options, BuildOptions, GridBuild, PathGridError};
use branchgrid::model::{Cell, Sequence};
use branchgrid::query::{connectors, terminal_cells};
use branchgrid::render::{render_grid_unicode, RenderOptions};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("lines")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn load(name: &str) -> (Vec<Sequence>, BuildOptions) {
    let document = parse_sequence_document(&read_fixture(name))
        .unwrap_or_else(|err| panic!("expected {name} to parse, got error: {err}"));
    let mut options = BuildOptions::default();
    if let Some(root) = document.root_position.as_deref() {
        options.root_position = root.into();
    }
    (document.into_sequences(), options)
}

fn build_fixture(name: &str, parallel: bool) -> GridBuild {
    let (sequences, options) = load(name);
    build_with_options(&sequences, &BuildOptions { parallel, ..options })
        .unwrap_or_else(|err| panic!("expected {name} to lay out, got error: {err}"))
}

fn row_labels(built: &GridBuild) -> Vec<Vec<&str>> {
    built
        .grid()
        .rows()
        .iter()
        .map(|row| {
            row.cells()
                .map(|cell| if cell.is_placeholder() { "_" } else { cell.label() })
                .collect()
        })
        .collect()
}

#[test]
fn openings_lay_out_in_ordinal_key_order() {
    let built = build_fixture("openings.json", false);

    assert_eq!(built.width(), 4);
    assert_eq!(
        row_labels(&built),
        vec![
            vec![""],
            vec!["d4", "e4", "_", "_"],
            vec!["_", "c5", "e6", "e5"],
            vec!["_", "_", "_", "Nf3"],
            vec!["_", "_", "_", "Nc6"],
        ]
    );

    let links = connectors(built.grid())
        .into_iter()
        .map(|link| (link.depth, link.parent_column, link.child_column))
        .collect::<Vec<_>>();
    assert_eq!(links, vec![(0, 0, 0), (0, 0, 1), (1, 1, 1), (1, 1, 2), (1, 1, 3), (2, 3, 3), (3, 3, 3)]);

    let tags = terminal_cells(&built)
        .into_iter()
        .map(|(cell, tag)| (cell.label(), tag))
        .collect::<Vec<_>>();
    assert_eq!(
        tags,
        vec![
            ("d4", "Queen's Pawn Game"),
            ("c5", "Sicilian Defence"),
            ("e6", "French Defence"),
            ("Nc6", "Open Game"),
        ]
    );
}

#[test]
fn input_order_does_not_change_the_grid() {
    let original = export_grid(&build_fixture("openings.json", false));
    let reordered = export_grid(&build_fixture("openings_reordered.json", false));
    assert_eq!(original, reordered);
}

#[rstest]
#[case("openings.json")]
#[case("openings_reordered.json")]
fn parallel_keying_matches_serial(#[case] name: &str) {
    assert_eq!(build_fixture(name, true), build_fixture(name, false));
}

#[test]
fn every_line_reads_straight_down_its_column() {
    let built = build_fixture("openings.json", false);
    let grid = built.grid();

    for path in built.paths() {
        let Some(last) = path.last() else {
            continue;
        };
        let depth = path.len();
        let column = grid.row(depth).and_then(|row| row.column_of(last.as_str())).expect("end cell");

        for below in (depth + 1)..=grid.max_depth() {
            let row = grid.row(below).expect("row");
            let carried = row.cells().nth(column).expect("column exists");
            let owned_by_line = carried.key().as_str().starts_with(last.as_str());
            assert!(owned_by_line, "column {column} at depth {below} does not continue {last}");
        }
    }
}

#[test]
fn rendering_draws_one_box_per_move() {
    let built = build_fixture("openings.json", false);
    let options = RenderOptions { show_annotations: true, ..RenderOptions::default() };
    let text = render_grid_unicode(&built, &options).expect("render");

    let moves = built.grid().cells().filter(|cell| !cell.is_placeholder()).count();
    assert_eq!(text.matches('┌').count(), moves);
    assert!(text.contains("│2... Nc6  │"), "{text}");
    assert!(text.contains("│main line │"), "{text}");
    assert!(text.contains("│Open Game │"), "{text}");
    assert!(text.contains("│Sicilian …│"), "{text}");
}

#[test]
fn invalid_step_is_reported_with_its_location() {
    let (sequences, options) = load("invalid_step.json");
    for parallel in [false, true] {
        let err = build_with_options(&sequences, &BuildOptions { parallel, ..options.clone() })
            .unwrap_err();
        assert_eq!(err, PathGridError::InvalidStep { sequence: 1, step: 1, label: "??".to_owned() });
    }
}

#[test]
fn placeholders_carry_their_owner() {
    let built = build_fixture("openings.json", false);
    let placeholders = built.grid().cells().filter(|cell| cell.is_placeholder()).collect::<Vec<&Cell>>();

    assert!(!placeholders.is_empty());
    for cell in placeholders {
        let owner = cell.owner_key().expect("placeholder owner");
        assert!(owner.is_prefix_of(cell.key().as_str()));
        assert_eq!(cell.label(), "");
        assert_eq!(cell.visual(), None);
    }
}
