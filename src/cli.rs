// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `branchgrid` command line.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::format::{
    export_grid, parse_sequence_document, sequence_document_schema, to_json, FormatError,
};
use crate::layout::{build_with_options, BuildOptions, GridBuild, PathGridError};
use crate::render::{render_grid_unicode, GridRenderError, RenderOptions};
use crate::visual::{BoardImageUrl, Perspective};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("layout failed: {0}")]
    Layout(#[from] PathGridError),
    #[error("render failed: {0}")]
    Render(#[from] GridRenderError),
    #[error("failed to encode schema: {0}")]
    Schema(#[source] serde_json::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "branchgrid",
    about = "Lay out branching lines of play as an aligned column grid",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the grid as box-drawing text.
    Render(RenderArgs),
    /// Print the grid as a JSON document.
    Export(ExportArgs),
    /// Print the JSON schema of the input document.
    Schema,
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Sequence document to read; `-` reads stdin.
    pub input: PathBuf,
    /// Root position key; overrides the document's `root_position`.
    #[arg(long = "root", value_name = "POS")]
    pub root_position: Option<String>,
    /// Compute path keys on the rayon pool.
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(long, value_name = "N", default_value_t = RenderOptions::default().cell_width)]
    pub cell_width: usize,
    #[arg(long, value_name = "N", default_value_t = RenderOptions::default().col_gap)]
    pub col_gap: usize,
    /// Add a line for move annotations.
    #[arg(long)]
    pub annotations: bool,
    /// Omit the terminal tag line.
    #[arg(long)]
    pub no_tags: bool,
    /// Print bare move labels without move numbers.
    #[arg(long)]
    pub plain_labels: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(long)]
    pub pretty: bool,
    /// Attach a board image URL to every move.
    #[arg(long)]
    pub board_urls: bool,
    /// Draw board images from black's side.
    #[arg(long, requires = "board_urls")]
    pub flip: bool,
}

impl RenderArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            cell_width: self.cell_width,
            col_gap: self.col_gap,
            show_annotations: self.annotations,
            show_tags: !self.no_tags,
            numbered_moves: !self.plain_labels,
        }
    }
}

pub fn run_from_env() -> Result<(), CliError> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let output = match &cli.command {
        Command::Render(args) => {
            let input = read_input(&args.input.input)?;
            render_command(args, &input)?
        }
        Command::Export(args) => {
            let input = read_input(&args.input.input)?;
            export_command(args, &input)?
        }
        Command::Schema => schema_command()?,
    };
    println!("{output}");
    Ok(())
}

pub fn render_command(args: &RenderArgs, input: &str) -> Result<String, CliError> {
    let built = build_from_input(&args.input, input)?;
    Ok(render_grid_unicode(&built, &args.render_options())?)
}

pub fn export_command(args: &ExportArgs, input: &str) -> Result<String, CliError> {
    let mut built = build_from_input(&args.input, input)?;
    if args.board_urls {
        let perspective = if args.flip { Perspective::Black } else { Perspective::White };
        let resolver = BoardImageUrl { perspective, ..BoardImageUrl::default() };
        built.grid_mut().resolve_visuals(&resolver);
    }
    Ok(to_json(&export_grid(&built), args.pretty)?)
}

pub fn schema_command() -> Result<String, CliError> {
    serde_json::to_string_pretty(&sequence_document_schema()).map_err(CliError::Schema)
}

fn build_from_input(args: &InputArgs, input: &str) -> Result<GridBuild, CliError> {
    let document = parse_sequence_document(input)?;

    let mut options = BuildOptions { parallel: args.parallel, ..BuildOptions::default() };
    if let Some(root) = args.root_position.as_deref().or(document.root_position.as_deref()) {
        options.root_position = root.into();
    }

    let sequences = document.into_sequences();
    tracing::debug!(lines = sequences.len(), parallel = options.parallel, "input parsed");
    Ok(build_with_options(&sequences, &options)?)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let read_error = |source| CliError::Read { path: path.to_path_buf(), source };
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input).map_err(read_error)?;
        return Ok(input);
    }
    std::fs::read_to_string(path).map_err(read_error)
}
