//! Command dispatch: file loading, engine invocation, rendering.

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{NodePath, Selection, Tree};
use crate::engine::TreeGrid;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Show {
            tree,
            paths,
            filter,
            collapse,
        } => show(tree, paths.as_deref(), filter.as_deref(), collapse),
        Commands::Paths { selection } => selection_paths(selection),
        Commands::Select {
            tree,
            paths,
            parent,
            name,
        } => select(tree, paths.as_deref(), parent.as_deref(), name),
        Commands::SelectAll {
            tree,
            paths,
            column,
        } => select_all(tree, paths.as_deref(), *column),
        Commands::Tree { tree } => show_tree(tree),
        Commands::Config => show_config(),
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
    }
}

#[instrument]
fn show(
    tree_file: &Path,
    paths: Option<&str>,
    filter: Option<&str>,
    collapse: &[String],
) -> CliResult<()> {
    let settings = Settings::load()?;
    let tree = load_tree(tree_file)?;
    let paths = parse_paths(paths)?;

    let mut engine = TreeGrid::with_paths(tree, &paths);
    if let Some(pattern) = filter {
        engine.set_filter(pattern)?;
    }
    for raw in collapse {
        let path: NodePath = parse_json(raw, "collapse path")?;
        engine.click_collapse(path);
    }

    render_grid(&engine, &settings);
    output::detail(&format!(
        "depth {}, {} row(s), {} selected path(s)",
        engine.depth(),
        engine.rows().len(),
        engine.paths().len()
    ));
    Ok(())
}

#[instrument]
fn selection_paths(selection: &str) -> CliResult<()> {
    let selection: Selection = parse_json(selection, "selection")?;
    print_paths(&selection.to_paths())
}

#[instrument]
fn select(
    tree_file: &Path,
    paths: Option<&str>,
    parent: Option<&str>,
    name: &str,
) -> CliResult<()> {
    let tree = load_tree(tree_file)?;
    let paths = parse_paths(paths)?;
    let parent = match parent {
        Some(raw) => parse_json(raw, "parent path")?,
        None => NodePath::root(),
    };

    let mut engine = TreeGrid::with_paths(tree, &paths);
    engine.click_item(&parent, name);
    print_paths(&engine.paths())
}

#[instrument]
fn select_all(tree_file: &Path, paths: Option<&str>, column: usize) -> CliResult<()> {
    let tree = load_tree(tree_file)?;
    let paths = parse_paths(paths)?;

    let mut engine = TreeGrid::with_paths(tree, &paths);
    engine.click_select_all(column);
    print_paths(&engine.paths())
}

#[instrument]
fn show_tree(tree_file: &Path) -> CliResult<()> {
    let tree = load_tree(tree_file)?;
    output::info(&output::tree_display(&tree));
    Ok(())
}

fn show_config() -> CliResult<()> {
    let settings = Settings::load()?;
    let text = toml::to_string(&settings).map_err(|e| CliError::Config {
        message: e.to_string(),
    })?;
    output::info(&text);
    Ok(())
}

fn completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn load_tree(path: &Path) -> CliResult<Tree> {
    debug!("loading tree from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text, "tree")
}

fn parse_paths(json: Option<&str>) -> CliResult<Vec<NodePath>> {
    match json {
        None => Ok(Vec::new()),
        Some(text) => parse_json(text, "paths"),
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(text: &str, context: &'static str) -> CliResult<T> {
    serde_json::from_str(text).map_err(|source| CliError::Json { context, source })
}

fn print_paths(paths: &[NodePath]) -> CliResult<()> {
    let json = serde_json::to_string(paths).map_err(|source| CliError::Json {
        context: "paths",
        source,
    })?;
    output::info(&json);
    Ok(())
}

fn render_grid(engine: &TreeGrid, settings: &Settings) {
    let columns = engine.columns();
    let row_count = engine.rows().len();
    if row_count == 0 {
        output::detail("(no rows)");
        return;
    }

    // cell texts first, column widths from the uncolored text
    let display = &settings.display;
    let tree = engine.tree();
    let mut texts: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    for cells in &columns {
        let mut col = Vec::with_capacity(row_count);
        for (r, cell) in cells.iter().enumerate() {
            let text = match cell {
                None => display.placeholder.clone(),
                Some(path) => {
                    let label = if display.labels {
                        tree.label(path).to_string()
                    } else {
                        path.last().unwrap_or("").to_string()
                    };
                    let repeated = r > 0 && cells[r - 1].as_ref() == Some(path);
                    marker(engine, path, repeated, display.markers) + &label
                }
            };
            col.push(text);
        }
        texts.push(col);
    }
    let widths: Vec<usize> = texts
        .iter()
        .map(|col| col.iter().map(|t| t.chars().count()).max().unwrap_or(0))
        .collect();

    output::header("grid");
    for r in 0..row_count {
        let mut line = String::new();
        for (c, col) in texts.iter().enumerate() {
            let padded = format!("{:width$}", col[r], width = widths[c]);
            let cell = &columns[c][r];
            let rendered = match cell {
                None => output::placeholder_cell(&padded),
                Some(path) if engine.is_collapsed(path) => output::collapsed_cell(&padded),
                Some(path) if engine.is_activated(path) => output::activated_cell(&padded),
                Some(_) => padded,
            };
            line.push_str("  ");
            line.push_str(&rendered);
        }
        output::info(&line);
    }
}

fn marker(engine: &TreeGrid, path: &NodePath, repeated: bool, markers: bool) -> String {
    if !markers {
        return String::new();
    }
    let glyph = if repeated {
        ' '
    } else if engine.is_collapsed(path) {
        '+'
    } else if engine.is_activated(path) {
        '*'
    } else {
        ' '
    };
    format!("{} ", glyph)
}
