//! Command dispatch and handlers

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{reference_tree, Fruit, TreeNode};
use crate::tree_traits::TreeNodeConvert;

pub const FIRST_COLOR_LABEL: &str = "First fruit on this tree has color";
pub const NO_FRUIT_MSG: &str = "Could not find any fruit on this tree";
pub const BUSIEST_LABEL: &str = "The first branch that has largest amount of fruit on this tree is";
pub const NO_BUSIEST_MSG: &str =
    "Could not find any branch that has largest amount of fruit on this tree";

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let tree = reference_tree();
    match &cli.command {
        None | Some(Commands::Report) => _report(&tree, settings),
        Some(Commands::Count { kind }) => _count(&tree, *kind),
        Some(Commands::FirstColor) => _first_color(&tree),
        Some(Commands::Busiest) => _busiest(&tree),
        Some(Commands::Tree) => _tree(&tree),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Report text: one count line per kind, then first fruit color and busiest branch.
pub fn report_lines(tree: &TreeNode, kinds: &[Fruit]) -> Vec<String> {
    let mut lines: Vec<String> = kinds
        .iter()
        .map(|kind| format!("How many {}: {}", kind.plural(), tree.count_fruits(*kind)))
        .collect();

    lines.push(match tree.first_fruit_color() {
        Some(color) => format!("{FIRST_COLOR_LABEL}: {color}"),
        None => NO_FRUIT_MSG.to_string(),
    });
    lines.push(match tree.branch_with_most_fruits() {
        Some(branch) => format!("{BUSIEST_LABEL}: {branch}"),
        None => NO_BUSIEST_MSG.to_string(),
    });
    lines
}

#[instrument(level = "debug", skip(tree))]
fn _report(tree: &TreeNode, settings: &Settings) -> CliResult<()> {
    if settings.show_tree {
        _tree(tree)?;
    }
    for line in report_lines(tree, &settings.kinds) {
        output::info(&line);
    }
    Ok(())
}

#[instrument(level = "debug", skip(tree))]
fn _count(tree: &TreeNode, kind: Fruit) -> CliResult<()> {
    let count = tree.count_fruits(kind);
    debug!("{} x {}", count, kind);
    output::result(&format!("How many {}", kind.plural()), &count);
    Ok(())
}

#[instrument(level = "debug", skip(tree))]
fn _first_color(tree: &TreeNode) -> CliResult<()> {
    match tree.first_fruit_color() {
        Some(color) => output::result(FIRST_COLOR_LABEL, color),
        None => output::not_found(NO_FRUIT_MSG),
    }
    Ok(())
}

#[instrument(level = "debug", skip(tree))]
fn _busiest(tree: &TreeNode) -> CliResult<()> {
    match tree.branch_with_most_fruits() {
        Some(branch) => {
            debug!("direct fruit count: {}", branch.direct_fruit_count());
            output::result(BUSIEST_LABEL, branch);
        }
        None => output::not_found(NO_BUSIEST_MSG),
    }
    Ok(())
}

#[instrument(level = "debug", skip(tree))]
fn _tree(tree: &TreeNode) -> CliResult<()> {
    output::header("Fruit tree");
    output::info(&tree.to_tree_string());
    output::info(&format!(
        "nodes: {}, depth: {}",
        tree.node_count(),
        tree.depth()
    ));
    Ok(())
}

#[instrument(level = "debug")]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            let path = global_config_path().ok_or(CliError::NoConfigDir)?;
            output::info(&path.display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
