#![doc = include_str!("../README.md")]

pub mod cli;
pub mod completions;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod printer;
pub mod registry;
pub mod store;

pub use error::{Error, Result};
pub use launcher::{Launcher, Platform};
pub use registry::{suggest_name, AddOutcome, AppRegistry, Entry};
pub use store::{JsonStore, DEFAULT_STORE_FILE};

use clap::Parser;
use cli::{AddOptions, Cli, Commands, ListOptions};
use logger::*;
use registry::ListRenderMode;
use std::io::{self, BufRead, IsTerminal, Write};

/// Asked before an existing entry is overwritten: `(name, current path)`.
pub type ConfirmOverwrite<'a> = &'a mut dyn FnMut(&str, &str) -> bool;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

pub fn run_with_cli(cli: Cli) -> Result<()> {
    logger::init();
    info!("start");
    debug!("cli args: {:?}", cli);

    let store_path = cli
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());
    let (mut registry, corrupted) = AppRegistry::load(JsonStore::new(store_path));
    if let Some(err) = corrupted {
        printer::warn(format!("Warning: {}", err));
        printer::warn("Starting with an empty app list.");
    }

    let launcher = Launcher::detect();
    dispatcher(cli.cmd, &mut registry, &launcher, &mut prompt_overwrite).map_err(|err| {
        error!("command failed: {}", err);
        err
    })?;
    info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn dispatcher(
    cmd: Option<Commands>,
    registry: &mut AppRegistry,
    launcher: &Launcher,
    confirm: ConfirmOverwrite<'_>,
) -> Result<()> {
    debug!("dispatching command: {:?}", cmd);
    match cmd {
        Some(Commands::Add(opts)) => add_app(registry, opts, confirm),
        Some(Commands::Remove(opts)) => remove_app(registry, &opts.name),
        Some(Commands::List(opts)) => {
            list_apps(registry, &opts);
            Ok(())
        }
        Some(Commands::Launch(opts)) => launch_app(registry, launcher, &opts.name),
        Some(Commands::Completions(opts)) => {
            completions::print(opts.shell);
            Ok(())
        }
        Some(Commands::Direct(raw)) => {
            let (name, rest) = raw.split_first().ok_or_else(|| {
                warn!("Direct command invoked without an app name");
                Error::MissingAppName
            })?;
            if !rest.is_empty() {
                printer::warn(format!("Ignoring extra arguments: {}", rest.join(" ")));
            }
            launch_app(registry, launcher, name)
        }
        None => {
            list_apps(registry, &ListOptions::default());
            Ok(())
        }
    }
}

fn add_app(
    registry: &mut AppRegistry,
    opts: AddOptions,
    confirm: ConfirmOverwrite<'_>,
) -> Result<()> {
    let name = match opts.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => suggest_name(&opts.path).unwrap_or_default(),
    };
    let path = opts.path.trim();
    info!("Adding '{}' -> '{}' (force={})", name, path, opts.force);

    let mut outcome = registry.add(&name, path, opts.force)?;
    if outcome == AddOutcome::Kept {
        let current = registry.get(&name).unwrap_or_default().to_string();
        if confirm(&name, &current) {
            outcome = registry.add(&name, path, true)?;
        }
    }

    match outcome {
        AddOutcome::Inserted => printer::info(format!("Added '{}' -> {}", name, path)),
        AddOutcome::Replaced => printer::info(format!("Updated '{}' -> {}", name, path)),
        AddOutcome::Kept => printer::warn(format!("Kept the existing path for '{}'.", name)),
    }
    Ok(())
}

fn remove_app(registry: &mut AppRegistry, name: &str) -> Result<()> {
    info!("Removing '{}'", name);
    if registry.remove(name)? {
        printer::info(format!("Removed '{}'.", name.trim()));
    } else {
        printer::warn(format!("App '{}' is not registered.", name.trim()));
    }
    Ok(())
}

fn list_apps(registry: &AppRegistry, opts: &ListOptions) {
    let mode = if opts.json {
        ListRenderMode::Json
    } else if opts.names {
        ListRenderMode::Names
    } else {
        ListRenderMode::Table
    };
    info!("Listing {} app(s) as {:?}", registry.len(), mode);
    printer::print_list(&registry.collect_list_output(), mode);
}

fn launch_app(registry: &AppRegistry, launcher: &Launcher, name: &str) -> Result<()> {
    let path = registry
        .get(name)
        .ok_or_else(|| Error::UnknownApp(name.trim().to_string()))?;
    info!("Launching '{}' from '{}'", name, path);
    launcher.launch(path)?;
    printer::info(format!("Launched '{}'.", name.trim()));
    Ok(())
}

fn prompt_overwrite(name: &str, current: &str) -> bool {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        printer::warn(format!(
            "App '{}' already exists ({}). Pass --force to replace it.",
            name, current
        ));
        return false;
    }

    let mut stderr = io::stderr();
    let _ = write!(
        stderr,
        "App '{}' already exists ({}). Replace its path? [y/N] ",
        name, current
    );
    let _ = stderr.flush();

    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
