use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use crate::registry::{ListItem, ListMessageLevel, ListOutput, ListRenderMode};

const RESET: &str = "\x1b[0m";
const FG_CYAN: &str = "\x1b[36m";
const FG_BRIGHT_BLACK: &str = "\x1b[90m";
const FG_RED: &str = "\x1b[31m";

pub fn info(message: impl AsRef<str>) {
    write_line(io::stdout(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    write_line(io::stderr(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    write_line(io::stderr(), message.as_ref());
}

fn write_line(mut target: impl Write, message: &str) {
    let _ = writeln!(target, "{}", message);
}

pub fn print_list(output: &ListOutput, mode: ListRenderMode) {
    match mode {
        ListRenderMode::Table => {
            for message in &output.messages {
                match message.level {
                    ListMessageLevel::Info => info(&message.text),
                    ListMessageLevel::Warn => warn(&message.text),
                }
            }
            print_table(output, colors_enabled());
        }
        ListRenderMode::Names => {
            for item in &output.items {
                info(&item.name);
            }
        }
        ListRenderMode::Json => print_json(output),
    }
}

fn print_table(output: &ListOutput, use_color: bool) {
    let max_name_width = output
        .items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);

    for item in &output.items {
        info(format_row(item, max_name_width, use_color));
    }
}

fn format_row(item: &ListItem, width: usize, use_color: bool) -> String {
    let padded_name = format!("{name:<width$}", name = item.name, width = width);
    match (use_color, item.missing) {
        (true, false) => format!(
            "{FG_CYAN}{padded_name}{RESET}  {FG_BRIGHT_BLACK}{path}{RESET}",
            path = item.path
        ),
        (true, true) => format!(
            "{FG_CYAN}{padded_name}{RESET}  {FG_BRIGHT_BLACK}{path}{RESET} {FG_RED}(missing){RESET}",
            path = item.path
        ),
        (false, false) => format!("{}  {}", padded_name, item.path),
        (false, true) => format!("{}  {} (missing)", padded_name, item.path),
    }
}

fn print_json(output: &ListOutput) {
    let apps: serde_json::Map<String, serde_json::Value> = output
        .items
        .iter()
        .map(|item| (item.name.clone(), serde_json::Value::from(item.path.as_str())))
        .collect();
    match serde_json::to_string_pretty(&apps) {
        Ok(text) => info(text),
        Err(err) => error(format!("Could not render apps as JSON: {err}")),
    }
}

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| io::stdout().is_terminal())
}
