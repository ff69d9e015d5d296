use std::path::Path;

use super::app_registry::AppRegistry;
use crate::logger::trace;

#[derive(Debug, Default, Clone)]
pub struct ListOutput {
    pub items: Vec<ListItem>,
    pub messages: Vec<ListMessage>,
}

impl ListOutput {
    fn push_message(&mut self, level: ListMessageLevel, text: impl Into<String>) {
        self.messages.push(ListMessage {
            level,
            text: text.into(),
        });
    }

    fn push_item(&mut self, item: ListItem) {
        self.items.push(item);
    }
}

#[derive(Debug, Clone)]
pub struct ListItem {
    pub name: String,
    pub path: String,
    /// The path no longer exists. Display hint only; launch does not check.
    pub missing: bool,
}

#[derive(Debug, Clone)]
pub struct ListMessage {
    pub level: ListMessageLevel,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessageLevel {
    Info,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRenderMode {
    Table,
    Names,
    Json,
}

impl AppRegistry {
    pub fn collect_list_output(&self) -> ListOutput {
        let mut output = ListOutput::default();

        if self.is_empty() {
            output.push_message(
                ListMessageLevel::Info,
                "No apps registered. Add one with `appdeck add <PATH> [NAME]`.",
            );
            return output;
        }

        let mut missing_count = 0;
        for entry in self.list() {
            let missing = !Path::new(&entry.path).exists();
            if missing {
                missing_count += 1;
                trace!("'{}' points at missing path '{}'", entry.name, entry.path);
            }
            output.push_item(ListItem {
                name: entry.name,
                path: entry.path,
                missing,
            });
        }

        if missing_count > 0 {
            output.push_message(
                ListMessageLevel::Warn,
                format!(
                    "{} app(s) point at paths that no longer exist.",
                    missing_count
                ),
            );
        }

        output
    }
}
