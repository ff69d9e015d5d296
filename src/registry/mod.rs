mod app_registry;
mod display;
mod entry;

pub use app_registry::{AddOutcome, AppRegistry};
pub use display::{ListItem, ListMessage, ListMessageLevel, ListOutput, ListRenderMode};
pub use entry::{suggest_name, Entry};
