use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "appdeck",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Cli {
    /// Path to the app store file (defaults to apps.json)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register an application (`appdeck add -h` for details)
    Add(AddOptions),
    /// Forget an application
    #[command(alias = "rm")]
    Remove(RemoveOptions),
    /// Show registered applications
    List(ListOptions),
    /// Open a registered application
    Launch(LaunchOptions),
    /// Print a shell completion script
    Completions(CompletionsOptions),
    /// Launch an application directly (shorthand for `appdeck launch <NAME>`)
    #[command(external_subcommand)]
    Direct(Vec<String>),
}

#[derive(Args, Debug)]
pub struct AddOptions {
    /// Path of the executable, bundle or script to register
    #[arg(name = "PATH")]
    pub path: String,

    /// Display name (defaults to the file name without extension)
    #[arg(name = "NAME")]
    pub name: Option<String>,

    /// Replace the path of an existing entry without asking
    #[arg(short = 'F', long = "force")]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RemoveOptions {
    /// Name of the application to remove
    #[arg(name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug, Default)]
pub struct ListOptions {
    /// Print bare names, one per line (good for piping into fzf)
    #[arg(short = 'n', long = "names", conflicts_with = "json")]
    pub names: bool,

    /// Print the registry as a JSON object
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LaunchOptions {
    /// Name of the application to open
    #[arg(name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CompletionsOptions {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
