use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

pub fn print(shell: Shell) {
    let mut stdout = io::stdout();
    write(shell, &mut stdout);
    let _ = stdout.flush();
}

pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command().allow_external_subcommands(false);
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
