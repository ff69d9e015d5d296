use env_logger::{Builder, Env, Target};
use std::io::Write;

/// Logs go to stderr so they never mix with listing output on stdout.
/// `RUST_LOG` overrides the build-dependent default.
pub fn init() {
    let default_filter = if cfg!(debug_assertions) {
        concat!(env!("CARGO_CRATE_NAME"), "=debug")
    } else {
        "off"
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    builder.target(Target::Stderr).format(|buf, record| {
        writeln!(
            buf,
            "[{:>5} {}:{}] {}",
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

#[allow(unused_imports)]
pub use log::{debug, error, info, trace, warn};
