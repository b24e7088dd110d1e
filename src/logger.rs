//! logger setup

use std::io::Write;

use env_logger::{Builder, Env};

/// init env_logger on stderr, level `warn` unless `RUST_LOG` says otherwise
pub fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    // a second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_err() {
        log::trace!("logger already initialized");
    }
}
