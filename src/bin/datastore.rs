#[macro_use]
extern crate clap;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::exit;

use anyhow::Context;
use clap::{Arg, Command};

use datastore::bootstrap::seed_demo;
use datastore::{Dispatcher, Outcome, Result, Store};

fn main() -> Result<()> {
    datastore::logger::init_logger();
    // help is printed by the dispatcher, so `--help` and `-h` must reach it as plain tokens
    let m = Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .disable_help_flag(true)
        .arg(
            Arg::new("ARGS")
                .value_parser(value_parser!(OsString))
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
        .get_matches();

    let tokens: Vec<String> = m
        .get_many::<OsString>("ARGS")
        .map(|values| {
            values
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    log::debug!("tokens={:?}", tokens);

    let mut store = Store::new();
    seed_demo(&mut store);

    let stdout = io::stdout();
    let mut dispatcher = Dispatcher::new(&mut store, stdout.lock());
    let outcome = dispatcher.dispatch(&tokens)?;
    dispatcher
        .into_inner()
        .flush()
        .context("Failed to flush stdout")?;

    if outcome != Outcome::Success {
        log::debug!("exit with {:?}", outcome);
        exit(outcome.exit_code());
    }
    Ok(())
}
