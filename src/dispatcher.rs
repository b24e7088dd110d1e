//! maps one command line invocation to a store operation and prints the result

use std::io::Write;

use crate::error::DatastoreError;
use crate::model::Command;
use crate::store::Store;
use crate::value::{coerce, render_compact, render_pretty};
use crate::Result;

/// name the binary is documented under
pub const BIN_NAME: &str = "datastore";

/// static usage text
pub const HELP: &str = "
DataStore CLI - in-memory key-value store

Usage: datastore <command> [args...]

Commands:
  get <key>           Get a value by key
  set <key> <value>   Set a value for a key (JSON values are parsed)
  has <key>           Check if a key exists
  keys                List all keys
  values              List all values
  size                Show the number of stored items
  clear               Clear all data
  help                Show this help message

Examples:
  datastore get greeting
  datastore set name \"John Doe\"
  datastore set features '[\"get\",\"set\"]'
  datastore has greeting
  datastore keys
  datastore values
";

/// how a dispatch ended, decides the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// the command ran, including `get` of an absent key
    Success,
    /// missing arguments or unknown command, the store was not touched
    UsageError,
}

impl Outcome {
    /// 0 on success, 1 on usage errors
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::UsageError => 1,
        }
    }
}

/// runs commands against a borrowed store, writing text to `out`
pub struct Dispatcher<'s, W: Write> {
    store: &'s mut Store,
    out: W,
}

impl<'s, W: Write> Dispatcher<'s, W> {
    /// create with the store to operate on and the output sink
    pub fn new(store: &'s mut Store, out: W) -> Self {
        Dispatcher { store, out }
    }

    /// give back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// parse raw tokens and run the resulting command
    ///
    /// Usage errors are printed, not returned; the `Err` arm only carries
    /// failures of the output sink.
    pub fn dispatch(&mut self, tokens: &[String]) -> Result<Outcome> {
        match Command::parse(tokens) {
            Ok(command) => self.run(command),
            Err(e) => {
                log::debug!("rejected {:?}, {}", tokens, e);
                match &e {
                    DatastoreError::MissingArgument { usage, .. } => {
                        writeln!(self.out, "{}", e)?;
                        writeln!(self.out, "Usage: {} {}", BIN_NAME, usage)?;
                    }
                }
                Ok(Outcome::UsageError)
            }
        }
    }

    /// run an already parsed command
    pub fn run(&mut self, command: Command) -> Result<Outcome> {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("dispatch {}", serde_json::to_string(&command)?);
        }

        match command {
            Command::Get { key } => match self.store.get(&key) {
                Some(value) => writeln!(self.out, "{}", render_pretty(value))?,
                None => writeln!(self.out, "Key \"{}\" not found", key)?,
            },
            Command::Set { key, value } => {
                let value = coerce(&value);
                writeln!(self.out, "Set \"{}\" = {}", key, render_compact(&value))?;
                self.store.set(key, value);
            }
            Command::Has { key } => writeln!(self.out, "{}", self.store.has(&key))?,
            Command::Keys => {
                if self.store.is_empty() {
                    writeln!(self.out, "No keys stored")?;
                } else {
                    writeln!(self.out, "Keys: {}", self.store.keys().join(", "))?;
                }
            }
            Command::Values => {
                if self.store.is_empty() {
                    writeln!(self.out, "No values stored")?;
                } else {
                    writeln!(self.out, "Values:")?;
                    for (index, value) in self.store.values().iter().enumerate() {
                        writeln!(self.out, "  [{}] {}", index, render_compact(value))?;
                    }
                }
            }
            Command::Size => writeln!(self.out, "Store contains {} item(s)", self.store.size())?,
            Command::Clear => {
                self.store.clear();
                writeln!(self.out, "Store cleared")?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Unknown { name } => {
                writeln!(self.out, "Unknown command: {}", name)?;
                writeln!(self.out, "{}", HELP)?;
                return Ok(Outcome::UsageError);
            }
        }
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::seed_demo;
    use serde_json::json;

    fn run(store: &mut Store, args: &[&str]) -> (Outcome, String) {
        let tokens: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut dispatcher = Dispatcher::new(store, Vec::new());
        let outcome = dispatcher.dispatch(&tokens).unwrap();
        let out = String::from_utf8(dispatcher.into_inner()).unwrap();
        (outcome, out)
    }

    #[test]
    fn get_scalar_and_composite() {
        let mut store = Store::new();
        seed_demo(&mut store);

        let (outcome, out) = run(&mut store, &["get", "greeting"]);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "Hello, World!\n");

        let (_, out) = run(&mut store, &["get", "features"]);
        assert!(out.starts_with("[\n  \"get\",\n  \"set\","));
    }

    #[test]
    fn get_missing_is_not_an_error() {
        let mut store = Store::new();
        let (outcome, out) = run(&mut store, &["get", "missing"]);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "Key \"missing\" not found\n");
    }

    #[test]
    fn set_coerces_and_echoes() {
        let mut store = Store::new();
        let (_, out) = run(&mut store, &["set", "age", "30"]);
        assert_eq!(out, "Set \"age\" = 30\n");
        let (_, out) = run(&mut store, &["set", "list", "[1, 2]"]);
        assert_eq!(out, "Set \"list\" = [1,2]\n");
        let (_, out) = run(&mut store, &["set", "name", "John Doe"]);
        assert_eq!(out, "Set \"name\" = John Doe\n");

        assert_eq!(store.get("age"), Some(&json!(30)));
        assert_eq!(store.get("list"), Some(&json!([1, 2])));
        assert_eq!(store.get("name"), Some(&json!("John Doe")));
    }

    #[test]
    fn set_then_get_on_one_store() {
        let mut store = Store::new();
        let (outcome, out) = run(&mut store, &["set", "features", r#"["get","set"]"#]);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "Set \"features\" = [\"get\",\"set\"]\n");

        let (outcome, out) = run(&mut store, &["get", "features"]);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "[\n  \"get\",\n  \"set\"\n]\n");

        run(&mut store, &["set", "k", "-1.5e3"]);
        assert_eq!(run(&mut store, &["get", "k"]).1, "-1500\n");
    }

    #[test]
    fn listing_commands() {
        let mut store = Store::new();
        assert_eq!(run(&mut store, &["keys"]).1, "No keys stored\n");
        assert_eq!(run(&mut store, &["values"]).1, "No values stored\n");

        store.set("a", "x").set("b", json!({"k": [true]}));
        assert_eq!(run(&mut store, &["keys"]).1, "Keys: a, b\n");
        assert_eq!(
            run(&mut store, &["values"]).1,
            "Values:\n  [0] x\n  [1] {\"k\":[true]}\n"
        );
        assert_eq!(run(&mut store, &["size"]).1, "Store contains 2 item(s)\n");
        assert_eq!(run(&mut store, &["has", "a"]).1, "true\n");
        assert_eq!(run(&mut store, &["has", "A"]).1, "false\n");
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = Store::new();
        seed_demo(&mut store);
        let (outcome, out) = run(&mut store, &["CLEAR"]);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "Store cleared\n");
        assert_eq!(store.size(), 0);
    }

    #[test]
    fn usage_errors_leave_store_untouched() {
        let mut store = Store::new();
        seed_demo(&mut store);
        let before = store.clone();

        let (outcome, out) = run(&mut store, &["set", "key"]);
        assert_eq!(outcome, Outcome::UsageError);
        assert_eq!(
            out,
            "Error: set command requires a key and value\nUsage: datastore set <key> <value>\n"
        );

        let (outcome, out) = run(&mut store, &["frobnicate"]);
        assert_eq!(outcome, Outcome::UsageError);
        assert!(out.starts_with("Unknown command: frobnicate\n"));
        assert!(out.contains("Commands:"));

        assert_eq!(store, before);
    }

    #[test]
    fn help_without_arguments() {
        let mut store = Store::new();
        let (outcome, out) = run(&mut store, &[]);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, format!("{}\n", HELP));
        assert!(store.is_empty());
    }
}
