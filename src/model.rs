//! struct or enum

use serde::Serialize;

use crate::error::DatastoreError;

/// one parsed command line invocation
#[allow(missing_docs)]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum Command {
    /// The user invokes datastore get mykey
    Get { key: String },
    /// The user invokes datastore set mykey myvalue, value is the raw text
    Set { key: String, value: String },
    /// The user invokes datastore has mykey
    Has { key: String },
    /// The user invokes datastore keys
    Keys,
    /// The user invokes datastore values
    Values,
    /// The user invokes datastore size
    Size,
    /// The user invokes datastore clear
    Clear,
    /// help, --help, -h or no arguments at all
    Help,
    /// anything else, name is lowercased
    Unknown { name: String },
}

impl Command {
    /// convert raw command line tokens to a `Command`
    ///
    /// The command name is case-insensitive, arguments are taken verbatim and
    /// extra trailing tokens are ignored.
    pub fn parse(tokens: &[String]) -> Result<Command, DatastoreError> {
        let name = match tokens.first() {
            Some(name) => name.to_lowercase(),
            None => return Ok(Command::Help),
        };
        let arg = |i: usize| tokens.get(i).map(|s| s.to_owned());

        let command = match name.as_str() {
            "get" => Command::Get {
                key: arg(1).ok_or(DatastoreError::MissingArgument {
                    command: "get",
                    requirement: "a key",
                    usage: "get <key>",
                })?,
            },
            "set" => match (arg(1), arg(2)) {
                (Some(key), Some(value)) => Command::Set { key, value },
                _ => {
                    return Err(DatastoreError::MissingArgument {
                        command: "set",
                        requirement: "a key and value",
                        usage: "set <key> <value>",
                    })
                }
            },
            "has" => Command::Has {
                key: arg(1).ok_or(DatastoreError::MissingArgument {
                    command: "has",
                    requirement: "a key",
                    usage: "has <key>",
                })?,
            },
            "keys" => Command::Keys,
            "values" => Command::Values,
            "size" => Command::Size,
            "clear" => Command::Clear,
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Unknown { name },
        };
        Ok(command)
    }
}
