//! self defined error type

use thiserror::Error;

#[allow(missing_docs)]
#[derive(Error, Debug, PartialEq)]
pub enum DatastoreError {
    #[error("Error: {command} command requires {requirement}")]
    MissingArgument {
        command: &'static str,
        requirement: &'static str,
        usage: &'static str,
    },
}
