//! Failures of a digest run. All of them end up in the single
//! `Failed to parse lint output: ...` line printed by the binary.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("no linter command configured")]
    EmptyCommand,
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}
