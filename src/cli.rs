use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vault", about = "macOS Keychain secret manager", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store or update a secret.
    Set {
        /// The secret key name.
        key: String,
        /// The secret value. Prompted for without echo when omitted.
        value: Option<String>,
    },

    /// Print a secret value to stdout.
    Get {
        /// The secret key name.
        key: String,
    },

    /// Remove a secret.
    Delete {
        /// The secret key name to delete.
        key: String,
    },

    /// List all stored key names (never values).
    List,

    /// Install the coding-assistant skill to ~/.claude/skills/vault/.
    Init,
}
