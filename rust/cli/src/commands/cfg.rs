//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of each value
//! (`default`, `file`, or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "source": "default",
//!     "value": 3
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the file, environment, or values are invalid.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "unicode": {
            "value": config.unicode,
            "source": sources.unicode,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
