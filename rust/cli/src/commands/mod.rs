//! Command handler modules for the handrank CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//! - Errors propagated through [`crate::CliError`]

pub mod bench;
pub mod cfg;
pub mod deal;
pub mod rank;
pub mod sim;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
