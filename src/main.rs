//! Set production glyph names in UFO sources from the Adobe Glyph List.

use anyhow::Result;
use prodnames::core;

/// Run the application with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
