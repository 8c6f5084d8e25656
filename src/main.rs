use anyhow::Context;
use mw_commons::configuration::get_configuration;
use mw_commons::startup::format_numbers;
use mw_commons::telemetry::{get_subscriber, init_subscriber};

/// Formats every phone number passed on the command line, one per line, followed by the carrier
/// that owns it. Invalid numbers are logged and make the process exit with a non-zero status.
fn main() -> anyhow::Result<()> {
    // Log records go to stderr, stdout is reserved for the formatted numbers.
    let subscriber = get_subscriber("mw-phone".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration")?;

    let formatted = format_numbers(&configuration.formatting, std::env::args().skip(1));
    for line in &formatted.lines {
        println!("{}", line);
    }

    if !formatted.is_success() {
        anyhow::bail!(
            "{} of the given phone numbers could not be parsed",
            formatted.failures
        );
    }
    Ok(())
}
