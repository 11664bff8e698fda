use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use fivemind::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = ServerOptions::parse();

    // Set the logger to write-and-flush so that it doesn't compete with the search worker.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::WithThread)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    print_header();

    // Run the main protocol loop.
    let mut server = Server::<evaluators::AlphaBetaEvaluator>::new(options)?;
    if let Err(e) = server.run()
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}

fn print_header()
{
    log::info!("⚫ starting {} server v{} ⚪", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::debug!("five in a row, no more, no less... actually, more is fine too.");
}
