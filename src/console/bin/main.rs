use clap::Parser;
use tokio::io::BufReader;
use tracing::Level;
use lms_catalog::console::Console;
use lms_catalog::core::controller::AppState;
use lms_catalog::core::domain::{Configuration, DEFAULT_LIBRARY_NAME};
use lms_catalog::core::library::LibraryError;
use lms_catalog::utils::logging::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Interactive catalog for tracking books and loans")]
struct Args {
    /// Library name shown in the menu
    #[arg(long, default_value = DEFAULT_LIBRARY_NAME)]
    name: String,

    /// One of error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let args = Args::parse();
    setup_tracing(args.log_level, args.json_logs);

    let state = AppState::new(&Configuration::new(args.name.as_str()));
    let mut console = Console::new(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    console.run().await
}
