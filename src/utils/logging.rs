use tracing::Level;

// Logs go to stderr so they never interleave with the menu on stdout.
pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
