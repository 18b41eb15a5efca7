use tracing::Level;

pub fn parse_level(level: &str) -> Option<Level> {
    level.trim().parse::<Level>().ok()
}

// Logs go to stderr so that command output on stdout stays clean.
pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
