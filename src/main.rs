use access_patterns::{demo, set_trace_callback, PatternError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PatternError> {
    // Logs go to stderr; stdout carries the demonstration itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    set_trace_callback(|event| println!("{event}"));

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock())
}
