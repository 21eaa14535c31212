use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use simple_tail::{Config, LineTracker, TailError};

fn main() {
    init_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => {}
        Err(err @ TailError::Usage) => {
            eprintln!("{}", err);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("tail: {}", err);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), TailError> {
    let config = Config::parse(args)?;
    let reader = config.source.open()?;

    // A zero count is a valid request for nothing; the source still had to
    // be openable.
    if config.line_count == 0 {
        return Ok(());
    }

    let ring = LineTracker::new(config.line_count).ingest(reader);

    // Best effort: nothing useful to report if stdout goes away mid-print.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let _ = ring.write_to(&mut out);
    let _ = out.flush();
    Ok(())
}

// WARN by default so truncation warnings always reach stderr.
// Set RUST_LOG=debug for verbose output.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
