use anyhow::Result;
use mrprep::reformat::reformat_file;
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // First positional argument only; anything after it is ignored.
    let input = match env::args().nth(1) {
        Some(p) => p,
        None => {
            println!("Usage: mrprep <input_file>");
            std::process::exit(1);
        }
    };

    let output = reformat_file(&input)?;
    println!("Formatted file saved to {}", output.display());
    Ok(())
}
