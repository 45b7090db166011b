use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

mod env_file;
mod render;
mod text;

/// Command-line arguments for the env-js-generator tool.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Generates a browser-side env.js config script from a .env file."
)]
struct Args {
    /// Path to the source .env file.
    #[arg(long, default_value = ".env")]
    input: PathBuf,

    /// Path of the generated script.
    #[arg(long, default_value = "env.js")]
    output: PathBuf,
}

/// Main entry point for the env-js-generator tool.
///
/// Reads the source file, extracts the recognized settings, and overwrites
/// the destination with the rendered script. A missing source file or a
/// missing OPENAI_API_KEY entry is reported and skipped, not an error.
fn main() -> Result<()> {
    let args = Args::parse();
    let start_time = Instant::now();

    let line = "-".repeat(72);
    let dline = "=".repeat(72);

    println!(
        "\n{}\n{}\nTool for generating a browser-side env.js config script from a .env file.\n{}\n",
        format!(
            "{} {}",
            text::highlight("Env Config Generator"),
            env!("CARGO_PKG_VERSION")
        ),
        line,
        dline
    );

    println!("{} Configuration:", text::bold("Generation"));
    println!("  {:<20} {}", "Source file:", args.input.display());
    println!("  {:<20} {}", "Generated file:", args.output.display());
    println!("{}\n", dline);

    let contents = match fs::read_to_string(&args.input) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!("{} No {} file found.", text::warning("!"), args.input.display());
            return Ok(());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read source file: {:?}", args.input));
        }
    };

    let settings = env_file::scan(&contents);

    if settings.api_key.is_empty() {
        println!(
            "{} No OPENAI_API_KEY found in {}.",
            text::warning("!"),
            args.input.display()
        );
        return Ok(());
    }

    let script = render::env_script(&settings.api_key, &settings.model);
    fs::write(&args.output, &script)
        .with_context(|| format!("Failed to write generated file: {:?}", args.output))?;

    let elapsed_time = start_time.elapsed();
    println!(
        "{} Generated {} (Model: {}) in {:.2} seconds.",
        text::check_icon(),
        args.output.display(),
        settings.model,
        elapsed_time.as_secs_f64()
    );
    println!("{}", line);
    println!("{}", text::success("Generation completed."));
    println!("");

    Ok(())
}
