//! sqlsnake — the dump rewriter CLI
//!
//! # Usage
//!
//! ```bash
//! # Rewrite dump.sql into output.sql
//! sqlsnake
//!
//! # Explicit paths
//! sqlsnake schema.sql schema_snake.sql
//!
//! # No per-identifier notices
//! sqlsnake --quiet
//! ```

use clap::Parser;
use colored::*;
use sqlsnake::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlsnake")]
#[command(version = "0.1.0")]
#[command(about = "🐍 Rewrite double-quoted camelCase identifiers to snake_case", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlsnake
    sqlsnake schema.sql schema_snake.sql
    sqlsnake dump.sql output.sql --quiet")]
struct Cli {
    /// The SQL dump to read
    #[arg(default_value = "dump.sql")]
    input: PathBuf,

    /// Where to write the rewritten dump (created or overwritten)
    #[arg(default_value = "output.sql")]
    output: PathBuf,

    /// Don't print a notice for each converted identifier
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> SqlSnakeResult<()> {
    let mut converted = 0usize;

    convert_file(&cli.input, &cli.output, |old, new| {
        converted += 1;
        if !cli.quiet {
            println!("Converted: {} → {}", old.yellow(), new.green());
        }
    })?;

    println!(
        "{} Wrote {} ({} identifier{} converted)",
        "✓".green(),
        cli.output.display().to_string().cyan(),
        converted,
        if converted == 1 { "" } else { "s" }
    );

    Ok(())
}
