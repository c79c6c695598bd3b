mod console;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use notewise_core::{available_chords, available_scales, chord_response, scale_response, Response};
use std::io;

use console::{Console, Lookup};

#[derive(Parser)]
#[command(name = "notewise")]
#[command(about = "Spell out the notes of scales and chords", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress informational messages (only errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the notes of a scale, root to octave
    Scale {
        /// Scale type (major, minor, dorian, ...)
        scale_type: String,

        /// Root note (e.g. C, F#, Bb)
        note: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the notes of a chord
    Chord {
        /// Chord type (major, minor7, sus4, ...)
        chord_type: String,

        /// Root note (e.g. C, F#, Bb)
        note: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the registered scale and chord types
    List,
    /// Prompt for notes and types until 'exit'
    Interactive {
        /// Ask for chord types instead of scale types
        #[arg(long)]
        chords: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scale { scale_type, note, format } => {
            if !cli.quiet {
                eprintln!("Scale: {} {}", note, scale_type);
            }
            report(scale_response(&note, &scale_type), format)
        }
        Commands::Chord { chord_type, note, format } => {
            if !cli.quiet {
                eprintln!("Chord: {} {}", note, chord_type);
            }
            report(chord_response(&note, &chord_type), format)
        }
        Commands::List => {
            println!("Scales: {}", available_scales().join(", "));
            println!("Chords: {}", available_chords().join(", "));
            Ok(())
        }
        Commands::Interactive { chords } => {
            let lookup = if chords { Lookup::Chord } else { Lookup::Scale };
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout(), lookup);
            console.run()
        }
    }
}

/// Print a response; engine errors exit with status 1
fn report(response: Response, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", response.to_json_pretty()?);
            if response.is_error() {
                std::process::exit(1);
            }
        }
        OutputFormat::Text => match response {
            Response::Scale { scale: notes, .. } | Response::Chord { chord: notes, .. } => {
                println!("{}", notes.join(" "));
            }
            Response::Error { error } => {
                eprintln!("✗ {}", error);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
