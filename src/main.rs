use anyhow::Result;
use clap::{Parser, Subcommand};
use longform_tts::chunk_text;
use longform_tts::concatenate_wav_files;
use longform_tts::config::DEFAULT_CHUNK_CHARS;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "longform-tts")]
#[command(about = "Chunked long-form text-to-speech pipeline tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into synthesizer-safe chunks and print them
    Chunk {
        /// Text to chunk; omit to read from --file
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_CHUNK_CHARS)]
        max_chars: usize,
    },
    /// Concatenate PCM WAV files into one
    Concat {
        /// Input WAV files, in order
        inputs: Vec<PathBuf>,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chunk {
            text,
            file,
            max_chars,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => anyhow::bail!("Provide text or --file"),
            };
            let chunks = chunk_text(&text, max_chars);
            for chunk in &chunks {
                println!("[{:04}] ({} chars) {}", chunk.index, chunk.char_len, chunk.text);
            }
            eprintln!("{} chunk(s)", chunks.len());
        }
        Commands::Concat { inputs, output } => {
            if inputs.is_empty() {
                anyhow::bail!("No input WAV files given");
            }
            let result = concatenate_wav_files(&inputs, &output)?;
            eprintln!(
                "Wrote {} ({} frames, {})",
                output.display(),
                result.frame_count(),
                result.format()
            );
        }
    }

    Ok(())
}
