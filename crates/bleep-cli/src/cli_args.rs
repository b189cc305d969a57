//! CLI argument definitions for the bleep command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use bleep_cli::input::SoundOptions;
use clap::{Args, Parser, Subcommand};

/// Bleep - procedural retro sound effects
#[derive(Parser)]
#[command(name = "bleep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options selecting one sound to render.
#[derive(Args, Debug, Clone)]
pub(crate) struct SoundArgs {
    /// Comma-separated parameter settings (empty fields are zero)
    #[arg(long, allow_hyphen_values = true)]
    pub settings: Option<String>,

    /// Built-in preset name (see `bleep presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Path to a JSON sound bank
    #[arg(short, long)]
    pub bank: Option<String>,

    /// Sound name inside the bank
    #[arg(long)]
    pub sound: Option<String>,
}

impl SoundArgs {
    pub fn to_options(&self) -> SoundOptions {
        SoundOptions {
            settings: self.settings.clone(),
            preset: self.preset.clone(),
            bank: self.bank.clone(),
            sound: self.sound.clone(),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a sound to a WAV file
    Render {
        #[command(flatten)]
        sound: SoundArgs,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Noise seed (default: derived from the parameters)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a sound and print it as a base64 WAV data URI
    Uri {
        #[command(flatten)]
        sound: SoundArgs,

        /// Noise seed (default: derived from the parameters)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render every sound in a bank into a directory
    Bake {
        /// Path to a JSON sound bank (default: built-in presets)
        #[arg(short, long)]
        bank: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Base seed; each sound derives its own from it and its name
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List built-in presets
    Presets {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the header and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
