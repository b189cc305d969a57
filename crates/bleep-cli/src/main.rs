//! Bleep CLI - render retro sound effects from parameter vectors
//!
//! This binary renders sounds from settings strings, built-in presets, and
//! JSON sound banks, and inspects the WAV files it produces.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use bleep_cli::commands;
use cli_args::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            sound,
            output,
            seed,
            json,
        } => commands::render::run(&sound.to_options(), &output, seed, json),
        Commands::Uri { sound, seed, json } => {
            commands::uri::run(&sound.to_options(), seed, json)
        }
        Commands::Bake {
            bank,
            out_dir,
            seed,
            json,
        } => commands::bake::run(bank.as_deref(), &out_dir, seed, json),
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_preset() {
        let cli = Cli::try_parse_from([
            "bleep", "render", "--preset", "jump", "-o", "jump.wav", "--seed", "9",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Render {
                sound,
                output,
                seed,
                json,
            } => {
                assert_eq!(sound.preset.as_deref(), Some("jump"));
                assert!(sound.settings.is_none());
                assert_eq!(output, "jump.wav");
                assert_eq!(seed, Some(9));
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_uri_settings() {
        let cli = Cli::try_parse_from([
            "bleep",
            "-vv",
            "uri",
            "--settings",
            "0,,0.1434,,0.1212,0.4471",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Uri { sound, seed, json } => {
                let options = sound.to_options();
                assert_eq!(options.settings.as_deref(), Some("0,,0.1434,,0.1212,0.4471"));
                assert!(seed.is_none());
                assert!(json);
            }
            _ => panic!("expected uri command"),
        }
    }

    #[test]
    fn test_cli_parses_negative_settings() {
        let cli = Cli::try_parse_from(["bleep", "uri", "--settings", "-0.5,,0.2"]).unwrap();
        match cli.command {
            Commands::Uri { sound, .. } => {
                assert_eq!(sound.settings.as_deref(), Some("-0.5,,0.2"));
            }
            _ => panic!("expected uri command"),
        }
    }

    #[test]
    fn test_cli_parses_bake_defaults() {
        let cli = Cli::try_parse_from(["bleep", "bake"]).unwrap();
        match cli.command {
            Commands::Bake {
                bank,
                out_dir,
                seed,
                json,
            } => {
                assert!(bank.is_none());
                assert_eq!(out_dir, ".");
                assert!(seed.is_none());
                assert!(!json);
            }
            _ => panic!("expected bake command"),
        }
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["bleep", "inspect", "-i", "hit.wav", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "hit.wav");
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_requires_output_for_render() {
        assert!(Cli::try_parse_from(["bleep", "render", "--preset", "jump"]).is_err());
    }
}
