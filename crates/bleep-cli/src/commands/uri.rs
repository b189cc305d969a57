//! URI command implementation
//!
//! Renders one sound and prints it as a `data:audio/wav;base64,` URI.

use anyhow::Result;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, UriOutput};
use super::sound::{finish_json, render_source};
use crate::input::SoundOptions;

/// Run the uri command
///
/// Human mode prints only the URI so it can be piped.
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &SoundOptions, seed: Option<u32>, json_output: bool) -> Result<ExitCode> {
    let rendered = options.source().and_then(|s| render_source(&s, seed));

    if !json_output {
        println!("{}", rendered?.asset.data_uri());
        return Ok(ExitCode::SUCCESS);
    }

    match rendered {
        Ok(rendered) => {
            let result = UriOutput {
                success: true,
                uri: Some(rendered.asset.data_uri()),
                sound: Some(rendered.summary()),
                errors: Vec::new(),
            };
            finish_json(&result, true)
        }
        Err(e) => {
            let result = UriOutput {
                success: false,
                uri: None,
                sound: None,
                errors: vec![JsonError::from_anyhow(&e, error_codes::INVALID_ARGS)],
            };
            finish_json(&result, false)
        }
    }
}
