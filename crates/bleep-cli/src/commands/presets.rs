//! Presets command implementation
//!
//! Lists the built-in sound presets.

use anyhow::Result;
use bleep_spec::params::format_settings;
use bleep_spec::SoundBank;
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{PresetInfo, PresetsOutput};
use super::sound::print_json;

/// Run the presets command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let presets = collect();

    if json_output {
        print_json(&PresetsOutput { presets })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Built-in presets".cyan().bold());
    for preset in &presets {
        println!(
            "  {:<10} {:<8} {}",
            preset.name.bold(),
            preset.wave_type,
            preset.settings.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn collect() -> Vec<PresetInfo> {
    SoundBank::builtin()
        .iter()
        .map(|(name, params)| PresetInfo {
            name: name.to_string(),
            wave_type: params.wave_type.to_string(),
            settings: format_settings(&params.to_vec()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_lists_all_presets() {
        let presets = collect();
        assert_eq!(presets.len(), 9);
        let jump = presets.iter().find(|p| p.name == "jump").unwrap();
        assert_eq!(jump.wave_type, "square");
        assert_eq!(
            jump.settings,
            "0,,0.1434,,0.1212,0.4471,,0.2511,,,,,,0.0426,,,,,0.8862,,,,,0.5"
        );
    }

    #[test]
    fn test_run_both_modes() {
        assert_eq!(run(false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(true).unwrap(), ExitCode::SUCCESS);
    }
}
