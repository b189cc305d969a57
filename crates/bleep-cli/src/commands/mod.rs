//! CLI command implementations

pub mod bake;
pub mod inspect;
pub mod json_output;
pub mod presets;
pub mod render;
pub mod uri;

mod sound;
