//! Config module: project-level settings loaded from `.secretview.toml`.

pub mod settings;

pub use settings::Settings;
