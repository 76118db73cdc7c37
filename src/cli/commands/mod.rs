pub mod batch;
pub mod completions;
pub mod detail;
pub mod show;
pub mod validate;
pub mod version;
