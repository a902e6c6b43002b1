pub mod language;
pub mod markdown;
pub mod prompt;
pub mod types;
