pub mod locale;
pub mod prompt;
