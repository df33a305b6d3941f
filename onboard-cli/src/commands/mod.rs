//! CLI command implementations

pub mod parse;
pub mod run;
pub mod settings;

pub use parse::ParseArgs;
pub use run::RunArgs;
pub use settings::show_settings;
