//! Parse command - Show which username a title would be read as

use clap::Args;
use onboard_core::extract_username;

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Issue title to parse
    #[arg(required = true)]
    pub title: String,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> anyhow::Result<()> {
        let username = extract_username(&self.title)?;
        println!("{}", username);
        Ok(())
    }
}
