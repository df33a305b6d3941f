//! Onboard GitHub - GitHub integration for the onboarding bot
//!
//! This crate authenticates as a GitHub App installation and implements
//! [`onboard_core::GitHubApi`] on top of octocrab.

mod api;
mod client;
mod collaborators;
mod error;
mod issues;

pub use client::GitHubClient;
pub use error::{Error, Result};
