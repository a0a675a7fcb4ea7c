//! Subcommand handlers

pub mod build;
pub mod config;
pub mod highlight;
pub mod inspect;
pub mod timecode;
