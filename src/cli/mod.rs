//! CLI module for chatseed - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for snippet and prompt
//! management, rendering, materialization and conversation inspection.

pub mod commands;

pub use commands::Cli;
