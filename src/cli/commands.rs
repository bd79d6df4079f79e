//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - snippet: manage reusable text fragments
//! - prompt: manage prompt templates
//! - render: render a template string against stored snippets
//! - materialize: create a conversation from a prompt
//! - conversation: inspect and extend stored conversations

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chatseed - Render prompt templates and snippets into conversations
#[derive(Parser, Debug)]
#[command(name = "chatseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Parse a `key=value` template variable
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Snippet management commands
    Snippet {
        #[command(subcommand)]
        command: SnippetCommands,
    },

    /// Prompt template management commands
    Prompt {
        #[command(subcommand)]
        command: PromptCommands,
    },

    /// Render a template string with stored snippets and the given variables
    Render {
        /// Template text, e.g. "Hello {{ name }}"
        template: String,

        /// Template variable (repeatable)
        #[arg(short = 'D', long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Create a new conversation from a prompt
    Materialize {
        /// Prompt name
        name: String,

        /// Template variable (repeatable)
        #[arg(short = 'D', long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Conversation commands
    Conversation {
        #[command(subcommand)]
        command: ConversationCommands,
    },
}

/// Snippet management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SnippetCommands {
    /// Create a new snippet
    Add {
        /// Unique snippet name
        name: String,

        /// Snippet text, may reference variables
        content: String,
    },

    /// List all snippets
    List,

    /// Show a snippet's content
    Show {
        /// Snippet name
        name: String,
    },

    /// Replace a snippet's content
    Update {
        /// Snippet name
        name: String,

        /// New snippet text
        content: String,
    },

    /// Delete a snippet
    Delete {
        /// Snippet name
        name: String,
    },

    /// Create or update snippets from `<name>.md` files in a directory
    Import {
        /// Directory containing snippet files
        dir: PathBuf,
    },
}

/// Prompt management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PromptCommands {
    /// Create a new prompt
    Add {
        /// Unique prompt name
        name: String,

        /// System message template
        #[arg(short, long)]
        system: String,

        /// First assistant message template
        #[arg(short, long)]
        first: String,
    },

    /// List all prompts
    List,

    /// Show a prompt's templates
    Show {
        /// Prompt name
        name: String,
    },

    /// Change a prompt's templates or name
    Update {
        /// Prompt name
        name: String,

        /// New system message template
        #[arg(short, long)]
        system: Option<String>,

        /// New first assistant message template
        #[arg(short, long)]
        first: Option<String>,

        /// New unique name
        #[arg(long)]
        rename: Option<String>,
    },

    /// Delete a prompt
    Delete {
        /// Prompt name
        name: String,
    },
}

/// Conversation subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConversationCommands {
    /// List all conversations
    List,

    /// Show a conversation's messages
    Show {
        /// Conversation ID
        id: String,
    },

    /// Append a message to a conversation
    Append {
        /// Conversation ID
        id: String,

        /// Message role
        #[arg(short, long, default_value = "user")]
        role: String,

        /// Message content
        #[arg(short = 'm', long)]
        content: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["chatseed"]).is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["chatseed", "-v", "snippet", "list"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["chatseed", "prompt", "list", "-c", "/path/to/chatseed.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/chatseed.yml")));
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("role=a tutor"), Ok(("role".to_string(), "a tutor".to_string())));
        assert_eq!(parse_var("eq=a=b"), Ok(("eq".to_string(), "a=b".to_string())));
        assert_eq!(parse_var("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=value").is_err());
    }

    #[test]
    fn test_snippet_add() {
        let cli = Cli::try_parse_from(["chatseed", "snippet", "add", "greeting", "Hi {{ user }}!"]).unwrap();
        match cli.command {
            Commands::Snippet {
                command: SnippetCommands::Add { name, content },
            } => {
                assert_eq!(name, "greeting");
                assert_eq!(content, "Hi {{ user }}!");
            }
            _ => panic!("Expected snippet add command"),
        }
    }

    #[test]
    fn test_snippet_import() {
        let cli = Cli::try_parse_from(["chatseed", "snippet", "import", "./snippets"]).unwrap();
        match cli.command {
            Commands::Snippet {
                command: SnippetCommands::Import { dir },
            } => assert_eq!(dir, PathBuf::from("./snippets")),
            _ => panic!("Expected snippet import command"),
        }
    }

    #[test]
    fn test_prompt_add() {
        let cli = Cli::try_parse_from([
            "chatseed",
            "prompt",
            "add",
            "helper",
            "-s",
            "You are {{ role }}",
            "-f",
            "{{ greeting }}",
        ])
        .unwrap();
        match cli.command {
            Commands::Prompt {
                command: PromptCommands::Add { name, system, first },
            } => {
                assert_eq!(name, "helper");
                assert_eq!(system, "You are {{ role }}");
                assert_eq!(first, "{{ greeting }}");
            }
            _ => panic!("Expected prompt add command"),
        }
    }

    #[test]
    fn test_prompt_update_partial() {
        let cli = Cli::try_parse_from(["chatseed", "prompt", "update", "helper", "--rename", "assistant"]).unwrap();
        match cli.command {
            Commands::Prompt {
                command: PromptCommands::Update { name, system, first, rename },
            } => {
                assert_eq!(name, "helper");
                assert!(system.is_none());
                assert!(first.is_none());
                assert_eq!(rename, Some("assistant".to_string()));
            }
            _ => panic!("Expected prompt update command"),
        }
    }

    #[test]
    fn test_materialize_with_vars() {
        let cli = Cli::try_parse_from([
            "chatseed",
            "materialize",
            "helper",
            "-D",
            "role=a helpful assistant",
            "--var",
            "user=Sam",
        ])
        .unwrap();
        match cli.command {
            Commands::Materialize { name, vars } => {
                assert_eq!(name, "helper");
                assert_eq!(
                    vars,
                    vec![
                        ("role".to_string(), "a helpful assistant".to_string()),
                        ("user".to_string(), "Sam".to_string()),
                    ]
                );
            }
            _ => panic!("Expected materialize command"),
        }
    }

    #[test]
    fn test_materialize_rejects_bad_var() {
        let result = Cli::try_parse_from(["chatseed", "materialize", "helper", "-D", "oops"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_command() {
        let cli = Cli::try_parse_from(["chatseed", "render", "Hello {{ name }}", "-D", "name=Ann"]).unwrap();
        match cli.command {
            Commands::Render { template, vars } => {
                assert_eq!(template, "Hello {{ name }}");
                assert_eq!(vars.len(), 1);
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_conversation_append_default_role() {
        let cli = Cli::try_parse_from(["chatseed", "conversation", "append", "conv-1", "-m", "Hello!"]).unwrap();
        match cli.command {
            Commands::Conversation {
                command: ConversationCommands::Append { id, role, content },
            } => {
                assert_eq!(id, "conv-1");
                assert_eq!(role, "user");
                assert_eq!(content, "Hello!");
            }
            _ => panic!("Expected conversation append command"),
        }
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["chatseed", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
