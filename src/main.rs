use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use chatseed::domain::{Conversation, Message, Prompt, Snippet};
use chatseed::prompt::{PromptRenderer, RenderMap, SnippetLoader};
use chatseed::storage::{ConversationStore, JsonlStorage, PromptStore, SnippetStore};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, ConversationCommands, PromptCommands, SnippetCommands};
use config::Config;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chatseed")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("chatseed.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let level = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_storage(config: &Config) -> Result<JsonlStorage> {
    let dir = &config.storage.dir;
    JsonlStorage::new(dir).context(format!("Failed to open store at {}", dir.display()))
}

fn to_render_map(vars: &[(String, String)]) -> RenderMap {
    vars.iter().cloned().collect()
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{} {}", "Store:".yellow(), config.storage.dir.display());
    }

    let storage = open_storage(config)?;

    match &cli.command {
        Commands::Snippet { command } => handle_snippet_command(command, &storage),
        Commands::Prompt { command } => handle_prompt_command(command, &storage),
        Commands::Render { template, vars } => handle_render_command(template, vars, &storage),
        Commands::Materialize { name, vars } => handle_materialize_command(name, vars, &storage),
        Commands::Conversation { command } => handle_conversation_command(command, &storage),
    }
}

fn find_snippet(snippets: &SnippetStore<'_, JsonlStorage>, name: &str) -> Result<Snippet> {
    snippets
        .get_by_name(name)?
        .ok_or_else(|| eyre!("Snippet not found: {}", name))
}

fn find_prompt(prompts: &PromptStore<'_, JsonlStorage>, name: &str) -> Result<Prompt> {
    prompts
        .get_by_name(name)?
        .ok_or_else(|| eyre!("Prompt not found: {}", name))
}

fn handle_snippet_command(command: &SnippetCommands, storage: &JsonlStorage) -> Result<()> {
    info!("Handling snippet command: {:?}", command);
    let snippets = SnippetStore::new(storage);

    match command {
        SnippetCommands::Add { name, content } => {
            let snippet = Snippet::new(name, content);
            snippets
                .create(&snippet)
                .context(format!("Failed to create snippet '{}'", name))?;
            println!("{} {}", "Created snippet:".green(), snippet);
        }
        SnippetCommands::List => {
            for snippet in snippets.list_all()? {
                println!("{}", snippet.to_string().cyan());
            }
        }
        SnippetCommands::Show { name } => {
            let snippet = find_snippet(&snippets, name)?;
            println!("{}", snippet.content);
        }
        SnippetCommands::Update { name, content } => {
            let mut snippet = find_snippet(&snippets, name)?;
            snippet.set_content(content);
            snippets.update(&snippet)?;
            println!("{} {}", "Updated snippet:".green(), snippet);
        }
        SnippetCommands::Delete { name } => {
            let snippet = find_snippet(&snippets, name)?;
            snippets.delete(&snippet.id)?;
            println!("{} {}", "Deleted snippet:".red(), snippet);
        }
        SnippetCommands::Import { dir } => import_snippets(&snippets, dir)?,
    }
    Ok(())
}

fn import_snippets(snippets: &SnippetStore<'_, JsonlStorage>, dir: &Path) -> Result<()> {
    let loader = SnippetLoader::new(dir);
    let (mut created, mut updated) = (0, 0);

    for (name, content) in loader.load_all()? {
        match snippets.get_by_name(&name)? {
            Some(mut existing) => {
                existing.set_content(content);
                snippets.update(&existing)?;
                updated += 1;
            }
            None => {
                snippets.create(&Snippet::new(&name, content))?;
                created += 1;
            }
        }
    }

    info!("Imported snippets from {}: {} created, {} updated", dir.display(), created, updated);
    println!(
        "{} {} created, {} updated from {}",
        "Imported:".green(),
        created,
        updated,
        dir.display()
    );
    Ok(())
}

fn handle_prompt_command(command: &PromptCommands, storage: &JsonlStorage) -> Result<()> {
    info!("Handling prompt command: {:?}", command);
    let prompts = PromptStore::new(storage);

    match command {
        PromptCommands::Add { name, system, first } => {
            let prompt = Prompt::new(name, system, first);
            prompts
                .create(&prompt)
                .context(format!("Failed to create prompt '{}'", name))?;
            println!("{} {}", "Created prompt:".green(), prompt);
        }
        PromptCommands::List => {
            for prompt in prompts.list_all()? {
                println!("{}", prompt.to_string().cyan());
            }
        }
        PromptCommands::Show { name } => {
            let prompt = find_prompt(&prompts, name)?;
            println!("{}\n{}\n", "[system]".yellow(), prompt.system_prompt);
            println!("{}\n{}", "[first message]".yellow(), prompt.first_message);
        }
        PromptCommands::Update {
            name,
            system,
            first,
            rename,
        } => {
            let mut prompt = find_prompt(&prompts, name)?;
            if let Some(system) = system {
                prompt.system_prompt = system.clone();
            }
            if let Some(first) = first {
                prompt.first_message = first.clone();
            }
            if let Some(rename) = rename {
                prompt.name = rename.clone();
            }
            prompt.updated_at = chatseed::id::now_ms();
            prompts
                .update(&prompt)
                .context(format!("Failed to update prompt '{}'", name))?;
            println!("{} {}", "Updated prompt:".green(), prompt);
        }
        PromptCommands::Delete { name } => {
            let prompt = find_prompt(&prompts, name)?;
            prompts.delete(&prompt.id)?;
            println!("{} {}", "Deleted prompt:".red(), prompt);
        }
    }
    Ok(())
}

fn handle_render_command(template: &str, vars: &[(String, String)], storage: &JsonlStorage) -> Result<()> {
    info!("Rendering template with {} variables", vars.len());
    let snippets = SnippetStore::new(storage).as_map()?;
    let rendered = PromptRenderer::new()
        .render(template, &to_render_map(vars), &snippets)
        .context("Failed to render template")?;
    println!("{}", rendered);
    Ok(())
}

fn handle_materialize_command(name: &str, vars: &[(String, String)], storage: &JsonlStorage) -> Result<()> {
    info!("Materializing prompt: {}", name);
    let prompt = find_prompt(&PromptStore::new(storage), name)?;
    let conversation = prompt
        .materialize(storage, &to_render_map(vars))
        .context(format!("Failed to materialize prompt '{}'", name))?;

    println!("{} {}", "Created conversation:".green(), conversation.id);
    print_conversation(&conversation);
    Ok(())
}

fn handle_conversation_command(command: &ConversationCommands, storage: &JsonlStorage) -> Result<()> {
    info!("Handling conversation command: {:?}", command);
    let conversations = ConversationStore::new(storage);

    match command {
        ConversationCommands::List => {
            for conversation in conversations.list_all()? {
                println!(
                    "{} ({} messages)",
                    conversation.id.cyan(),
                    conversation.messages().len()
                );
            }
        }
        ConversationCommands::Show { id } => {
            let conversation = conversations
                .get(id)?
                .ok_or_else(|| eyre!("Conversation not found: {}", id))?;
            print_conversation(&conversation);
        }
        ConversationCommands::Append { id, role, content } => {
            let mut conversation = conversations
                .get(id)?
                .ok_or_else(|| eyre!("Conversation not found: {}", id))?;
            conversation.push(Message::new(role, content));
            conversations.update(&conversation)?;
            println!(
                "{} {} now has {} messages",
                "Appended:".green(),
                conversation.id,
                conversation.messages().len()
            );
        }
    }
    Ok(())
}

fn print_conversation(conversation: &Conversation) {
    for message in conversation.messages() {
        println!("{}\n{}\n", format!("[{}]", message.role).yellow(), message.content);
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
