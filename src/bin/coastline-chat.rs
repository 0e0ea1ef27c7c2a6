//! Interactive chat application for talking to the listing concierge.
//!
//! This binary provides a REPL interface for the chat endpoint of the
//! Coastal Vision listing service. The endpoint is stateless; the session
//! resends the conversation history each turn.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage (base URL from COASTLINE_BASE_URL)
//! coastline-chat
//!
//! # Point at a specific deployment
//! coastline-chat --base-url https://api.coastalvision.example
//!
//! # Skip the opening greeting
//! coastline-chat --no-greeting
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/history` - Print the conversation so far
//! - `/clear` - Clear conversation history
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use coastline::Coastline;
use coastline::chat::{ChatArgs, ChatCommand, ChatConfig, ChatSession, help_text, parse_command};
use coastline::types::ChatRole;

/// Main entry point for the coastline-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("coastline-chat [OPTIONS]");
    let config = ChatConfig::from(args);

    let client = Coastline::new(config.base_url.clone())?;
    let mut session = match &config.greeting {
        Some(greeting) => ChatSession::with_greeting(client, greeting.as_str()),
        None => ChatSession::new(client),
    };
    let mut rl = DefaultEditor::new()?;

    // Ctrl+C at the prompt is handled by rustyline; mid-request it aborts
    // the process.
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(130);
    })?;

    println!("Coastal Vision chat");
    println!("Type /help for commands, /quit to exit\n");
    if let Some(greeting) = session.messages().first() {
        println!("Rachel: {}\n", greeting.content);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            println!("Conversation cleared.");
                        }
                        ChatCommand::History => {
                            for message in session.messages() {
                                let speaker = match message.role {
                                    ChatRole::User => "You",
                                    ChatRole::Assistant => "Rachel",
                                    ChatRole::System => "System",
                                };
                                println!("{}: {}", speaker, message.content);
                            }
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Invalid(msg) => {
                            println!("{}", msg);
                        }
                    }
                    continue;
                }

                match session.send(line).await {
                    Ok(reply) => println!("Rachel: {}\n", reply),
                    Err(e) => eprintln!("error: {}\n", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use /quit to exit");
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
