//! Command-line tool for the broker/agent portal.
//!
//! This binary drives the authenticated surface of the Coastal Vision
//! listing service: browsing listings, inspecting the team roster, and
//! checking the bound session.
//!
//! # Usage
//!
//! ```bash
//! # Browse the public listings (no session required)
//! coastline-portal public
//!
//! # Log in and list the portal's properties
//! coastline-portal --username broker@example.com --password secret properties
//!
//! # Team roster as JSON
//! coastline-portal --format json users
//!
//! # Who am I logged in as?
//! coastline-portal me
//! ```
//!
//! Credentials may also come from the COASTLINE_USERNAME and
//! COASTLINE_PASSWORD environment variables. The session token persists
//! between runs; when the service rejects it (401/403) the stale session is
//! cleared and, if credentials are available, login is retried once.

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use serde::Serialize;

use coastline::{Coastline, Error, Property, User};

/// Output format for displaying results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum OutputFormat {
    /// Plain text format (default) - human-readable output.
    #[default]
    Text,
    /// JSON format - structured output suitable for parsing.
    Json,
    /// YAML format - structured output in YAML format.
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Invalid output format: {}. Valid options: text, json, yaml",
                s
            )),
        }
    }
}

/// Command-line arguments for the coastline-portal tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct Args {
    /// Base URL of the listing service.
    #[arrrg(optional, "Base URL (default: $COASTLINE_BASE_URL)", "URL")]
    base_url: Option<String>,

    /// Output format for results (text, json, yaml).
    #[arrrg(optional, "Output format: text, json, yaml", "FORMAT")]
    format: Option<String>,

    /// Login name; falls back to COASTLINE_USERNAME.
    #[arrrg(optional, "Login email", "EMAIL")]
    username: Option<String>,

    /// Password; falls back to COASTLINE_PASSWORD.
    #[arrrg(optional, "Login password", "PASSWORD")]
    password: Option<String>,
}

/// Credentials resolved from flags or the environment.
fn credentials(args: &Args) -> Option<(String, String)> {
    let username = args
        .username
        .clone()
        .or_else(|| std::env::var("COASTLINE_USERNAME").ok())?;
    let password = args
        .password
        .clone()
        .or_else(|| std::env::var("COASTLINE_PASSWORD").ok())?;
    Some((username, password))
}

/// Runs an authenticated call with the session-expiry policy: a 401/403
/// clears the stale session, logs in again when credentials are available,
/// and retries once.
async fn with_session<T, F, Fut>(
    client: &Coastline,
    creds: Option<(String, String)>,
    call: F,
) -> Result<T, Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, Error>>,
{
    if client.token().is_none() {
        if let Some((username, password)) = &creds {
            client.login(username, password).await?;
        }
    }

    match call().await {
        Err(e) if e.is_auth_failure() => {
            client.logout()?;
            let Some((username, password)) = &creds else {
                return Err(e);
            };
            eprintln!("Session rejected; logging in again");
            client.login(username, password).await?;
            call().await
        }
        result => result,
    }
}

fn print_serialized<T: Serialize>(value: &T, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => unreachable!("text output is rendered by the caller"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
        }
    }
    Ok(())
}

fn print_properties(
    properties: &[Property],
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if *format != OutputFormat::Text {
        return print_serialized(&properties, format);
    }
    for p in properties {
        let price = p
            .price
            .map(|price| format!("${:.0}", price))
            .unwrap_or_else(|| "price on request".to_string());
        println!(
            "#{} {}, {}, {} {} ({}) [{} images]",
            p.id,
            p.address,
            p.city,
            p.state,
            p.zip_code,
            price,
            p.images.len()
        );
    }
    Ok(())
}

fn print_users(users: &[User], format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    if *format != OutputFormat::Text {
        return print_serialized(&users, format);
    }
    for u in users {
        let status = if u.is_active { "active" } else { "inactive" };
        println!("#{} {} ({}, {})", u.id, u.email, u.role, status);
    }
    Ok(())
}

/// Main entry point for the coastline-portal command-line tool.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, commands) =
        Args::from_command_line_relaxed("coastline-portal [OPTIONS] <public|properties|users|me>");

    let Some(command) = commands.first().map(String::as_str) else {
        eprintln!("Error: Must specify a command: public, properties, users, me");
        std::process::exit(1);
    };

    let format = if let Some(format_str) = &args.format {
        format_str
            .parse()
            .map_err(|e| format!("Invalid format: {}", e))?
    } else {
        OutputFormat::Text
    };

    let client = Coastline::new(args.base_url.clone())?;
    let creds = credentials(&args);

    match command {
        "public" => {
            let properties = client.public_properties().await?;
            print_properties(&properties, &format)?;
        }
        "properties" => {
            let properties = with_session(&client, creds, || client.properties()).await?;
            print_properties(&properties, &format)?;
        }
        "users" => {
            let users = with_session(&client, creds, || client.users()).await?;
            print_users(&users, &format)?;
        }
        "me" => {
            let user = with_session(&client, creds, || client.me()).await?;
            if format == OutputFormat::Text {
                println!("#{} {} ({})", user.id, user.email, user.role);
            } else {
                print_serialized(&user, &format)?;
            }
        }
        other => {
            eprintln!("Error: Unknown command: {}", other);
            eprintln!("Valid commands: public, properties, users, me");
            std::process::exit(1);
        }
    }

    Ok(())
}
