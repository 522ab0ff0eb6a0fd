//! Command-line host for the LegalIntel client flows
//!
//! ```text
//! li_cli search <text>     search entities and print the matches
//! li_cli verify <email>    enter the emailed code (read from stdin)
//! li_cli login <email>     sign in (password read from stdin)
//! ```

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use li_core::{
    AuthService, InMemoryKeyValueStore, OtpEvent, OtpUpdate, SearchEvent, SearchSession, SearchUpdate,
    VerificationSession,
};
use li_infra::{telemetry, HttpApiClient};
use li_shared::ClientConfig;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

enum Command {
    Search(String),
    Verify(String),
    Login(String),
}

fn parse_command() -> Result<Command> {
    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();
    let rest: Vec<String> = args.collect();
    let argument = rest.join(" ");

    match command.as_str() {
        "search" if !argument.is_empty() => Ok(Command::Search(argument)),
        "verify" if !argument.is_empty() => Ok(Command::Verify(argument)),
        "login" if !argument.is_empty() => Ok(Command::Login(argument)),
        _ => bail!("usage: li_cli <search <text> | verify <email> | login <email>>"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let command = parse_command()?;

    let config = li_infra::load_config().context("Failed to load configuration")?;
    telemetry::init_tracing(&config.logging).context("Failed to initialize tracing")?;
    info!(environment = %config.environment, "Starting LegalIntel CLI");

    let client = Arc::new(HttpApiClient::new(config.api.clone()).context("Failed to build API client")?);

    match command {
        Command::Search(text) => run_search(client, &config, text).await,
        Command::Verify(email) => run_verify(client, &config, &email).await,
        Command::Login(email) => run_login(client, &email).await,
    }
}

async fn run_search(client: Arc<HttpApiClient>, config: &ClientConfig, text: String) -> Result<()> {
    let mut session = SearchSession::new(client, config.search.clone());
    session.handle(SearchEvent::Input(text));

    while let Some(update) = session.next_update().await {
        match update {
            SearchUpdate::Searching { query } => println!("Searching for \"{}\"...", query),
            SearchUpdate::Results { matches, .. } if matches.is_empty() => println!("No matches"),
            SearchUpdate::Results { matches, .. } => {
                for (index, entity) in matches.iter().enumerate() {
                    println!("{:>2}. {} [{}] #{}", index + 1, entity.label(), entity.entity_type, entity.id);
                }
            }
            SearchUpdate::Stale { .. } => {}
        }
    }

    if session.selector().results().is_none() {
        println!("Query too short, nothing searched");
    }
    session.close();
    Ok(())
}

async fn run_verify(client: Arc<HttpApiClient>, config: &ClientConfig, email: &str) -> Result<()> {
    let mut session = VerificationSession::new(client, email, config.otp.clone())?;
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    println!("Enter the 6-digit code sent to {}", session.controller().email());
    loop {
        if !session.controller().is_locked() && !session.controller().is_busy() {
            let Some(line) = next_line(&mut stdin).await? else {
                break;
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("resend") {
                if !session.handle(OtpEvent::Resend) {
                    println!("Resend available in {}s", session.controller().countdown_seconds());
                    continue;
                }
            } else {
                session.handle(OtpEvent::Paste(line.to_string()));
                if !session.handle(OtpEvent::Submit) {
                    println!("Please enter all six digits");
                    continue;
                }
            }
        }

        let Some(update) = session.next_update().await else {
            break;
        };
        match update {
            OtpUpdate::Tick(_) | OtpUpdate::ResendAvailable => {}
            OtpUpdate::Verified => println!("Email verified. Redirecting..."),
            OtpUpdate::Rejected(message) | OtpUpdate::ResendFailed(message) => {
                println!("{}", message)
            }
            OtpUpdate::CodeResent => println!("A new code has been sent"),
            OtpUpdate::Navigate(route) => {
                println!("-> {}", route);
                break;
            }
        }
    }

    session.close();
    Ok(())
}

async fn run_login(client: Arc<HttpApiClient>, email: &str) -> Result<()> {
    let service = AuthService::new(client, Arc::new(InMemoryKeyValueStore::new()));
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    println!("Password:");
    let password = next_line(&mut stdin).await?.unwrap_or_default();
    let route = match service.login(email, password.trim_end()).await {
        Ok(route) => route,
        Err(err) => bail!(err.user_message()),
    };
    if let Some(signed_in) = service.session().user_email().await? {
        println!("Signed in as {}", signed_in);
    }
    println!("-> {}", route);
    Ok(())
}

async fn next_line(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<String>> {
    lines.next_line().await.context("Failed to read from stdin")
}
