// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Login and logout commands.
//!
//! ```text
//! 1. print  {sso.ui_url}/login?service={api origin}{sso.service_path}
//! 2. user   authenticates in the browser, gets redirected with ?ticket=
//! 3. read   the ticket (or the whole redirect URL) from --ticket/stdin
//! 4. POST   {api.url}/auth/sso  --> username + session cookie
//! 5. save   the session to disk for later commands
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use tracing::info;
use url::Url;

use crate::api::{ApiClient, sso::login_url};
use crate::cli::login::LoginArgs;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::{Session, SessionStore};

/// Main handler for the login command.
///
/// # Errors
///
/// Returns an error if the API or SSO URLs are not configured, the
/// ticket exchange is rejected, or the session cannot be persisted.
pub async fn run_login_command(args: &LoginArgs, config: &Config) -> Result<()> {
    let api_url = config.require_api_url()?;
    let sso_ui_url = config.require_sso_ui_url()?;

    let service_url = service_url(api_url, &config.sso.service_path)?;
    let browser_url = login_url(sso_ui_url, &service_url)?;

    let ticket = match &args.ticket {
        Some(ticket) => extract_ticket(ticket),
        None => {
            println!("Open this URL in your browser and log in:");
            println!();
            println!("  {browser_url}");
            println!();
            println!("After logging in you will be redirected to a URL containing");
            println!("a `ticket` parameter. Paste that URL (or just the ticket) here.");
            prompt_for_ticket()?
        }
    };

    let Some(ticket) = ticket else {
        bail!("no ticket provided");
    };

    if config.global.dry {
        println!("[DRY-RUN] Would exchange the ticket against {api_url}");
        return Ok(());
    }

    let client = ApiClient::new(api_url, None)?;
    let login = client.exchange_ticket(&ticket, &service_url).await?;

    let Some(token) = login.session else {
        bail!("login succeeded but the backend issued no session cookie");
    };

    let store = SessionStore::open_default()?;
    store.save(&Session {
        token,
        username: login.username.clone(),
    })?;

    info!(username = login.username, "logged in");
    println!("Logged in as {}.", login.username);

    Ok(())
}

/// Main handler for the logout command. Clearing an absent session is
/// not an error.
pub fn run_logout_command() -> Result<()> {
    let store = SessionStore::open_default()?;
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

/// The URL the identity provider redirects back to: the API origin plus
/// the configured service path.
fn service_url(api_url: &str, service_path: &str) -> Result<String> {
    let base =
        Url::parse(api_url).map_err(|e| ApiError::InvalidUrl(format!("{api_url}: {e}")))?;
    Ok(format!(
        "{}{service_path}",
        base.origin().ascii_serialization()
    ))
}

/// Accepts either a bare ticket or a full redirect URL carrying a
/// `ticket` query parameter.
pub(crate) fn extract_ticket(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(input) {
        if let Some((_, ticket)) = url.query_pairs().find(|(name, _)| name == "ticket") {
            let ticket = ticket.trim();
            return (!ticket.is_empty()).then(|| ticket.to_string());
        }
        // A URL without a ticket parameter is not a ticket.
        if url.has_host() {
            return None;
        }
    }

    Some(input.to_string())
}

fn prompt_for_ticket() -> Result<Option<String>> {
    print!("Ticket: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the ticket from stdin")?;

    Ok(extract_ticket(&line))
}
