// ABOUTME: FitTrack CLI - command-line front end for the FitTrack activity service
// ABOUTME: Composition root wiring config, logging, API client and controllers per invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create an account
//! fittrack-cli register --name Ana --email ana@example.com --password 'Secret123!'
//!
//! # Show the profile (credentials may also come from FITTRACK_EMAIL / FITTRACK_PASSWORD)
//! fittrack-cli --email ana@example.com --password 'Secret123!' profile show
//!
//! # List running activities, second page
//! fittrack-cli activities list --type corrida --page 2
//!
//! # Record a 30 minute run
//! fittrack-cli activities create --type corrida --date 2025-03-07T08:00:00 --duration 30 --distance 5.2
//!
//! # Summary statistics
//! fittrack-cli stats
//! ```

mod commands;
mod helpers;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use fittrack_client::api::ApiClient;
use fittrack_client::config::ClientConfig;
use fittrack_client::controllers::{ActivitiesController, AuthController};
use fittrack_client::logging::LoggingConfig;
use fittrack_client::session_store::{FileSessionStore, MemorySessionStore, SessionStore};
use tracing::{debug, info};

use commands::Context;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack command-line client",
    long_about = "Log in to a FitTrack backend and manage your profile and activities."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Account e-mail used to log in
    #[arg(long, global = true, env = "FITTRACK_EMAIL")]
    email: Option<String>,

    /// Account password used to log in
    #[arg(long, global = true, env = "FITTRACK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create an account
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// E-mail address
        #[arg(long)]
        email: String,

        /// Password (8+ chars, upper, lower, digit, special)
        #[arg(long)]
        password: String,
    },

    /// Check whether the backend is reachable and recognizes a session
    Status,

    /// Compute a body-mass index locally
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimetres
        #[arg(long)]
        height: f64,
    },

    #[command(flatten)]
    Session(SessionCommand),
}

/// Commands that run inside a login/logout pair
#[non_exhaustive]
#[derive(Subcommand)]
enum SessionCommand {
    /// Profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Activity commands
    Activities {
        #[command(subcommand)]
        action: ActivityCommand,
    },

    /// Show summary statistics
    Stats,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the logged-in profile
    Show,

    /// Update profile fields
    Update {
        #[command(flatten)]
        fields: commands::account::ProfileArgs,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ActivityCommand {
    /// List activities
    List {
        /// Activity type (corrida, caminhada, ciclismo, musculacao, natacao, artesmarciais, yoga)
        #[arg(long = "type")]
        activity_type: Option<String>,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Show one activity
    Get {
        /// Activity ID
        id: i64,
    },

    /// Record an activity
    Create {
        #[command(flatten)]
        fields: commands::activities::ActivityArgs,
    },

    /// Change an activity
    Update {
        /// Activity ID
        id: i64,

        #[command(flatten)]
        fields: commands::activities::ActivityArgs,
    },

    /// Delete an activity
    Delete {
        /// Activity ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

fn build_context(config: &ClientConfig) -> Result<Context> {
    let api = Arc::new(ApiClient::new(config).context("Failed to build HTTP client")?);
    let store: Arc<dyn SessionStore> = match config.session_file_path() {
        Some(path) => Arc::new(FileSessionStore::new(path)),
        None => Arc::new(MemorySessionStore::new()),
    };

    Ok(Context {
        auth: AuthController::new(api.clone(), store),
        activities: ActivitiesController::new(api, config.per_page),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    logging.init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config.base_url = ClientConfig::with_base_url(api_url)?.base_url;
        config.validate()?;
    }
    debug!("{}", config.summary());

    let ctx = build_context(&config)?;

    match cli.command {
        Command::Register {
            name,
            email,
            password,
        } => commands::account::register(&ctx, &name, &email, &password).await?,
        Command::Status => commands::account::status(&ctx).await,
        Command::Bmi { weight, height } => commands::account::bmi(weight, height)?,
        Command::Session(command) => {
            let email = cli.email.context("--email or FITTRACK_EMAIL is required")?;
            let password = cli
                .password
                .context("--password or FITTRACK_PASSWORD is required")?;
            ctx.login(&email, &password).await?;
            let result = run_session_command(&ctx, command).await;
            ctx.logout().await;
            result?;
        }
    }

    info!("Done");
    Ok(())
}

async fn run_session_command(ctx: &Context, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Profile { action } => match action {
            ProfileCommand::Show => commands::account::show(ctx),
            ProfileCommand::Update { fields } => commands::account::update(ctx, fields).await,
        },
        SessionCommand::Activities { action } => match action {
            ActivityCommand::List {
                activity_type,
                page,
                per_page,
            } => commands::activities::list(ctx, activity_type, page, per_page).await,
            ActivityCommand::Get { id } => commands::activities::get(ctx, id).await,
            ActivityCommand::Create { fields } => commands::activities::create(ctx, fields).await,
            ActivityCommand::Update { id, fields } => {
                commands::activities::update(ctx, id, fields).await
            }
            ActivityCommand::Delete { id, yes } => {
                commands::activities::delete(ctx, id, yes).await
            }
        },
        SessionCommand::Stats => commands::activities::stats(ctx).await,
    }
}
