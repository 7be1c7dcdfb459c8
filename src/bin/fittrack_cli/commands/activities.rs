// ABOUTME: Activity commands for fittrack-cli
// ABOUTME: List, get, create, update and delete activities plus summary statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Context as _, Result};
use clap::Args;
use fittrack_client::constants::fields;
use fittrack_client::models::{ActivityType, Intensity};
use fittrack_client::pagination::ActivityFilters;
use fittrack_client::presentation::{confirmation_prompt, is_confirmed, success_message};
use serde_json::{Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::Context;
use crate::helpers::display::{display_activity, display_page, display_stats};

/// Activity fields accepted by `create` and `update`
#[derive(Args)]
pub struct ActivityArgs {
    /// Activity type
    #[arg(long = "type")]
    activity_type: Option<ActivityType>,

    /// When it happened (ISO-8601)
    #[arg(long)]
    date: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    duration: Option<u32>,

    /// Distance in kilometres
    #[arg(long)]
    distance: Option<f64>,

    /// Intensity (baixa, moderada, alta)
    #[arg(long)]
    intensity: Option<Intensity>,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,
}

impl ActivityArgs {
    fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        if let Some(activity_type) = self.activity_type {
            body.insert(fields::ACTIVITY_TYPE.to_owned(), Value::from(activity_type.as_str()));
        }
        if let Some(date) = self.date {
            body.insert(fields::ACTIVITY_DATE.to_owned(), Value::from(date));
        }
        if let Some(duration) = self.duration {
            body.insert(fields::DURATION.to_owned(), Value::from(duration));
        }
        if let Some(distance) = self.distance {
            body.insert(fields::DISTANCE.to_owned(), Value::from(distance));
        }
        if let Some(intensity) = self.intensity {
            body.insert(fields::INTENSITY.to_owned(), Value::from(intensity.as_str()));
        }
        if let Some(notes) = self.notes {
            body.insert(fields::NOTES.to_owned(), Value::from(notes));
        }
        body
    }
}

/// Print one listing page
pub async fn list(
    ctx: &Context,
    activity_type: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> Result<()> {
    let filters = ActivityFilters {
        activity_type,
        page,
        per_page,
    };
    let page = ctx.activities.list(&filters).await?;
    display_page(&page);
    Ok(())
}

/// Print one activity
pub async fn get(ctx: &Context, id: i64) -> Result<()> {
    let activity = ctx.activities.get(id).await?;
    display_activity(&activity);
    Ok(())
}

/// Record an activity
pub async fn create(ctx: &Context, args: ActivityArgs) -> Result<()> {
    let body = args.into_body();
    if !body.contains_key(fields::ACTIVITY_TYPE) || !body.contains_key(fields::ACTIVITY_DATE) {
        bail!("--type and --date are required");
    }
    ctx.activities.create(&body).await?;
    println!("{}", success_message("Activity recorded"));
    print_refreshed_stats(ctx);
    Ok(())
}

/// Change an activity
pub async fn update(ctx: &Context, id: i64, args: ActivityArgs) -> Result<()> {
    let body = args.into_body();
    if body.is_empty() {
        bail!("Nothing to update");
    }
    ctx.activities.update(id, &body).await?;
    println!("{}", success_message("Activity updated"));
    print_refreshed_stats(ctx);
    Ok(())
}

/// Delete an activity, asking first unless `yes` is set
pub async fn delete(ctx: &Context, id: i64, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete activity {id}? [y/N] ")).await? {
        println!("Cancelled");
        return Ok(());
    }
    ctx.activities.delete(id).await?;
    println!("{}", success_message("Activity deleted"));
    print_refreshed_stats(ctx);
    Ok(())
}

/// Print summary statistics
pub async fn stats(ctx: &Context) -> Result<()> {
    let stats = ctx.activities.load_statistics().await?;
    display_stats(&stats);
    Ok(())
}

async fn confirm(message: &str) -> Result<bool> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(confirmation_prompt(message).as_bytes()).await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await
        .context("Failed to read confirmation")?;
    Ok(is_confirmed(&answer))
}

fn print_refreshed_stats(ctx: &Context) {
    if let Some(stats) = ctx.activities.statistics() {
        display_stats(&stats);
    }
}
