// ABOUTME: Account commands for fittrack-cli
// ABOUTME: Registration, session status, profile display/update and local BMI calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use clap::Args;
use fittrack_client::constants::fields;
use fittrack_client::controllers::SessionProbe;
use fittrack_client::presentation::{
    calculate_bmi, classify_bmi, error_message, success_message, validate_email, validate_password,
};
use serde_json::{Map, Value};
use tracing::info;

use super::Context;
use crate::helpers::display::display_user;

/// Profile fields accepted by `profile update`
#[derive(Args)]
pub struct ProfileArgs {
    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Height in centimetres
    #[arg(long)]
    height: Option<u32>,
}

impl ProfileArgs {
    fn into_body(self) -> Map<String, Value> {
        let mut body = Map::new();
        if let Some(name) = self.name {
            body.insert(fields::NAME.to_owned(), Value::from(name));
        }
        if let Some(age) = self.age {
            body.insert(fields::AGE.to_owned(), Value::from(age));
        }
        if let Some(weight) = self.weight {
            body.insert(fields::WEIGHT.to_owned(), Value::from(weight));
        }
        if let Some(height) = self.height {
            body.insert(fields::HEIGHT.to_owned(), Value::from(height));
        }
        body
    }
}

/// Create an account after local validation
pub async fn register(ctx: &Context, name: &str, email: &str, password: &str) -> Result<()> {
    if !validate_email(email) {
        bail!("Invalid e-mail address: {email}");
    }
    let check = validate_password(password);
    if !check.is_valid() {
        bail!("Weak password: {check}");
    }

    info!(%email, "Registering account");
    ctx.auth.register(name, email, password).await?;
    println!("{}", success_message("Account created"));
    if let Some(user) = ctx.auth.current_user() {
        display_user(&user);
    }
    ctx.logout().await;
    Ok(())
}

/// Probe the backend for a session
pub async fn status(ctx: &Context) {
    match ctx.auth.initialize().await {
        SessionProbe::Authenticated(user) => {
            println!("{}", success_message("Session active"));
            display_user(&user);
        }
        SessionProbe::Anonymous(error) => {
            println!("Not logged in ({:?})", error.kind());
            println!("{}", error_message(&error));
        }
    }
}

/// Print the logged-in user
pub fn show(ctx: &Context) -> Result<()> {
    match ctx.auth.current_user() {
        Some(user) => {
            display_user(&user);
            Ok(())
        }
        None => bail!("Not logged in"),
    }
}

/// Send profile changes
pub async fn update(ctx: &Context, args: ProfileArgs) -> Result<()> {
    let body = args.into_body();
    if body.is_empty() {
        bail!("Nothing to update: pass at least one of --name, --age, --weight, --height");
    }
    ctx.auth.update_profile(&body).await?;
    println!("{}", success_message("Profile updated"));
    show(ctx)
}

/// Print a body-mass index and its band
pub fn bmi(weight: f64, height: f64) -> Result<()> {
    let Some(bmi) = calculate_bmi(weight, height) else {
        bail!("Weight and height must be positive");
    };
    println!("BMI: {bmi:.1} ({})", classify_bmi(bmi));
    Ok(())
}
