// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Renders users, activity pages and statistics through the presentation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack_client::constants::fields;
use fittrack_client::models::{Activity, ActivityStats, User};
use fittrack_client::pagination::ActivityPage;
use fittrack_client::presentation::{
    activity_type_label, calculate_bmi, classify_bmi, format_datetime, format_number,
    intensity_label,
};
use serde_json::Value;

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Print a user record
pub fn display_user(user: &User) {
    println!("{}", "=".repeat(50));
    println!("   Name: {}", user.name().unwrap_or("-"));
    println!("   Email: {}", user.email().unwrap_or("-"));
    println!("   Age: {}", field_text(user.get(fields::AGE)));
    println!("   Weight: {} kg", field_text(user.get(fields::WEIGHT)));
    println!("   Height: {} cm", field_text(user.get(fields::HEIGHT)));

    let weight = user.get(fields::WEIGHT).and_then(Value::as_f64);
    let height = user.get(fields::HEIGHT).and_then(Value::as_f64);
    if let Some(bmi) = weight.zip(height).and_then(|(w, h)| calculate_bmi(w, h)) {
        println!("   BMI: {bmi:.1} ({})", classify_bmi(bmi));
    }
}

/// Print a single activity
pub fn display_activity(activity: &Activity) {
    let id = activity.id().map_or_else(|| "?".to_owned(), |id| id.to_string());
    let kind = activity.raw_type().map_or_else(String::new, activity_type_label);
    let when = activity
        .get(fields::ACTIVITY_DATE)
        .and_then(Value::as_str)
        .map_or_else(String::new, format_datetime);
    let intensity = activity
        .get(fields::INTENSITY)
        .and_then(Value::as_str)
        .map_or_else(String::new, intensity_label);

    println!("#{id:<5} {when:<17} {kind:<22} {intensity}");
    println!(
        "       {} min  {} km  {} kcal",
        field_text(activity.get(fields::DURATION)),
        format_number(activity.get(fields::DISTANCE).and_then(Value::as_f64), 2),
        format_number(activity.get(fields::CALORIES).and_then(Value::as_f64), 0),
    );
    if let Some(notes) = activity.get(fields::NOTES).and_then(Value::as_str) {
        println!("       {notes}");
    }
}

/// Print a listing page with its position
pub fn display_page(page: &ActivityPage) {
    if page.activities.is_empty() {
        println!("No activities found");
    }
    for activity in &page.activities {
        display_activity(activity);
    }
    println!(
        "\nPage {} of {} ({} total){}",
        page.page.unwrap_or(1),
        page.total_pages.unwrap_or(1),
        page.total.unwrap_or(0),
        if page.has_next() { ", more with --page" } else { "" }
    );
}

/// Print summary statistics
pub fn display_stats(stats: &ActivityStats) {
    println!("{}", "=".repeat(50));
    println!("   Activities: {}", stats.total_activities);
    println!("   Duration: {} min", stats.total_duration_minutes);
    println!(
        "   Distance: {} km",
        format_number(Some(stats.total_distance_km), 2)
    );
    println!(
        "   Calories: {} kcal",
        format_number(Some(stats.total_calories), 0)
    );
    if let Some(favorite) = stats.favorite_activity.as_deref() {
        println!("   Favorite: {}", activity_type_label(favorite));
    }
    for (kind, count) in &stats.type_distribution {
        println!("     {:<22} {count}", activity_type_label(kind));
    }
}
