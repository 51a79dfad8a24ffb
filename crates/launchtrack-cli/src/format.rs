//! Human-readable rendering of launch data for the terminal.

use launchtrack_core::cache::CacheSummary;
use launchtrack_core::models::{Favorite, Launch, Payload, RocketStats};

/// Format a date string to a more readable format
pub fn format_date(date: &str) -> String {
    // Try to parse ISO format and convert to readable
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y").to_string()
    } else if date.len() >= 10 {
        // Try to parse YYYY-MM-DD format
        date.chars().take(10).collect()
    } else {
        date.to_string()
    }
}

/// Group digits in thousands: 549054 -> "549,054"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Mass in whole kilograms, or "unknown"
pub fn format_mass(kg: Option<f64>) -> String {
    match kg {
        Some(kg) if kg.is_finite() && kg >= 0.0 => format!("{} kg", format_thousands(kg.round() as u64)),
        _ => "unknown".to_string(),
    }
}

/// One numbered line of a launch search result.
/// `rocket_name` replaces the rocket id when the catalog has been fetched.
pub fn format_launch_line(index: usize, launch: &Launch, rocket_name: Option<&str>) -> String {
    format!(
        "{}. Mission: {}, Date: {}, Rocket: {}, Site: {}, Id: {}",
        index,
        launch.mission_name,
        format_date(&launch.date_utc),
        rocket_name.unwrap_or(&launch.rocket),
        launch.launch_site.as_deref().unwrap_or("unknown"),
        launch.id
    )
}

pub fn format_favorite(favorite: &Favorite) -> String {
    format!(
        "Mission: {} - Added on {}, id: {}",
        favorite.launch.mission_name,
        favorite.added_at_display(),
        favorite.launch.id
    )
}

pub fn format_payload(payload: &Payload, mission_name: &str) -> String {
    let or_unknown = |value: &Option<String>| value.as_deref().unwrap_or("unknown").to_string();
    [
        format!("Payload Details for Mission: {}", mission_name),
        format!("Payload Name: {}", or_unknown(&payload.name)),
        format!("Type: {}", or_unknown(&payload.payload_type)),
        format!("Mass: {}", format_mass(payload.mass_kg)),
        format!("Orbit: {}", or_unknown(&payload.orbit)),
    ]
    .join("\n")
}

pub fn format_rocket_stats(stats: &RocketStats) -> String {
    let rocket = &stats.rocket;
    let mut lines = vec![
        format!("Rocket Statistics for {}", rocket.name),
        format!("Stages: {}", rocket.stages),
        format!("Boosters: {}", rocket.boosters),
        format!("Mass: {}", format_mass(Some(rocket.mass.kg))),
    ];
    if let Some(leo) = rocket.leo_capacity() {
        lines.push(format!("Payload to LEO: {} kg", format_thousands(leo.kg)));
    }
    lines.push(format!("Total Launches: {}", stats.total_launches));
    lines.push(format!("Successful Launches: {}", stats.successful_launches));
    lines.push(format!("Failed Launches: {}", stats.failed_launches));
    if stats.unknown_outcome > 0 {
        lines.push(format!("Unknown Outcome: {}", stats.unknown_outcome));
    }
    lines.push(format!("Success Rate: {}%", stats.success_rate));
    lines.join("\n")
}

pub fn format_cache_summary(summary: &CacheSummary) -> String {
    if summary.is_empty() {
        return "Nothing cached yet.".to_string();
    }

    let mut lines = Vec::new();
    for year in &summary.years {
        lines.push(format!("Launches {}: {} (cached {})", year.year, year.launches, year.age));
    }
    lines.push(format!("Payload lookups: {}", summary.payload_entries));
    match (summary.rockets, &summary.rockets_age) {
        (Some(count), Some(age)) => lines.push(format!("Rockets: {} (cached {})", count, age)),
        _ => lines.push("Rockets: not fetched".to_string()),
    }
    lines.join("\n")
}
