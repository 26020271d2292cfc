use anyhow::{Context, Result};
use fixture_core::{statistics::Summary, text, User, UserValidator, Users};
use tracing::{info, warn};

use crate::cli::Command;
use crate::telemetry::PerformanceTimer;

/// Execute a subcommand and return what should be printed on stdout
///
/// Only the `users` command touches `users`; the others are pure.
pub async fn execute(command: Command, users: &Users) -> Result<String> {
    match command {
        Command::Calc { op, a, b } => {
            let result = op.apply(a, b);
            info!(operation = %op, a, b, result, "Calculated");
            Ok(format!("{result}\n"))
        }
        Command::Stats { values } => {
            let summary = Summary::of(&values);
            Ok(format!(
                "sum: {}\npositive: {}\nnegative: {}\n",
                summary.sum,
                format_sequence(&summary.positive),
                format_sequence(&summary.negative)
            ))
        }
        Command::Palindrome { text } => Ok(format!("{}\n", text::is_palindrome(&text))),
        Command::Anagram { a, b } => Ok(format!("{}\n", text::is_anagram(&a, &b))),
        Command::Users { json } => fetch_users(users, json).await,
    }
}

async fn fetch_users(users: &Users, json: bool) -> Result<String> {
    let timer = PerformanceTimer::new("fetch_users");
    let response = users
        .all()
        .await
        .with_context(|| format!("Failed to fetch users from {}", users.url()))?;
    timer.finish();

    if let Err(e) = UserValidator::validate_users(&response.data) {
        warn!(error = %e, "Endpoint returned invalid user records");
    }

    if json {
        let mut rendered = serde_json::to_string_pretty(&response.data)
            .context("Failed to serialize users")?;
        rendered.push('\n');
        return Ok(rendered);
    }

    Ok(response.data.iter().map(format_user).collect())
}

/// `[2, 1, 3]` using each number's shortest display form
pub fn format_sequence(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn format_user(user: &User) -> String {
    format!("{}\t{}\t{}\n", user.id, user.full_name(), user.email)
}
