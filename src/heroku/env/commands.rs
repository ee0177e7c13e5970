//! Config variable report commands

use std::collections::HashMap;

use glob::Pattern;

use crate::cli::{EnvContainsArgs, EnvValueArgs};
use crate::error::{AuditError, Result};
use crate::heroku::aggregate::apps_in_scope;
use crate::heroku::fanout::{default_concurrency, fan_out};
use crate::heroku::models::App;
use crate::heroku::HerokuClient;
use crate::output::{render, sort_rows, Emphasis, Row, Value};
use crate::ui::{finish_progress, progress_bar};

async fn fetch_config_vars(
    client: &HerokuClient,
    apps: Vec<App>,
    quiet: bool,
) -> Result<Vec<(App, HashMap<String, String>)>> {
    let bar = progress_bar(apps.len(), "Loading config...", quiet);
    let pairs = fan_out(apps, default_concurrency(), bar.as_ref(), |app| {
        async move { client.get_config_vars(&app.name).await }
    })
    .await;
    finish_progress(bar);
    pairs
}

pub async fn run_value_of(client: &HerokuClient, args: &EnvValueArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let pairs = fetch_config_vars(client, apps, quiet).await?;

    let mut rows = value_of_rows(pairs, &args.key, args.unset_only, args.set_only);
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn value_of_rows(
    pairs: Vec<(App, HashMap<String, String>)>,
    key: &str,
    unset_only: bool,
    set_only: bool,
) -> Vec<Row> {
    pairs
        .into_iter()
        .filter_map(|(app, vars)| {
            let value = vars.get(key);
            if (unset_only && value.is_some()) || (set_only && value.is_none()) {
                return None;
            }
            let cell = match value {
                Some(value) => Value::text(value),
                None => Value::styled("UNSET", Emphasis::Red),
            };
            Some(Row::new().push("App", app.name).push("Value", cell))
        })
        .collect()
}

pub async fn run_contains(client: &HerokuClient, args: &EnvContainsArgs, quiet: bool) -> Result<()> {
    let pattern = Pattern::new(&args.pattern)
        .map_err(|e| AuditError::Config(format!("Invalid pattern '{}': {}", args.pattern, e)))?;

    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let pairs = fetch_config_vars(client, apps, quiet).await?;

    let mut rows = contains_rows(pairs, &pattern);
    sort_rows(&mut rows, &["Match Count", "App"], false);
    render(&rows, args.format);
    Ok(())
}

fn contains_rows(pairs: Vec<(App, HashMap<String, String>)>, pattern: &Pattern) -> Vec<Row> {
    pairs
        .into_iter()
        .filter_map(|(app, vars)| {
            let mut matches: Vec<String> = vars
                .into_iter()
                .filter(|(_, value)| pattern.matches(value))
                .map(|(key, _)| key)
                .collect();
            if matches.is_empty() {
                return None;
            }
            matches.sort();
            Some(
                Row::new()
                    .push("App", app.name)
                    .push("Match Count", matches.len())
                    .push("Matches", matches.join(", ")),
            )
        })
        .collect()
}
