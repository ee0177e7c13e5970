//! Postgres report commands

use log::debug;

use super::api::PostgresDetails;
use super::PLAN_PREFIX;
use crate::cli::{BackupScheduleArgs, CountArgs, PlanArgs, VersionArgs};
use crate::error::Result;
use crate::heroku::aggregate::{apps_in_scope, get_addons};
use crate::heroku::fanout::{default_concurrency, fan_out};
use crate::heroku::models::{Addon, App};
use crate::heroku::HerokuClient;
use crate::output::style::style_backup_schedules;
use crate::output::{render, sort_rows, Row};
use crate::ui::{finish_progress, progress_bar};

fn postgres_addons(addons: Vec<Addon>) -> Vec<Addon> {
    addons
        .into_iter()
        .filter(|addon| addon.plan.name.starts_with(PLAN_PREFIX))
        .collect()
}

pub async fn run_major_version(
    client: &HerokuClient,
    args: &VersionArgs,
    quiet: bool,
) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = postgres_addons(get_addons(client, &apps, quiet).await?);
    debug!("Probing {} Postgres databases", addons.len());

    let bar = progress_bar(addons.len(), "Probing databases...", quiet);
    let pairs = fan_out(addons, default_concurrency(), bar.as_ref(), |addon| {
        async move { client.get_postgres_details(&addon).await }
    })
    .await;
    finish_progress(bar);

    let mut rows = major_version_rows(pairs?, args.target);
    sort_rows(&mut rows, &["Version"], false);
    render(&rows, args.format);
    Ok(())
}

fn major_version_rows(pairs: Vec<(Addon, PostgresDetails)>, target: Option<u32>) -> Vec<Row> {
    pairs
        .into_iter()
        .filter(|(_, details)| match target {
            Some(target) => details.major_version() == target.to_string(),
            None => true,
        })
        .map(|(addon, details)| {
            let plan = addon.plan_tier().to_string();
            Row::new()
                .push("App", addon.app.name)
                .push("Addon", addon.name)
                .push("Plan", plan)
                .push("Version", details.version)
        })
        .collect()
}

pub async fn run_plan(client: &HerokuClient, args: &PlanArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = postgres_addons(get_addons(client, &apps, quiet).await?);

    let mut rows = plan_rows(addons, args.plan.as_deref());
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn plan_rows(addons: Vec<Addon>, plan: Option<&str>) -> Vec<Row> {
    addons
        .into_iter()
        .filter(|addon| match plan {
            Some(plan) => addon.plan_tier() == plan,
            None => true,
        })
        .map(|addon| {
            let plan = addon.plan_tier().to_string();
            let mut attachments = addon.config_vars;
            attachments.sort();
            Row::new()
                .push("App", addon.app.name)
                .push("Addon", addon.name)
                .push("Attachments", attachments.join(", "))
                .push("Plan", plan)
        })
        .collect()
}

pub async fn run_count(client: &HerokuClient, args: &CountArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;

    let bar = progress_bar(apps.len(), "Loading addons...", quiet);
    let pairs = fan_out(apps, default_concurrency(), bar.as_ref(), |app| {
        async move { client.list_addons(&app.name).await }
    })
    .await;
    finish_progress(bar);

    let mut rows = count_rows(pairs?, args.minimum);
    sort_rows(&mut rows, &["Databases"], true);
    render(&rows, args.format);
    Ok(())
}

fn count_rows(pairs: Vec<(App, Vec<Addon>)>, minimum: usize) -> Vec<Row> {
    pairs
        .into_iter()
        .filter_map(|(app, addons)| {
            let mut names: Vec<String> = addons
                .into_iter()
                .filter(|addon| addon.plan.name.starts_with(PLAN_PREFIX))
                .map(|addon| addon.name)
                .collect();
            if names.len() < minimum {
                return None;
            }
            names.sort();
            Some(
                Row::new()
                    .push("App", app.name)
                    .push("Databases", names.len())
                    .push("Addon Names", names.join(", ")),
            )
        })
        .collect()
}

pub async fn run_backup_schedule(
    client: &HerokuClient,
    args: &BackupScheduleArgs,
    quiet: bool,
) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = postgres_addons(get_addons(client, &apps, quiet).await?);
    debug!("Probing backup schedules for {} databases", addons.len());

    let bar = progress_bar(addons.len(), "Probing databases...", quiet);
    let pairs = fan_out(addons, default_concurrency(), bar.as_ref(), |addon| {
        async move { client.get_backup_schedules(&addon).await }
    })
    .await;
    finish_progress(bar);

    let mut rows = backup_schedule_rows(pairs?, args.missing_only);
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn backup_schedule_rows(pairs: Vec<(Addon, Vec<String>)>, missing_only: bool) -> Vec<Row> {
    pairs
        .into_iter()
        .filter(|(_, schedules)| !missing_only || schedules.is_empty())
        .map(|(addon, schedules)| {
            let plan = addon.plan_tier().to_string();
            Row::new()
                .push("App", addon.app.name)
                .push("Addon", addon.name)
                .push("Plan", plan)
                .push("Schedule", style_backup_schedules(&schedules))
        })
        .collect()
}
