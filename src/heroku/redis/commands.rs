//! Redis report commands

use log::debug;

use super::api::RedisDetails;
use super::PLAN_PREFIX;
use crate::cli::{CountArgs, PlanArgs, PolicyArgs, VersionArgs};
use crate::error::Result;
use crate::heroku::aggregate::{apps_in_scope, get_addons};
use crate::heroku::fanout::{default_concurrency, fan_out};
use crate::heroku::models::{Addon, App};
use crate::heroku::HerokuClient;
use crate::output::{render, sort_rows, Row};
use crate::ui::{finish_progress, progress_bar};

fn redis_addons(addons: Vec<Addon>) -> Vec<Addon> {
    addons
        .into_iter()
        .filter(|addon| addon.plan.name.starts_with(PLAN_PREFIX))
        .collect()
}

async fn probe_details(
    client: &HerokuClient,
    addons: Vec<Addon>,
    quiet: bool,
) -> Result<Vec<(Addon, RedisDetails)>> {
    debug!("Probing {} Redis instances", addons.len());
    let bar = progress_bar(addons.len(), "Probing databases...", quiet);
    let pairs = fan_out(addons, default_concurrency(), bar.as_ref(), |addon| {
        async move { client.get_redis_details(&addon).await }
    })
    .await;
    finish_progress(bar);
    pairs
}

pub async fn run_major_version(
    client: &HerokuClient,
    args: &VersionArgs,
    quiet: bool,
) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = redis_addons(get_addons(client, &apps, quiet).await?);
    let pairs = probe_details(client, addons, quiet).await?;

    let mut rows = major_version_rows(pairs, args.target);
    sort_rows(&mut rows, &["Version"], false);
    render(&rows, args.format);
    Ok(())
}

fn major_version_rows(pairs: Vec<(Addon, RedisDetails)>, target: Option<u32>) -> Vec<Row> {
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
                .push("Max Memory Policy", details.maxmemory_policy)
        })
        .collect()
}

pub async fn run_plan(client: &HerokuClient, args: &PlanArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = redis_addons(get_addons(client, &apps, quiet).await?);

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
    sort_rows(&mut rows, &["Instances"], true);
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
                    .push("Instances", names.len())
                    .push("Addon Names", names.join(", ")),
            )
        })
        .collect()
}

pub async fn run_maxmemory_policy(
    client: &HerokuClient,
    args: &PolicyArgs,
    quiet: bool,
) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = redis_addons(get_addons(client, &apps, quiet).await?);
    let pairs = probe_details(client, addons, quiet).await?;

    let mut rows = maxmemory_policy_rows(pairs, args.policy.as_deref());
    sort_rows(&mut rows, &["Policy"], false);
    render(&rows, args.format);
    Ok(())
}

fn maxmemory_policy_rows(pairs: Vec<(Addon, RedisDetails)>, policy: Option<&str>) -> Vec<Row> {
    pairs
        .into_iter()
        .filter(|(_, details)| match policy {
            Some(policy) => details.maxmemory_policy == policy,
            None => true,
        })
        .map(|(addon, details)| {
            let plan = addon.plan_tier().to_string();
            Row::new()
                .push("App", addon.app.name)
                .push("Addon", addon.name)
                .push("Plan", plan)
                .push("Policy", details.maxmemory_policy)
        })
        .collect()
}
