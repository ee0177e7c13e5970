//! Report-shaped queries built on the platform client and the fan-out

use log::debug;

use crate::error::Result;
use crate::heroku::fanout::{default_concurrency, fan_out_flatten};
use crate::heroku::models::{Addon, App, Collaborator};
use crate::heroku::HerokuClient;
use crate::ui::{finish_progress, progress_bar};

/// Resolve the working set of apps: everything visible, or a team's apps
pub async fn apps_in_scope(client: &HerokuClient, team: Option<&str>) -> Result<Vec<App>> {
    match team {
        Some(team) => client.list_apps_for_team(team).await,
        None => client.list_apps().await,
    }
}

/// Progress label for the add-on aggregation phase
pub(crate) const ADDONS_PROGRESS_LABEL: &str = "Fetching addons...";

/// Union of every app's add-ons, fetched concurrently
pub async fn get_addons(
    client: &HerokuClient,
    apps: &[App],
    quiet: bool,
) -> Result<Vec<Addon>> {
    let bar = progress_bar(apps.len(), ADDONS_PROGRESS_LABEL, quiet);
    let addons = fan_out_flatten(
        apps.to_vec(),
        default_concurrency(),
        bar.as_ref(),
        |app| async move { client.list_addons(&app.name).await },
    )
    .await;
    finish_progress(bar);

    let addons = addons?;
    debug!("Collected {} addons across {} apps", addons.len(), apps.len());
    Ok(addons)
}

/// Team members with organization-level roles
///
/// Members whose role is exactly `collaborator` (or absent) only hold
/// implicit per-app access and are excluded.
pub async fn get_team_members(client: &HerokuClient, team: &str) -> Result<Vec<Collaborator>> {
    let members = client.list_team_members(team).await?;
    Ok(members
        .into_iter()
        .filter(|m| matches!(m.role.as_deref(), Some(role) if role != "collaborator"))
        .collect())
}
