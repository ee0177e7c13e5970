//! App report commands

use std::collections::BTreeMap;

use crate::cli::{AppAccessArgs, AppDomainsArgs, AppsAddonArgs, FormationArgs};
use crate::error::Result;
use crate::heroku::aggregate::{apps_in_scope, get_addons, get_team_members};
use crate::heroku::fanout::{default_concurrency, fan_out};
use crate::heroku::models::{Addon, App, Collaborator, Domain, Formation};
use crate::heroku::HerokuClient;
use crate::output::style::{
    style_acm_status, style_formation_quantity, style_formation_size, style_hostname,
    style_user_role,
};
use crate::output::{render, sort_rows, Emphasis, Row, Value};
use crate::ui::{finish_progress, progress_bar};

pub async fn run_formation(client: &HerokuClient, args: &FormationArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;

    let bar = progress_bar(apps.len(), "Loading formation...", quiet);
    let pairs = fan_out(apps, default_concurrency(), bar.as_ref(), |app| {
        async move { client.list_formation(&app.name).await }
    })
    .await;
    finish_progress(bar);

    let mut rows = formation_rows(pairs?, &args.process);
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn formation_rows(pairs: Vec<(App, Vec<Formation>)>, process: &str) -> Vec<Row> {
    pairs
        .into_iter()
        .filter_map(|(app, formation)| {
            formation
                .into_iter()
                .find(|entry| entry.process_type == process)
                .map(|entry| {
                    Row::new()
                        .push("App", app.name)
                        .push("Size", style_formation_size(&entry.size))
                        .push("Quantity", style_formation_quantity(entry.quantity))
                        .push("Command", Value::styled(entry.command, Emphasis::Green))
                })
        })
        .collect()
}

pub async fn run_addon(client: &HerokuClient, args: &AppsAddonArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;
    let addons = get_addons(client, &apps, quiet).await?;

    let mut rows = addon_rows(addons, &args.addon);
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn addon_rows(addons: Vec<Addon>, prefix: &str) -> Vec<Row> {
    addons
        .into_iter()
        .filter(|addon| addon.plan.name.starts_with(prefix))
        .map(|addon| {
            let plan = addon.plan_tier().to_string();
            Row::new()
                .push("App", addon.app.name)
                .push("Addon", addon.name)
                .push("Plan", plan)
        })
        .collect()
}

pub async fn run_access(client: &HerokuClient, args: &AppAccessArgs, _quiet: bool) -> Result<()> {
    let app = client.get_app(&args.app).await?;
    let collaborators = client.list_collaborators(&app.name).await?;
    let team_members = match &app.team {
        Some(team) => get_team_members(client, &team.name).await?,
        None => Vec::new(),
    };

    let mut rows = access_rows(collaborators, team_members);
    sort_rows(&mut rows, &["User"], false);
    render(&rows, args.format);
    Ok(())
}

fn access_rows(collaborators: Vec<Collaborator>, team_members: Vec<Collaborator>) -> Vec<Row> {
    // One row per user; an explicit per-app grant wins over team membership
    let mut by_email: BTreeMap<String, Collaborator> = BTreeMap::new();
    for entry in team_members.into_iter().chain(collaborators) {
        by_email.insert(entry.user.email.clone(), entry);
    }

    by_email
        .into_values()
        .map(|entry| {
            let role = style_user_role(entry.role_name());
            let granted = entry.granted_on();
            Row::new()
                .push("User", entry.user.email)
                .push("Role", role)
                .push("Date Given", granted)
        })
        .collect()
}

pub async fn run_domains(client: &HerokuClient, args: &AppDomainsArgs, _quiet: bool) -> Result<()> {
    let app = client.get_app(&args.app).await?;
    let domains = client.list_domains(&app.name).await?;

    let mut rows = domain_rows(domains);
    sort_rows(&mut rows, &["Domain"], false);
    render(&rows, args.format);
    Ok(())
}

fn domain_rows(domains: Vec<Domain>) -> Vec<Row> {
    domains
        .into_iter()
        .map(|domain| {
            let hostname = style_hostname(&domain.hostname);
            let acm = style_acm_status(domain.acm_status.as_deref().unwrap_or(""));
            Row::new()
                .push("Domain", hostname)
                .push("CNAME", domain.cname.unwrap_or_default())
                .push("ACM Status", acm)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> App {
        serde_json::from_value(serde_json::json!({
            "id": format!("id-{}", name),
            "name": name
        }))
        .unwrap()
    }

    fn formation(process: &str, quantity: i64, size: &str) -> Formation {
        serde_json::from_value(serde_json::json!({
            "type": process,
            "quantity": quantity,
            "size": size,
            "command": format!("run {}", process)
        }))
        .unwrap()
    }

    fn collaborator(email: &str, role: Option<&str>, created_at: &str) -> Collaborator {
        serde_json::from_value(serde_json::json!({
            "user": {"email": email},
            "role": role,
            "created_at": created_at
        }))
        .unwrap()
    }

    #[test]
    fn test_formation_rows_selects_process_type() {
        let pairs = vec![
            (
                app("api"),
                vec![formation("web", 2, "Standard-1X"), formation("worker", 1, "Basic")],
            ),
            (app("jobs"), vec![formation("worker", 3, "Standard-2X")]),
        ];

        let rows = formation_rows(pairs, "web");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("App").unwrap().display(), "api");
        assert_eq!(rows[0].get("Quantity").unwrap().display(), "2");
    }

    #[test]
    fn test_formation_rows_zero_quantity_reads_stopped() {
        let pairs = vec![(app("api"), vec![formation("web", 0, "Basic")])];
        let rows = formation_rows(pairs, "web");
        assert_eq!(rows[0].get("Quantity").unwrap().display(), "Stopped");
    }

    #[test]
    fn test_addon_rows_prefix_filter() {
        let addons: Vec<Addon> = serde_json::from_value(serde_json::json!([
            {
                "id": "d1",
                "name": "postgresql-sushi-1234",
                "app": {"id": "id-api", "name": "api"},
                "plan": {"name": "heroku-postgresql:standard-0"}
            },
            {
                "id": "p1",
                "name": "papertrail-curved-5678",
                "app": {"id": "id-api", "name": "api"},
                "plan": {"name": "papertrail:choklad"}
            }
        ]))
        .unwrap();

        let rows = addon_rows(addons, "papertrail");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Addon").unwrap().display(), "papertrail-curved-5678");
    }

    #[test]
    fn test_addon_rows_plan_column_shows_tier_only() {
        let addons: Vec<Addon> = serde_json::from_value(serde_json::json!([
            {
                "id": "d1",
                "name": "postgresql-sushi-1234",
                "app": {"id": "id-api", "name": "api"},
                "plan": {"name": "heroku-postgresql:standard-0"}
            },
            {
                "id": "p1",
                "name": "papertrail-curved-5678",
                "app": {"id": "id-api", "name": "api"},
                "plan": {"name": "papertrail:choklad"}
            }
        ]))
        .unwrap();

        let rows = addon_rows(addons, "");
        assert_eq!(rows[0].get("Plan").unwrap().display(), "standard-0");
        assert_eq!(rows[1].get("Plan").unwrap().display(), "choklad");
    }

    #[test]
    fn test_access_rows_union_dedupes_by_email() {
        let collaborators = vec![collaborator(
            "dev@example.com",
            Some("collaborator"),
            "2023-06-01T00:00:00Z",
        )];
        let team_members = vec![
            collaborator("dev@example.com", Some("member"), "2022-01-01T00:00:00Z"),
            collaborator("admin@example.com", Some("admin"), "2021-01-01T00:00:00Z"),
        ];

        let rows = access_rows(collaborators, team_members);
        assert_eq!(rows.len(), 2);

        let dev = rows
            .iter()
            .find(|r| r.get("User").unwrap().display() == "dev@example.com")
            .unwrap();
        // The explicit per-app grant, not the team role
        assert_eq!(dev.get("Role").unwrap().display(), "collaborator");
        assert_eq!(dev.get("Date Given").unwrap().display(), "2023-06-01");
    }

    #[test]
    fn test_domain_rows_defaults_for_missing_fields() {
        let domains: Vec<Domain> = serde_json::from_value(serde_json::json!([
            {
                "hostname": "www.example.com",
                "cname": null,
                "acm_status": null,
                "app": {"id": "id-api", "name": "api"}
            }
        ]))
        .unwrap();

        let rows = domain_rows(domains);
        assert_eq!(rows[0].get("CNAME").unwrap().display(), "");
        assert_eq!(rows[0].get("ACM Status").unwrap().display(), "");
    }
}
