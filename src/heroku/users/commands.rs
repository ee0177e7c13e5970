//! User report commands

use crate::cli::UserAccessArgs;
use crate::error::Result;
use crate::heroku::aggregate::apps_in_scope;
use crate::heroku::fanout::{default_concurrency, fan_out};
use crate::heroku::models::{App, Collaborator};
use crate::heroku::HerokuClient;
use crate::output::{render, sort_rows, Row};
use crate::ui::{finish_progress, progress_bar};

pub async fn run_access(client: &HerokuClient, args: &UserAccessArgs, quiet: bool) -> Result<()> {
    let apps = apps_in_scope(client, args.team.as_deref()).await?;

    let bar = progress_bar(apps.len(), "Loading collaborators...", quiet);
    let pairs = fan_out(apps, default_concurrency(), bar.as_ref(), |app| {
        async move { client.list_collaborators(&app.name).await }
    })
    .await;
    finish_progress(bar);

    let mut rows = access_rows(pairs?, &args.email);
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn access_rows(pairs: Vec<(App, Vec<Collaborator>)>, email: &str) -> Vec<Row> {
    pairs
        .into_iter()
        .filter_map(|(app, collaborators)| {
            collaborators
                .into_iter()
                .find(|entry| entry.user.email == email)
                .map(|entry| {
                    Row::new()
                        .push("App", app.name)
                        .push("Date Given", entry.granted_on())
                })
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

    fn collaborator(email: &str, created_at: &str) -> Collaborator {
        serde_json::from_value(serde_json::json!({
            "user": {"email": email},
            "created_at": created_at
        }))
        .unwrap()
    }

    #[test]
    fn test_access_rows_matches_email() {
        let pairs = vec![
            (
                app("api"),
                vec![
                    collaborator("dev@example.com", "2023-04-01T12:00:00Z"),
                    collaborator("admin@example.com", "2021-01-01T00:00:00Z"),
                ],
            ),
            (
                app("jobs"),
                vec![collaborator("admin@example.com", "2022-06-15T08:00:00Z")],
            ),
        ];

        let rows = access_rows(pairs, "dev@example.com");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("App").unwrap().display(), "api");
        assert_eq!(rows[0].get("Date Given").unwrap().display(), "2023-04-01");
    }

    #[test]
    fn test_access_rows_no_match() {
        let pairs = vec![(app("api"), vec![])];
        assert!(access_rows(pairs, "ghost@example.com").is_empty());
    }
}
