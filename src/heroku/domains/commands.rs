//! Domain report commands

use glob::Pattern;

use crate::cli::DomainMatchArgs;
use crate::error::{AuditError, Result};
use crate::heroku::aggregate::apps_in_scope;
use crate::heroku::fanout::{default_concurrency, fan_out_flatten};
use crate::heroku::models::Domain;
use crate::heroku::HerokuClient;
use crate::output::{render, sort_rows, Row};
use crate::ui::{finish_progress, progress_bar};

pub async fn run_matches(client: &HerokuClient, args: &DomainMatchArgs, quiet: bool) -> Result<()> {
    let pattern = Pattern::new(&args.pattern)
        .map_err(|e| AuditError::Config(format!("Invalid pattern '{}': {}", args.pattern, e)))?;

    let apps = apps_in_scope(client, args.team.as_deref()).await?;

    let bar = progress_bar(apps.len(), "Loading domains...", quiet);
    let domains = fan_out_flatten(apps, default_concurrency(), bar.as_ref(), |app| {
        async move { client.list_domains(&app.name).await }
    })
    .await;
    finish_progress(bar);

    let mut rows = matching_rows(domains?, &pattern);
    sort_rows(&mut rows, &["App"], false);
    render(&rows, args.format);
    Ok(())
}

fn matching_rows(domains: Vec<Domain>, pattern: &Pattern) -> Vec<Row> {
    domains
        .into_iter()
        .filter(|domain| pattern.matches(&domain.hostname))
        .map(|domain| {
            Row::new()
                .push("App", domain.app.name)
                .push("Domain", domain.hostname)
                .push("CNAME", domain.cname.unwrap_or_default())
        })
        .collect()
}
