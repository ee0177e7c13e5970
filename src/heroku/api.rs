//! Platform API endpoint operations

use std::collections::HashMap;

use crate::error::Result;
use crate::heroku::models::{Addon, App, Collaborator, Domain, Formation};
use crate::heroku::HerokuClient;

impl HerokuClient {
    /// List all apps visible to the caller
    pub async fn list_apps(&self) -> Result<Vec<App>> {
        self.get_list("/apps", "apps").await
    }

    /// List apps owned by a team
    pub async fn list_apps_for_team(&self, team: &str) -> Result<Vec<App>> {
        let path = format!("/teams/{}/apps", urlencoding::encode(team));
        self.get_list(&path, &format!("apps for team '{}'", team))
            .await
    }

    /// Fetch a single app by name
    pub async fn get_app(&self, name: &str) -> Result<App> {
        let url = format!("{}/apps/{}", self.base_url(), urlencoding::encode(name));
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("app '{}'", name))
            .await
    }

    /// List an app's add-ons
    pub async fn list_addons(&self, app_name: &str) -> Result<Vec<Addon>> {
        let path = format!("/apps/{}/addons", urlencoding::encode(app_name));
        self.get_list(&path, &format!("addons for app '{}'", app_name))
            .await
    }

    /// List an app's collaborators
    pub async fn list_collaborators(&self, app_name: &str) -> Result<Vec<Collaborator>> {
        let path = format!("/apps/{}/collaborators", urlencoding::encode(app_name));
        self.get_list(&path, &format!("collaborators for app '{}'", app_name))
            .await
    }

    /// List a team's members
    pub async fn list_team_members(&self, team: &str) -> Result<Vec<Collaborator>> {
        let path = format!("/teams/{}/members", urlencoding::encode(team));
        self.get_list(&path, &format!("members of team '{}'", team))
            .await
    }

    /// Fetch an app's config variables
    pub async fn get_config_vars(&self, app_name: &str) -> Result<HashMap<String, String>> {
        let url = format!(
            "{}/apps/{}/config-vars",
            self.base_url(),
            urlencoding::encode(app_name)
        );
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("config vars for app '{}'", app_name))
            .await
    }

    /// List an app's domains
    pub async fn list_domains(&self, app_name: &str) -> Result<Vec<Domain>> {
        let path = format!("/apps/{}/domains", urlencoding::encode(app_name));
        self.get_list(&path, &format!("domains for app '{}'", app_name))
            .await
    }

    /// List an app's dyno formation
    pub async fn list_formation(&self, app_name: &str) -> Result<Vec<Formation>> {
        let path = format!("/apps/{}/formation", urlencoding::encode(app_name));
        self.get_list(&path, &format!("formation for app '{}'", app_name))
            .await
    }
}
