// client.rs

use std::collections::HashMap;
use log::{debug, error};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;

use crate::constants::*;
use crate::error::CoolifyError;
use crate::models::*;

type Result<T> = std::result::Result<T, CoolifyError>;

/// Main client for interacting with a Coolify instance
///
/// # Examples
///
/// ```no_run
/// use coolify::{Client, ClientConfig};
///
/// # async fn run() -> Result<(), coolify::CoolifyError> {
/// let client = Client::new(ClientConfig::new("https://coolify.example.com", "token"))?;
/// let apps = client.list_applications().await?;
/// println!("{} applications", apps.data.len());
/// # Ok(())
/// # }
/// ```
pub struct Client {
    client: ReqwestClient,
    config: ClientConfig,
}

impl Client {
    //
    // Client initialization
    //

    /// Create a new Coolify client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { client: ReqwestClient::builder().build()?, config })
    }

    /// Core HTTP request wrapper
    async fn request<T: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
        query: Option<HashMap<String, String>>,
        should_throw: bool,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}{}", self.config.api_url.trim_end_matches('/'), API_BASE_PATH, path);
        debug!("{} {}", method, url);

        let mut req = self.client.request(method, &url);

        let mut headers = HashMap::new();
        self.add_common_headers(&mut headers);
        for (k, v) in headers {
            req = req.header(k, v);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        if let Some(query) = query {
            req = req.query(&query);
        }

        let resp = req.send().await?;

        if should_throw && !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await?;
            error!("HTTP {} error: {}", status, text);
            return Err(CoolifyError::RequestFailed { status, message: Self::error_message(text) });
        }

        Ok(resp)
    }

    /// Bearer token, team scope and user agent sent with every request
    fn add_common_headers(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            HTTP_HEADER_AUTHORIZATION.to_string(),
            format!("{}{}", HTTP_HEADER_AUTH_BEARER, self.config.api_token),
        );
        headers.insert(HTTP_HEADER_KEY_USER_AGENT.to_string(), HTTP_USER_AGENT.to_string());

        if let Some(team_id) = &self.config.team_id {
            headers.insert(HTTP_HEADER_TEAM_ID.to_string(), team_id.clone());
        }
    }

    /// Pull the envelope message out of an error body, falling back to the raw text
    fn error_message(text: String) -> String {
        serde_json::from_str::<ApiResponse<Value>>(&text)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or(text)
    }

    //
    // Application Management
    //

    /// List all applications visible to the configured token
    pub async fn list_applications(&self) -> Result<ListResponse<Application>> {
        let resp = self.request(Method::GET, "/applications", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get application details
    pub async fn get_application(&self, uuid: &str) -> Result<Application> {
        let resp = self
            .request(Method::GET, &format!("/applications/{}", uuid), None::<&Value>, None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Create an application backed by a private GitHub App installation
    pub async fn create_private_github_app_application(
        &self,
        request: &CreatePrivateGithubAppApplicationRequest,
    ) -> Result<CreatePrivateGithubAppApplicationResponse> {
        let resp = self
            .request(Method::POST, "/applications/private-github-app", Some(request), None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Update application settings (the body is passed through to the API as-is)
    pub async fn update_application(&self, uuid: &str, body: Value) -> Result<Value> {
        let resp = self
            .request(Method::PATCH, &format!("/applications/{}", uuid), Some(&body), None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete an application
    pub async fn delete_application(&self, uuid: &str) -> Result<bool> {
        let resp = self
            .request(Method::DELETE, &format!("/applications/{}", uuid), None::<&Value>, None, false)
            .await?;

        Ok(resp.status() == StatusCode::OK)
    }

    /// Start an application
    pub async fn start_application(&self, uuid: &str) -> Result<Value> {
        let resp = self
            .request(Method::GET, &format!("/applications/{}/start", uuid), None::<&Value>, None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Stop an application
    pub async fn stop_application(&self, uuid: &str) -> Result<Value> {
        let resp = self
            .request(Method::GET, &format!("/applications/{}/stop", uuid), None::<&Value>, None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Restart an application
    pub async fn restart_application(&self, uuid: &str) -> Result<Value> {
        let resp = self
            .request(Method::GET, &format!("/applications/{}/restart", uuid), None::<&Value>, None, true)
            .await?;
        Ok(resp.json().await?)
    }

    //
    // Environment Variable Management
    //

    /// List environment variables of an application
    pub async fn list_application_envs(&self, uuid: &str) -> Result<ListResponse<EnvironmentVariable>> {
        let resp = self
            .request(Method::GET, &format!("/applications/{}/envs", uuid), None::<&Value>, None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Create or update an environment variable on an application
    pub async fn set_application_env(&self, uuid: &str, body: Value) -> Result<Value> {
        let resp = self
            .request(Method::POST, &format!("/applications/{}/envs", uuid), Some(&body), None, true)
            .await?;
        Ok(resp.json().await?)
    }

    /// Delete an environment variable from an application
    pub async fn delete_application_env(&self, uuid: &str, env_uuid: &str) -> Result<()> {
        self.request(
            Method::DELETE,
            &format!("/applications/{}/envs/{}", uuid, env_uuid),
            None::<&Value>,
            None,
            true,
        )
        .await?;
        Ok(())
    }

    //
    // Deployment Operations
    //

    /// Queue a deployment for a resource identified by uuid
    pub async fn deploy(&self, uuid: &str, force: bool) -> Result<DeployResponse> {
        let mut query = HashMap::new();
        query.insert(HTTP_QUERY_KEY_UUID.to_string(), uuid.to_string());
        query.insert(HTTP_QUERY_KEY_FORCE.to_string(), force.to_string());

        let resp = self.request(Method::GET, "/deploy", None::<&Value>, Some(query), true).await?;
        Ok(resp.json().await?)
    }

    /// List currently running deployments
    pub async fn list_deployments(&self) -> Result<ListResponse<Deployment>> {
        let resp = self.request(Method::GET, "/deployments", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get deployment details
    pub async fn get_deployment(&self, uuid: &str) -> Result<Deployment> {
        let resp = self
            .request(Method::GET, &format!("/deployments/{}", uuid), None::<&Value>, None, true)
            .await?;
        Ok(resp.json().await?)
    }

    //
    // Server Management
    //

    /// List all servers
    pub async fn list_servers(&self) -> Result<ListResponse<Server>> {
        let resp = self.request(Method::GET, "/servers", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get server details
    pub async fn get_server(&self, uuid: &str) -> Result<Server> {
        let resp =
            self.request(Method::GET, &format!("/servers/{}", uuid), None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Register a new server (the body is passed through to the API as-is)
    pub async fn create_server(&self, body: Value) -> Result<Value> {
        let resp = self.request(Method::POST, "/servers", Some(&body), None, true).await?;
        Ok(resp.json().await?)
    }

    //
    // Project Management
    //

    /// List all projects
    pub async fn list_projects(&self) -> Result<ListResponse<Project>> {
        let resp = self.request(Method::GET, "/projects", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get project details
    pub async fn get_project(&self, uuid: &str) -> Result<Project> {
        let resp =
            self.request(Method::GET, &format!("/projects/{}", uuid), None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Create a new project (the body is passed through to the API as-is)
    pub async fn create_project(&self, body: Value) -> Result<Value> {
        let resp = self.request(Method::POST, "/projects", Some(&body), None, true).await?;
        Ok(resp.json().await?)
    }

    /// Delete a project
    pub async fn delete_project(&self, uuid: &str) -> Result<bool> {
        let resp = self
            .request(Method::DELETE, &format!("/projects/{}", uuid), None::<&Value>, None, false)
            .await?;

        Ok(resp.status() == StatusCode::OK)
    }

    //
    // Database Management
    //

    /// List all databases
    pub async fn list_databases(&self) -> Result<ListResponse<Database>> {
        let resp = self.request(Method::GET, "/databases", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get database details
    pub async fn get_database(&self, uuid: &str) -> Result<Database> {
        let resp =
            self.request(Method::GET, &format!("/databases/{}", uuid), None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Create a database of the given kind, e.g. `postgresql` or `redis`
    pub async fn create_database(&self, kind: &str, body: Value) -> Result<Value> {
        let resp = self.request(Method::POST, &format!("/databases/{}", kind), Some(&body), None, true).await?;
        Ok(resp.json().await?)
    }

    /// Delete a database
    pub async fn delete_database(&self, uuid: &str) -> Result<bool> {
        let resp = self
            .request(Method::DELETE, &format!("/databases/{}", uuid), None::<&Value>, None, false)
            .await?;

        Ok(resp.status() == StatusCode::OK)
    }

    //
    // Service Management
    //

    /// List all services
    pub async fn list_services(&self) -> Result<ListResponse<Service>> {
        let resp = self.request(Method::GET, "/services", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get service details
    pub async fn get_service(&self, uuid: &str) -> Result<Service> {
        let resp =
            self.request(Method::GET, &format!("/services/{}", uuid), None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Create a one-click service (the body is passed through to the API as-is)
    pub async fn create_service(&self, body: Value) -> Result<Value> {
        let resp = self.request(Method::POST, "/services", Some(&body), None, true).await?;
        Ok(resp.json().await?)
    }

    /// Delete a service
    pub async fn delete_service(&self, uuid: &str) -> Result<bool> {
        let resp = self
            .request(Method::DELETE, &format!("/services/{}", uuid), None::<&Value>, None, false)
            .await?;

        Ok(resp.status() == StatusCode::OK)
    }

    //
    // Team Management
    //

    /// List all teams the token has access to
    pub async fn list_teams(&self) -> Result<ListResponse<Team>> {
        let resp = self.request(Method::GET, "/teams", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get team details
    pub async fn get_team(&self, id: &str) -> Result<Team> {
        let resp = self.request(Method::GET, &format!("/teams/{}", id), None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    /// Get the team the token is currently scoped to
    pub async fn get_current_team(&self) -> Result<Team> {
        let resp = self.request(Method::GET, "/teams/current", None::<&Value>, None, true).await?;
        Ok(resp.json().await?)
    }

    //
    // System
    //

    /// Get the Coolify version string
    pub async fn version(&self) -> Result<String> {
        let resp = self.request(Method::GET, "/version", None::<&Value>, None, true).await?;
        Ok(resp.text().await?.trim_matches('"').to_string())
    }

    /// Check whether the instance reports itself healthy
    pub async fn healthcheck(&self) -> Result<bool> {
        let resp = self.request(Method::GET, "/health", None::<&Value>, None, false).await?;
        if resp.status() != StatusCode::OK {
            return Ok(false);
        }

        let text = resp.text().await?;
        Ok(text.trim() == REST_TEXT_HEALTH_OK)
    }
}
