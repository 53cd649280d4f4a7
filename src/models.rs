// models.rs
use serde::{Deserialize, Serialize};

use crate::error::CoolifyError;

/// Connection settings for a Coolify instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_token: String,
    pub team_id: Option<String>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self { api_url: api_url.into(), api_token: api_token.into(), team_id: None }
    }

    /// Check the configuration before any network call is attempted
    pub fn validate(&self) -> Result<(), CoolifyError> {
        if self.api_token.trim().is_empty() {
            return Err(CoolifyError::ConfigurationError("API token must not be empty".to_string()));
        }
        url::Url::parse(&self.api_url)?;
        Ok(())
    }
}

/// Generic envelope around single-resource responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub success: Option<bool>,
}

/// Envelope around paginated collection responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub links: Option<PaginationLinks>,
    pub meta: Option<PaginationMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub from: Option<u32>,
    pub last_page: u32,
    pub per_page: u32,
    pub to: Option<u32>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub uuid: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub fqdn: Option<String>,
    pub git_repository: Option<String>,
    pub git_branch: Option<String>,
    pub build_pack: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    pub uuid: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub database_type: String,
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub uuid: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub ip: String,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub private_key_id: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub uuid: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub application_id: String,
    pub status: String,
    pub commit_sha: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub uuid: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub docker_compose: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub personal_team: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub uuid: Option<String>,
    pub key: String,
    pub value: Option<String>,
    pub is_build_time: Option<bool>,
    pub is_preview: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Request body for creating an application backed by a private GitHub App
/// installation. Only the six leading fields are required by the API; unset
/// optional fields are omitted from the serialized body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePrivateGithubAppApplicationRequest {
    pub project_uuid: String,
    pub server_uuid: String,
    pub github_app_uuid: String,
    pub git_repository: String,
    pub git_branch: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports_exposes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports_mappings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_pack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_labels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_docker_run_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant_deploy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_registry_image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_registry_image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_custom_start_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_custom_build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_domains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_paths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nixpacks_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nixpacks_build_cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nixpacks_start_cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_nginx_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_healthcheck_found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_gitlab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_bitbucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_gitea: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_container_label_readonly_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_container_label_escape_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrivateGithubAppApplicationResponse {
    pub uuid: String,
}

/// One entry of the queue returned by the deploy endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedDeployment {
    pub message: Option<String>,
    pub resource_uuid: Option<String>,
    pub deployment_uuid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployResponse {
    pub deployments: Vec<QueuedDeployment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_skips_unset_fields() {
        let request = CreatePrivateGithubAppApplicationRequest {
            project_uuid: "p-1".to_string(),
            server_uuid: "s-1".to_string(),
            github_app_uuid: "g-1".to_string(),
            git_repository: "https://github.com/acme/api".to_string(),
            git_branch: "main".to_string(),
            name: "api".to_string(),
            instant_deploy: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(object["instant_deploy"], true);
        assert!(!object.contains_key("domains"));
    }

    #[test]
    fn test_list_envelope_parses_pagination() {
        let body = r#"{
            "data": [{"id":"1","name":"web","created_at":"2024-01-01","updated_at":"2024-01-02"}],
            "links": {"first":"/api/v1/applications?page=1"},
            "meta": {"current_page":1,"last_page":3,"per_page":10,"total":25}
        }"#;

        let list: ListResponse<Application> = serde_json::from_str(body).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].name, "web");
        let meta = list.meta.unwrap();
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total, 25);
        assert!(meta.from.is_none());
    }

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::new("https://coolify.example.com", "token");
        assert!(config.validate().is_ok());

        let config = ClientConfig::new("not a url", "token");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("https://coolify.example.com", "  ");
        assert!(config.validate().is_err());
    }
}
