// lib.rs
//! Coolify SDK for Rust

mod client;
mod client_builder;
mod constants;
mod error;
mod models;

pub use client::Client;
pub use client_builder::ClientBuilder;
pub use error::CoolifyError;
pub use models::{
    ApiResponse, Application, ClientConfig, CreatePrivateGithubAppApplicationRequest,
    CreatePrivateGithubAppApplicationResponse, Database, DeployResponse, Deployment,
    EnvironmentVariable, ListResponse, PaginationLinks, PaginationMeta, Project, QueuedDeployment,
    Server, Service, Team,
};
