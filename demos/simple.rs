//! Example of using the Coolify SDK
use coolify::ClientBuilder;
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Enable logging
    env_logger::init();

    // Initialize client from environment
    let client = ClientBuilder::new()
        .api_url(env::var("COOLIFY_API_URL")?)
        .api_token(env::var("COOLIFY_API_TOKEN")?)
        .build()?;

    println!("Coolify version: {}", client.version().await?);

    // List all applications
    let apps = client.list_applications().await?;
    println!("Current applications: \n{:#?}", apps.data);

    // List all servers
    let servers = client.list_servers().await?;
    println!("Servers: \n{:#?}", servers.data);

    // List all projects
    let projects = client.list_projects().await?;
    println!("Projects: \n{:#?}", projects.data);

    // Show the team the token is scoped to
    let team = client.get_current_team().await?;
    println!("Current team: \n{:#?}", team);

    Ok(())
}
