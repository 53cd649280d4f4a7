//! Create an application from a private GitHub repository via a GitHub App installation
use coolify::{ClientBuilder, CreatePrivateGithubAppApplicationRequest};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Enable logging
    env_logger::init();

    let client = ClientBuilder::new()
        .api_url("https://your-coolify-instance.com")
        .api_token("your-api-token")
        .build()?;

    let application = CreatePrivateGithubAppApplicationRequest {
        project_uuid: "your-project-uuid".to_string(),
        server_uuid: "your-server-uuid".to_string(),
        github_app_uuid: "your-github-app-uuid".to_string(),
        git_repository: "https://github.com/yourusername/your-private-repo".to_string(),
        git_branch: "main".to_string(),
        name: "My Private GitHub App".to_string(),
        domains: Some("app.example.com".to_string()),
        build_pack: Some("nixpacks".to_string()),
        ports_exposes: Some("3000".to_string()),
        instant_deploy: Some(true),
        ..Default::default()
    };

    match client.create_private_github_app_application(&application).await {
        Ok(response) => println!("Application created with UUID: {}", response.uuid),
        Err(err) => eprintln!("Error creating application: {}", err),
    }

    Ok(())
}
