//! One-shot admin console: prints the entity-type definitions and the first
//! page of organizations, optionally filtered by a search term argument.

use std::env;
use std::process::ExitCode;

use config::Config;
use dotenvy::dotenv;

use mentor_admin::api::http::MentoringApi;
use mentor_admin::controller::ListController;
use mentor_admin::domain::organization::Organization;
use mentor_admin::models::config::ApiConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let config_path = env::var("MENTOR_ADMIN_CONFIG").unwrap_or_else(|_| "config".to_string());
    let config = match Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(config::Environment::with_prefix("MENTOR_ADMIN"))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let api_config: ApiConfig = match config.try_deserialize() {
        Ok(api_config) => api_config,
        Err(e) => {
            log::error!("Failed to parse configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let api = match MentoringApi::new(&api_config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to build API client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match api.read_entity_types().await {
        Ok(entity_types) => {
            println!("Entity types:");
            for entity_type in &entity_types {
                println!("  {} ({})", entity_type.label, entity_type.value);
            }
        }
        Err(e) => println!("Could not read entity types: {e}"),
    }

    let mut controller: ListController<Organization, _> =
        ListController::new(api.clone()).with_page_size(api_config.page_size);
    if let Some(term) = env::args().nth(1) {
        controller.set_search_term(term);
    }
    controller.open().await;

    let state = controller.state();
    if let Some(error) = &state.error {
        println!("{error}");
        return ExitCode::FAILURE;
    }

    let visible = controller.visible_items();
    if visible.is_empty() {
        println!("No organizations found.");
    } else {
        println!(
            "Organizations (page {} of {}):",
            state.current_page, state.total_pages
        );
        for organization in visible {
            println!(
                "  [{}] {} {}",
                organization.code,
                organization.name,
                organization.description.as_deref().unwrap_or("N/A")
            );
        }
    }

    ExitCode::SUCCESS
}
