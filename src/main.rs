use tracing_subscriber::EnvFilter;

use fabrica::{config::Config, model::app::AppState, router, service::language::LanguageRegistry, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    let storage = startup::build_storage(&config)
        .await
        .expect("Failed to prepare upload directory");
    let mailer = startup::build_mailer(&config).expect("Failed to configure SMTP mailer");

    let state = AppState {
        db,
        languages: LanguageRegistry::new(config.supported_languages.clone()),
        storage,
        mailer,
        jwt_secret: config.jwt_secret.clone(),
    };

    let app = router::routes(&state)
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, app).await.expect("Server error");
}
