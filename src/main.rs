use dioxus_logger::tracing::{self, Level};
use shiftboard::server::{
    config::Config, error::Error, model::app::AppState, roster::lock::MaterializationLocks,
    router, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("failed to initialize logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_superuser(&config, &db).await?;

    let state = AppState {
        db,
        locale: config.roster_locale,
        materialization_locks: MaterializationLocks::default(),
    };
    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
