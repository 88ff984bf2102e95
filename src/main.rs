mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::trace::TraceLayer;

        use crate::server::{auth::jwt::TokenSettings, config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let cors = startup::setup_cors(&config)?;

        startup::check_for_admin(&db, &config).await?;

        if config.cdn.is_none() {
            tracing::warn!("Cloudinary credentials not set, photo uploads are disabled");
        }

        tracing::info!(
            "Starting server on {}",
            dioxus_cli_config::fullstack_address_or_localhost()
        );

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                http_client,
                TokenSettings::new(config.jwt_secret, config.jwt_expiry_hours),
                config.cdn,
                config.geocode,
            ))
            .layer(TraceLayer::new_for_http())
            .layer(cors);
        router = router.merge(server_routes);

        Ok(router)
    })
}
