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
        use std::sync::Arc;

        use crate::server::{
            bot::{self, command::build_registry, interaction::dispatcher::Dispatcher},
            config::Config,
            scheduler::presence,
            service::admin_code::AdminCodeService,
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let store = startup::connect_to_store(&config).await?;

        let admin_code_service = AdminCodeService::new();

        tracing::info!("Starting server");

        // Handlers are registered once; the registry is read-only from here on.
        let registry = Arc::new(build_registry()?);
        let dispatcher = Arc::new(Dispatcher::new(
            registry,
            db.clone(),
            http_client.clone(),
            store.clone(),
            config.bot_owner_ids.iter().copied(),
        ));

        let bot_client = bot::start::init_bot(&config, dispatcher).await?;
        let shard_manager = bot_client.shard_manager.clone();

        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        startup::check_for_admin(&db, &config, &admin_code_service).await?;

        let scheduler_db = db.clone();
        tokio::spawn(async move {
            if let Err(e) = presence::start_scheduler(scheduler_db, shard_manager).await {
                tracing::error!("Presence scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config.app_url)?
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                admin_code_service,
                store,
                config.app_url.clone(),
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
