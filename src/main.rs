use anyhow::{Context, Result};
use axum::{ServiceExt, body::Body};
use showcase_admin::{
    application::{
        ports::{
            security::TokenManager, storage::AssetUploader, time::Clock, util::SlugGenerator,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{career::CareerRepository, category::CategoryRepository, product::ProductRepository},
    infrastructure::{
        database,
        repositories::{
            PostgresCareerRepository, PostgresCategoryRepository, PostgresProductRepository,
        },
        security::HmacTokenManager,
        storage::CloudinaryUploader,
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to database")?;
    database::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let career_repo: Arc<CareerRepository> =
        Arc::new(PostgresCareerRepository::new(pool.clone()));
    let product_repo: Arc<ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));

    let uploader: Arc<dyn AssetUploader> = Arc::new(CloudinaryUploader::new(
        config.cloudinary().clone(),
        config.cloudinary_folder().map(str::to_string),
        config.upload_timeout(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_manager: Arc<dyn TokenManager> = Arc::new(HmacTokenManager::new(
        config.session_signing_key(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        career_repo,
        product_repo,
        category_repo,
        uploader,
        token_manager,
        clock,
        slugger,
        config.upload_timeout(),
    ));

    let state = HttpState {
        services,
        upload_dir: config.upload_tmp_dir().clone(),
    };

    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, "showcase admin listening");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
