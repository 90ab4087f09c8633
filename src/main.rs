use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;

use leave_dashboard::config::Config;
use leave_dashboard::dashboard::{DashboardActions, LeaveAggregator};
use leave_dashboard::db::init_db;
use leave_dashboard::docs::ApiDoc;
use leave_dashboard::platform::{LeavePlatform, MySqlPlatform};
use leave_dashboard::routes;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Leave dashboard is up"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await?;

    let platform: Arc<dyn LeavePlatform> = Arc::new(MySqlPlatform::new(pool));
    let platform = Data::from(platform);
    let aggregator = Data::new(
        LeaveAggregator::new(DashboardActions::from_urls(
            &config.leave_create_url,
            &config.case_view_url,
        ))
        .with_cases(config.show_cases),
    );
    let limiter = routes::build_limiter(config.rate_dashboard_per_min)?;

    let server_addr = config.server_addr.clone();
    let config_data = Data::new(config.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(platform.clone())
            .app_data(aggregator.clone())
            .app_data(config_data.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config.api_prefix, &limiter))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
