use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use mpo_api::config::AppConfig;
use mpo_api::domain::solver::Solver;
use mpo_api::domain::solvers::HighsSolver;
use mpo_api::handlers::{json_config, routes};

// ---------- Server bootstrap ----------
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // Sentry must be up before the runtime starts; the guard flushes on drop
    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    actix_web::rt::System::new().block_on(serve(config))
}

async fn serve(config: AppConfig) -> std::io::Result<()> {
    let solver: Arc<dyn Solver> = Arc::new(HighsSolver::new(config.solver.clone()));
    let json_limit = config.json_limit;

    info!(
        "Starting server on http://127.0.0.1:{} with {} (time limit: {:?})",
        config.port,
        solver.name(),
        config.solver.time_limit
    );

    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(web::Data::from(solver.clone()))
            .app_data(json_config(json_limit))
            .configure(routes)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
