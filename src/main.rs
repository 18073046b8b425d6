use actix_web::{web, App, HttpServer};
use chrono::Local;
use fairplay::config::Config;
use fairplay::middleware;
use fairplay::routes::{api_routes, public_routes};
use fairplay::state::AppState;
use log::info;
use std::error::Error;
use std::io;
use std::io::Write;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut log_builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    log_builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.args()
            )
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        })
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let bind_address = config.bind_address();
    let workers = config.server.workers;
    let app_state = web::Data::new(AppState::new(config)?);

    info!("FairPlay donation API listening on {}", bind_address);
    info!(
        "Payment backend: {} (Stripe key {})",
        app_state.config.payments.backend_url,
        if app_state.config.payments.stripe_secret_key.is_some() {
            "configured"
        } else {
            "not configured"
        }
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::RequestLogging)
            .wrap(middleware::create_cors())
            .service(api_routes())
            .service(public_routes())
    })
    .bind(&bind_address)?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
