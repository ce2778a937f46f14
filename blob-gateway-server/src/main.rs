mod errors;
mod params;
mod services;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use crate::params::Args;
use crate::services::GatewayState;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Roots are fixed for the life of the process.
    let state = web::Data::new(GatewayState::open(&args.documents_dir, &args.signatures_dir)?);
    tracing::info!(
        http_addr = %args.http_addr,
        documents = %args.documents_dir.display(),
        signatures = %args.signatures_dir.display(),
        "Starting blob gateway"
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(services::configure)
    });
    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    server
        .bind(args.http_addr.as_str())?
        .run()
        .await
}
