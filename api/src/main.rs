use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use sajian_api::application::http::server::http_server::{router, state};
use sajian_api::args::Args;
use sajian_core::domain::common::SajianConfig;
use sajian_core::domain::event::entities::CATALOG_TOPICS;
use sajian_core::infrastructure::mq::consumer::KafkaEventConsumer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = SajianConfig::from(args.as_ref().clone());

    let state = state(args.clone()).await?;
    let router = router(state)?;

    // The catalog event consumer runs for the lifetime of the server.
    let consumer = KafkaEventConsumer::new(&config.messaging, &CATALOG_TOPICS)?;
    tokio::spawn(consumer.run());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.server.port));
    info!("listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
