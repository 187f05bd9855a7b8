use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;

mod api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("fail to setup logging")?;

    let fixtures =
        std::env::var("RESTAURANT_FIXTURES").context("RESTAURANT_FIXTURES env not found")?;
    let state = web::Data::new(api::ApiState::load(&fixtures)?);
    let addr = std::env::var("API_SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    tracing::info!("serving {fixtures} on {addr}");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::default().allow_any_origin().allow_any_method())
            .configure(api::routes)
    })
    .bind(addr.as_str())
    .with_context(|| format!("fail to bind {addr}"))?
    .run()
    .await?;
    Ok(())
}
