#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> aihub_website::AppResult<()> {
    use aihub_website::app::*;
    use aihub_website::AppError;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::compression::predicate::{NotForContentType, SizeAbove};
    use tower_http::compression::{CompressionLayer, Predicate};
    use tower_http::CompressionLevel;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("no .env loaded: {e}");
    }

    let conf = get_configuration(None).map_err(|e| AppError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    tracing::debug!("{} routes registered", routes.len());

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            CompressionLayer::new()
                .br(true)
                .zstd(true)
                .quality(CompressionLevel::Default)
                .compress_when(
                    SizeAbove::new(256)
                        .and(NotForContentType::IMAGES)
                        .and(NotForContentType::const_new("application/wasm")),
                ),
        )
        .with_state(leptos_options);

    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the client entry point is `hydrate` in lib.rs
}
