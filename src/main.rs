use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use inventory_service::assets::store::FileAssetStore;
use inventory_service::error::ErrorBody;
use inventory_service::inventory::handlers::{
    handle_delete_item, handle_get_item, handle_get_photo, handle_list, handle_put_photo,
    handle_register, handle_update_item,
};
use inventory_service::inventory::repository::InventoryRepository;
use inventory_service::search::handlers::{handle_search_form, handle_search_query};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut host: Option<String> = None;
    let mut port: Option<u16> = None;
    let mut cache: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host" | "-h" => {
                host = args.get(i + 1).cloned();
                i += 2;
            }
            "--port" | "-p" => {
                port = Some(args.get(i + 1).cloned().unwrap_or_default().parse()?);
                i += 2;
            }
            "--cache" | "-c" => {
                cache = args.get(i + 1).cloned();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let (host, port, cache) = match (host, port, cache) {
        (Some(host), Some(port), Some(cache)) => (host, port, cache),
        _ => {
            eprintln!(
                "Usage: {} --host <address> --port <number> --cache <path>",
                args[0]
            );
            eprintln!("Example: {} --host 127.0.0.1 --port 3000 --cache ./cache", args[0]);
            std::process::exit(1);
        }
    };

    // 1. Asset store (cache directory):
    let store = Arc::new(FileAssetStore::open(&cache)?);

    // 2. Inventory repository:
    let repo = Arc::new(InventoryRepository::new(store));

    // 3. HTTP router:
    let app = Router::new()
        .route("/register", post(handle_register))
        .route("/inventory", get(handle_list))
        .route(
            "/inventory/:id",
            get(handle_get_item).put(handle_update_item).delete(handle_delete_item),
        )
        .route(
            "/inventory/:id/photo",
            get(handle_get_photo).put(handle_put_photo),
        )
        .route(
            "/search",
            get(handle_search_query).post(handle_search_form),
        )
        .fallback(handle_unknown_route)
        .layer(Extension(repo));

    // 4. Start HTTP server:
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Inventory service listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_unknown_route() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "unknown route".to_string(),
        }),
    )
}
