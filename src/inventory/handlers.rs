use std::sync::Arc;

use axum::extract::{Multipart, Path};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use super::repository::InventoryRepository;
use super::types::{DeleteResponse, UpdateItemRequest};
use crate::assets::store::AssetStore;
use crate::error::InventoryError;
use crate::search::projection::project;
use crate::search::types::ItemProjection;

/// Fields collected from a multipart upload form.
///
/// The photo, if present, is already staged in the asset store by the time the
/// form is returned; whoever owns the form from then on owns the staged file.
#[derive(Default)]
struct UploadForm {
    name: Option<String>,
    description: Option<String>,
    staged: Option<String>,
}

pub async fn handle_register(
    Extension(repo): Extension<Arc<InventoryRepository>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ItemProjection>), InventoryError> {
    let form = read_upload_form(multipart, repo.assets()).await?;

    let item = repo
        .create(
            form.name.as_deref().unwrap_or_default(),
            form.description.as_deref().unwrap_or_default(),
            form.staged,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(project(&item))))
}

pub async fn handle_list(
    Extension(repo): Extension<Arc<InventoryRepository>>,
) -> Json<Vec<ItemProjection>> {
    let projections = repo.list().iter().map(project).collect();
    Json(projections)
}

pub async fn handle_get_item(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<InventoryRepository>>,
) -> Result<Json<ItemProjection>, InventoryError> {
    let id = parse_item_id(&id)?;
    let item = repo.get(id).ok_or(InventoryError::NotFound(id))?;
    Ok(Json(project(&item)))
}

pub async fn handle_update_item(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<InventoryRepository>>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemProjection>, InventoryError> {
    let id = parse_item_id(&id)?;
    let item = repo.update(id, req.name, req.description)?;
    Ok(Json(project(&item)))
}

pub async fn handle_delete_item(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<InventoryRepository>>,
) -> Result<Json<DeleteResponse>, InventoryError> {
    let id = parse_item_id(&id)?;
    repo.delete(id).await?;
    Ok(Json(DeleteResponse {
        id,
        status: "deleted".to_string(),
    }))
}

pub async fn handle_get_photo(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<InventoryRepository>>,
) -> Result<Response, InventoryError> {
    let id = parse_item_id(&id)?;
    let item = repo.get(id).ok_or(InventoryError::NotFound(id))?;
    // An item without a photo reads the same as a missing file: 404.
    let asset = item.photo_asset.ok_or(InventoryError::NotFound(id))?;

    match repo.assets().read(&asset).await {
        Ok(bytes) => {
            let headers = [(header::CONTENT_TYPE, content_type_for(&asset))];
            Ok((headers, bytes).into_response())
        }
        Err(err) => {
            tracing::error!("Photo file {} for item {} unreadable: {}", asset, id, err);
            Err(InventoryError::NotFound(id))
        }
    }
}

pub async fn handle_put_photo(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<InventoryRepository>>,
    multipart: Multipart,
) -> Result<Json<ItemProjection>, InventoryError> {
    let id = parse_item_id(&id)?;
    let form = read_upload_form(multipart, repo.assets()).await?;
    let item = repo.replace_photo(id, form.staged).await?;
    Ok(Json(project(&item)))
}

/// Drains a multipart body, staging the photo field (if any) into the asset
/// store as it streams in.
///
/// On any intake failure the already-staged file is discarded before the error
/// propagates, so a malformed request leaves nothing behind.
async fn read_upload_form(
    mut multipart: Multipart,
    store: &Arc<dyn AssetStore>,
) -> Result<UploadForm, InventoryError> {
    let mut form = UploadForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                discard_form(store, form).await;
                return Err(InventoryError::validation(format!(
                    "malformed upload: {}",
                    err
                )));
            }
        };

        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => match field.text().await {
                Ok(text) => form.name = Some(text),
                Err(err) => {
                    discard_form(store, form).await;
                    return Err(InventoryError::validation(format!(
                        "malformed upload: {}",
                        err
                    )));
                }
            },
            "description" => match field.text().await {
                Ok(text) => form.description = Some(text),
                Err(err) => {
                    discard_form(store, form).await;
                    return Err(InventoryError::validation(format!(
                        "malformed upload: {}",
                        err
                    )));
                }
            },
            "photo" => {
                let original = field.file_name().unwrap_or("upload").to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        discard_form(store, form).await;
                        return Err(InventoryError::validation(format!(
                            "malformed upload: {}",
                            err
                        )));
                    }
                };
                // Browsers submit an empty photo field when the form input is
                // left blank; treat it as no upload.
                if bytes.is_empty() {
                    continue;
                }
                match store.stage(&bytes, &original).await {
                    Ok(name) => {
                        if let Some(previous) = form.staged.replace(name) {
                            discard_logged(store, &previous).await;
                        }
                    }
                    Err(err) => {
                        discard_form(store, form).await;
                        return Err(InventoryError::Io(err));
                    }
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// A path whose id segment is not a positive integer names no resource at all,
/// so it reads as an unknown route rather than a bad request.
fn parse_item_id(raw: &str) -> Result<u64, InventoryError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(InventoryError::UnknownRoute)
}

async fn discard_form(store: &Arc<dyn AssetStore>, form: UploadForm) {
    if let Some(staged) = form.staged {
        discard_logged(store, &staged).await;
    }
}

async fn discard_logged(store: &Arc<dyn AssetStore>, name: &str) {
    if let Err(err) = store.discard(name).await {
        tracing::warn!("Failed to discard asset {}: {}", name, err);
    }
}

fn content_type_for(asset_name: &str) -> &'static str {
    match asset_name.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
