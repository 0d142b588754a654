use std::path::Path;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::{AppError, ErrorBody};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageCheck {
    pub exists: bool,
    /// Public URL path of the file under `/uploads`.
    pub path: String,
}

fn checked_segment(segment: &str) -> Result<&str, AppError> {
    if segment.is_empty()
        || segment.contains("..")
        || segment.contains('/')
        || segment.contains('\\')
    {
        return Err(AppError::BadRequest(format!("Invalid path segment '{segment}'")));
    }
    Ok(segment)
}

async fn inspect(uploads_dir: &Path, segments: &[&str]) -> Result<ImageCheck, AppError> {
    let mut file = uploads_dir.to_path_buf();
    let mut public = String::from("/uploads");
    for segment in segments {
        let segment = checked_segment(segment)?;
        file.push(segment);
        public.push('/');
        public.push_str(segment);
    }

    let exists = tokio::fs::metadata(&file)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    log::debug!("check-image {} -> {}", file.display(), exists);

    Ok(ImageCheck {
        exists,
        path: public,
    })
}

/// GET /check-image/{filename}
#[utoipa::path(
    get,
    path = "/check-image/{filename}",
    params(
        ("filename" = String, Path, description = "File name inside the uploads directory"),
    ),
    responses(
        (status = 200, description = "Whether the upload exists", body = ImageCheck),
        (status = 400, description = "Traversal attempt or empty name", body = ErrorBody),
    ),
    tag = "uploads"
)]
pub async fn check_image(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    let check = inspect(&state.uploads_dir, &[filename.as_str()]).await?;
    Ok(HttpResponse::Ok().json(check))
}

/// GET /check-image/{folder}/{filename}
#[utoipa::path(
    get,
    path = "/check-image/{folder}/{filename}",
    params(
        ("folder" = String, Path, description = "Sub-folder of the uploads directory"),
        ("filename" = String, Path, description = "File name inside the folder"),
    ),
    responses(
        (status = 200, description = "Whether the upload exists", body = ImageCheck),
        (status = 400, description = "Traversal attempt or empty name", body = ErrorBody),
    ),
    tag = "uploads"
)]
pub async fn check_image_in_folder(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (folder, filename) = path.into_inner();
    let check = inspect(&state.uploads_dir, &[folder.as_str(), filename.as_str()]).await?;
    Ok(HttpResponse::Ok().json(check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_segments_are_rejected() {
        assert!(checked_segment("..").is_err());
        assert!(checked_segment("a/../b").is_err());
        assert!(checked_segment("a\\b").is_err());
        assert!(checked_segment("").is_err());
        assert!(checked_segment("room-101.jpg").is_ok());
    }

    #[actix_web::test]
    async fn inspect_reports_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("rooms")).unwrap();
        std::fs::write(dir.path().join("rooms").join("101.jpg"), b"jpeg").unwrap();

        let found = inspect(dir.path(), &["rooms", "101.jpg"]).await.unwrap();
        assert!(found.exists);
        assert_eq!(found.path, "/uploads/rooms/101.jpg");

        let missing = inspect(dir.path(), &["102.jpg"]).await.unwrap();
        assert!(!missing.exists);

        // A directory is not an image.
        let folder = inspect(dir.path(), &["rooms"]).await.unwrap();
        assert!(!folder.exists);
    }
}
