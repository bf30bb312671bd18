use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::cv::CvFile;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /cv
pub async fn cv_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let cv = CvFile::read(&state.config.cv_path, &state.config.profile.cv_filename).await?;
    let headers = [
        (header::CONTENT_TYPE, cv.content_type().to_string()),
        (header::CONTENT_DISPOSITION, cv.disposition()),
    ];
    Ok((headers, cv.bytes).into_response())
}
