use crate::errors::AppError;
use axum::extract::FromRequest;

/// `Json<T>` whose rejections use the `{"error": ...}` envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
