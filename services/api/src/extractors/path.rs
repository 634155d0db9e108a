use crate::errors::AppError;
use axum::extract::FromRequestParts;

/// `Path<T>` whose rejections use the `{"error": ...}` envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct JsonPath<T>(pub T);
