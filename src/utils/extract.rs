// src/utils/extract.rs

use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` whose rejections render as `AppError::BadRequest` instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
