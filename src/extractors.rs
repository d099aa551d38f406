//! Extractor wrappers whose rejections render through `AppError`, so malformed
//! bodies, path ids and query strings get the same JSON error envelope as handler errors.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// `axum::Json` with rejections mapped to 422 `validation_error` / 400 `bad_request`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with rejections mapped to 400 `bad_request`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` with rejections mapped to 400 `bad_request`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
