//! Extractors whose rejections go through [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with their own status codes; these
//! wrappers fold decoding failures into the same 500 `{error, code}` shape
//! every other failure uses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
