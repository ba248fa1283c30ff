//! Typed client for the Examinie backend.

pub mod auth;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod exams;
pub mod results;
pub mod student;

pub use client::{ApiClient, ApiClientBuilder};
pub use content::{Upload, UploadPayload};
pub use error::{ApiError, Result};
