//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to the search
//! backend.

mod client;

pub use client::{HttpClient, HttpResponse};
