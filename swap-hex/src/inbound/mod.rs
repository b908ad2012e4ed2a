//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the conversion service.

mod handlers;
mod server;

pub use server::HttpServer;
