//! HTTP API: session cookie transport, resolver middleware, and routing.

pub mod app;
pub mod authz;
pub mod config;
pub mod cookie;
pub mod middleware;
pub mod resolve;
