pub mod admin;
pub mod auth;
pub mod diagnostics;
pub mod system;
