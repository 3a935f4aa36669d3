//! `tillpoint-auth` — pure authentication/authorization kernel.
//!
//! This crate is intentionally decoupled from HTTP and storage: tokens come
//! in as strings, decisions go out as values. Cookie handling and response
//! mapping live in `tillpoint-api`.

pub mod guard;
pub mod matrix;
pub mod permissions;
pub mod requirement;
pub mod roles;
pub mod session;
pub mod token;

pub use guard::{Decision, authorize};
pub use matrix::{has_permission, permissions_for};
pub use permissions::Permission;
pub use requirement::AccessRequirement;
pub use roles::{Role, RoleParseError};
pub use session::{Session, SubjectId};
pub use token::{TokenCodec, TokenError};
