//! Authentication and authorization library
//!
//! Provides the stateless security building blocks for the dashboard API:
//! - Password hashing (Argon2id)
//! - Signed token issuance and validation (HS256)
//! - Credential verification against a pluggable credential store
//! - Ordered access policy rules matched per request
//!
//! The HTTP layer lives in the consuming service; this crate is framework
//! free so the same primitives can back any inbound adapter.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Authority, Principal, TokenService};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 3600);
//! let principal = Principal::new("alice", vec![Authority::User]);
//! let token = tokens.issue(&principal).unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;

// Re-export commonly used items
pub use authenticator::AuthFailure;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use policy::PolicyRule;
pub use policy::PolicyTable;
pub use policy::Requirement;
pub use principal::Authority;
pub use principal::CredentialRecord;
pub use principal::CredentialStore;
pub use principal::CredentialStoreError;
pub use principal::Principal;
