//! Menu Client - HTTP client and client-side logic for the menu server
//!
//! Provides the API client, the catalog filter and state store, the admin
//! session guard and best-effort translation.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod language;
pub mod translate;

pub use auth::{
    AdminSession, AuthError, Authenticator, Credentials, FixedCredentials, SessionState,
    SessionStorage, SessionToken,
};
pub use catalog::{CatalogState, CatalogStore, RequestSequencer};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use filter::{MenuFilter, Selection};
pub use self::http::HttpClient;
pub use language::{Direction, Language};
pub use translate::{MyMemoryTranslator, Translator};

// Re-export shared types for convenience
pub use shared::models::{
    CategoryIndex, CustomizationOption, Product, ProductInput, Review, ReviewInput,
};
pub use shared::{ErrorCode, MessageResponse};
