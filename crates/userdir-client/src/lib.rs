//! Client library for the User Directory daemon.
//!
//! # Example
//!
//! ```rust,no_run
//! use userdir_client::UserClient;
//! use userdir_types::SearchCriteria;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = UserClient::connect("http://[::1]:50051").await?;
//!
//!     let user = client.get_user(1).await?;
//!     println!("{} lives in {}", user.name, user.city);
//!
//!     let in_la = client.search(&SearchCriteria::new().with_city("LA")).await?;
//!     println!("{} users in LA", in_la.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

pub use client::{UserClient, DEFAULT_ENDPOINT};
pub use error::ClientError;

// Re-export domain types for convenience
pub use userdir_types::{SearchCriteria, User};
