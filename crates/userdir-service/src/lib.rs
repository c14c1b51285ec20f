//! gRPC service implementation for the user directory.
//!
//! Provides:
//! - GetUserById, GetUsersByIds and SearchUsers RPCs
//! - Health check endpoint (tonic-health)
//! - Reflection endpoint for debugging (tonic-reflection)

pub mod query;
pub mod server;
pub mod service;

pub mod pb {
    tonic::include_proto!("userdir");

    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("userdir_descriptor");
}

pub use server::{run_server, run_server_with_shutdown};
pub use service::UserServiceImpl;
