//! UserService gRPC trait implementation.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use userdir_core::UserDirectory;

use crate::pb::{
    user_service_server::UserService, SearchRequest, UserIdRequest, UserIdsRequest, UserResponse,
    UsersResponse,
};
use crate::query;

/// Implementation of the UserService gRPC service.
///
/// Holds the directory built at startup; every handler reads from it
/// without locking.
pub struct UserServiceImpl {
    directory: Arc<UserDirectory>,
}

impl UserServiceImpl {
    /// Create a new UserServiceImpl over the given directory.
    pub fn new(directory: Arc<UserDirectory>) -> Self {
        Self { directory }
    }

    /// Directory backing this service.
    pub fn directory(&self) -> &Arc<UserDirectory> {
        &self.directory
    }
}

#[tonic::async_trait]
impl UserService for UserServiceImpl {
    async fn get_user_by_id(
        &self,
        request: Request<UserIdRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        query::get_user_by_id(self.directory.clone(), request).await
    }

    async fn get_users_by_ids(
        &self,
        request: Request<UserIdsRequest>,
    ) -> Result<Response<UsersResponse>, Status> {
        query::get_users_by_ids(self.directory.clone(), request).await
    }

    async fn search_users(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<UsersResponse>, Status> {
        query::search_users(self.directory.clone(), request).await
    }
}
