//! Directory client for connecting to the daemon.

use tonic::transport::Channel;
use tracing::{debug, info};

use userdir_service::pb::{
    user_service_client::UserServiceClient, SearchRequest, User as ProtoUser, UserIdRequest,
    UserIdsRequest,
};
use userdir_types::{SearchCriteria, User};

use crate::error::ClientError;

/// Default endpoint for the directory daemon.
pub const DEFAULT_ENDPOINT: &str = "http://[::1]:50051";

/// Client for communicating with the directory daemon.
pub struct UserClient {
    inner: UserServiceClient<Channel>,
}

impl UserClient {
    /// Connect to the directory daemon.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connection` if connection fails.
    pub async fn connect(endpoint: &str) -> Result<Self, ClientError> {
        info!("Connecting to user directory at {}", endpoint);
        let inner = UserServiceClient::connect(endpoint.to_string())
            .await
            .map_err(ClientError::Connection)?;
        Ok(Self { inner })
    }

    /// Fetch a single user.
    ///
    /// An unknown id surfaces as `ClientError::Rpc` with code `NotFound`.
    pub async fn get_user(&mut self, id: i32) -> Result<User, ClientError> {
        debug!("GetUserById request: {}", id);
        let request = tonic::Request::new(UserIdRequest { id });
        let response = self.inner.get_user_by_id(request).await?;
        response
            .into_inner()
            .user
            .map(proto_to_user)
            .ok_or_else(|| ClientError::MalformedResponse("response carried no user".into()))
    }

    /// Fetch users for each id, in request order.
    pub async fn get_users(&mut self, ids: &[i32]) -> Result<Vec<User>, ClientError> {
        debug!("GetUsersByIds request: {:?}", ids);
        let request = tonic::Request::new(UserIdsRequest { ids: ids.to_vec() });
        let response = self.inner.get_users_by_ids(request).await?;
        Ok(response
            .into_inner()
            .users
            .into_iter()
            .map(proto_to_user)
            .collect())
    }

    /// Search users.
    ///
    /// The wire format cannot carry an empty city or a zero phone as a
    /// constraint; both are sent as "no constraint".
    pub async fn search(&mut self, criteria: &SearchCriteria) -> Result<Vec<User>, ClientError> {
        debug!("SearchUsers request: {:?}", criteria);
        let request = tonic::Request::new(criteria_to_request(criteria));
        let response = self.inner.search_users(request).await?;
        Ok(response
            .into_inner()
            .users
            .into_iter()
            .map(proto_to_user)
            .collect())
    }
}

fn criteria_to_request(criteria: &SearchCriteria) -> SearchRequest {
    SearchRequest {
        city: criteria.city.clone().unwrap_or_default(),
        phone: criteria.phone.unwrap_or(0),
        married: criteria.married,
    }
}

fn proto_to_user(proto: ProtoUser) -> User {
    User {
        id: proto.id,
        name: proto.name,
        city: proto.city,
        phone: proto.phone,
        height: proto.height,
        married: proto.married,
    }
}
