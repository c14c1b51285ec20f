//! Query RPC implementations.
//!
//! Converts wire requests into directory calls and directory results back
//! into wire responses.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use userdir_core::UserDirectory;
use userdir_types::{DirectoryError, SearchCriteria, User};

use crate::pb::{
    SearchRequest, User as ProtoUser, UserIdRequest, UserIdsRequest, UserResponse, UsersResponse,
};

/// Fetch a single user by id.
///
/// Unknown ids map to `NOT_FOUND`.
pub async fn get_user_by_id(
    directory: Arc<UserDirectory>,
    request: Request<UserIdRequest>,
) -> Result<Response<UserResponse>, Status> {
    let req = request.into_inner();
    debug!("GetUserById request: id={}", req.id);

    let user = directory.get_by_id(req.id).map_err(error_to_status)?;

    Ok(Response::new(UserResponse {
        user: Some(domain_to_proto_user(user)),
    }))
}

/// Fetch users for a list of ids, keeping request order.
pub async fn get_users_by_ids(
    directory: Arc<UserDirectory>,
    request: Request<UserIdsRequest>,
) -> Result<Response<UsersResponse>, Status> {
    let req = request.into_inner();
    debug!("GetUsersByIds request: ids={:?}", req.ids);

    let users = directory
        .get_by_ids(&req.ids)
        .into_iter()
        .map(domain_to_proto_user)
        .collect();

    Ok(Response::new(UsersResponse { users }))
}

/// Search users by city, phone and marital status.
pub async fn search_users(
    directory: Arc<UserDirectory>,
    request: Request<SearchRequest>,
) -> Result<Response<UsersResponse>, Status> {
    let req = request.into_inner();
    debug!(
        "SearchUsers request: city={:?}, phone={}, married={:?}",
        req.city, req.phone, req.married
    );

    let criteria = criteria_from_request(req);
    let users: Vec<ProtoUser> = directory
        .search(&criteria)
        .into_iter()
        .map(domain_to_proto_user)
        .collect();

    debug!(matched = users.len(), "SearchUsers complete");
    Ok(Response::new(UsersResponse { users }))
}

/// Build search criteria from the wire request.
///
/// An empty city and a zero phone are the wire's "no constraint" values.
/// `married` carries its own presence flag.
pub fn criteria_from_request(req: SearchRequest) -> SearchCriteria {
    SearchCriteria {
        city: Some(req.city).filter(|city| !city.is_empty()),
        phone: Some(req.phone).filter(|phone| *phone != 0),
        married: req.married,
    }
}

fn error_to_status(err: DirectoryError) -> Status {
    match err {
        DirectoryError::NotFound(_) => Status::not_found(err.to_string()),
        other => Status::internal(other.to_string()),
    }
}

fn domain_to_proto_user(user: User) -> ProtoUser {
    ProtoUser {
        id: user.id,
        name: user.name,
        city: user.city,
        phone: user.phone,
        height: user.height,
        married: user.married,
    }
}
