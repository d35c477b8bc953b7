pub mod auth_response;
pub mod login_request;
