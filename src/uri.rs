mod u_uri;
mod uri_error;

pub use u_uri::{UEntity, UResource, UUri};
pub use uri_error::UriError;
