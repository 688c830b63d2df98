use crate::config::Config;
use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};

/// Creates a GET request carrying the login token, when one is stored.
///
/// The token is stored as a bare string by the login flow, so it is read raw
/// rather than through the JSON accessors.
pub fn authenticated_get(url: &str) -> RequestBuilder {
    let req = Request::get(url).header("Accept", "application/json");
    match LocalStorage::raw().get_item(Config::TOKEN_KEY) {
        Ok(Some(token)) if !token.is_empty() => {
            req.header("Authorization", &format!("Bearer {}", token.trim_matches('"')))
        }
        _ => req,
    }
}
