pub mod analytics;
pub mod utils;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    format!("{}{}", Config::api_base_url(), path)
}
