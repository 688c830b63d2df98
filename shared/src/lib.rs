pub mod models {
    pub mod session;
}

pub mod dto {
    pub mod analytics;
}

pub mod de;
pub mod error;
pub mod format;

// Re-export commonly used items
pub use dto::analytics::{decode_dashboard_response, DashboardResponse, DashboardStats};
pub use error::{Result, SharedError};
pub use format::{format_count, format_currency};
pub use models::session::Session;
