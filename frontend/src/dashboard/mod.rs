//! Business dashboard: session bootstrap, metrics loading, logout and the
//! view model rendered by the dashboard page.

pub mod loader;
pub mod logout;
pub mod state;
pub mod view_model;

pub use loader::{fetch_dashboard_data, mount_dashboard, MountGuard};
pub use logout::handle_logout;
pub use state::{DashboardAction, DashboardState};
pub use view_model::DashboardViewModel;
