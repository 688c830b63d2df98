use crate::components::toast::Toast;
use crate::session::SessionStore;
use log::info;
use yew::Callback;

pub const LOGOUT_MESSAGE: &str = "Logged out successfully";

/// Wipes persisted state, confirms with a toast and leaves for the login page.
/// Safe to call repeatedly and in any view state.
pub fn handle_logout(store: &dyn SessionStore, toasts: &Callback<Toast>, redirect: &Callback<()>) {
    store.clear();
    info!("Session cleared on logout");
    toasts.emit(Toast::info(LOGOUT_MESSAGE));
    redirect.emit(());
}
