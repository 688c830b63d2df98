use yew::prelude::*;

/// Redirect target for signed-out users. Signing in is handled by the
/// authentication service, which stores the session this app reads.
#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <div class="login-page">
            <div class="login-card">
                <div class="brand-logo">{"GC"}</div>
                <h1>{"GCDL Management System"}</h1>
                <p>{"Please sign in to continue."}</p>
            </div>
        </div>
    }
}
