use crate::components::toast::ToastProvider;
use crate::config::Config;
use crate::pages::{dashboard::Dashboard, login::Login, not_found::NotFound};
use crate::services::ServicesProvider;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod services;
pub mod session;
pub mod pages {
    pub mod dashboard;
    pub mod login;
    pub mod not_found;
}

#[cfg(test)]
mod testing;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <ServicesProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ServicesProvider>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Login => html! { <Login /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Logger initialized, API base: {:?}", Config::api_base_url());

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
