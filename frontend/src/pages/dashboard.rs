use crate::components::action_card::ActionCard;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::components::quick_stats::QuickStats;
use crate::components::stat_card::StatCard;
use crate::components::toast::{Toast, ToastContext};
use crate::dashboard::view_model::{ModuleShortcut, MODULE_SHORTCUTS};
use crate::dashboard::{
    handle_logout, mount_dashboard, DashboardAction, DashboardState, DashboardViewModel, MountGuard,
};
use crate::services::use_services;
use crate::Route;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let services = use_services();
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().expect("Dashboard must be rendered inside a router");
    let state = use_reducer(DashboardState::default);

    let redirect_to_login = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| navigator.push(&Route::Login))
    };

    // Session check and the single analytics read, once per mount
    {
        let services = services.clone();
        let state = state.clone();
        let redirect = redirect_to_login.clone();
        use_effect_with((), move |_| {
            let guard = MountGuard::new();
            let task_guard = guard.clone();
            let dispatch = Callback::from(move |action: DashboardAction| state.dispatch(action));
            spawn_local(async move {
                mount_dashboard(&services, &task_guard, &dispatch, &redirect).await;
            });
            move || guard.cancel()
        });
    }

    let on_logout = {
        let session = services.session.clone();
        let add_toast = toast_context.add_toast.clone();
        let redirect = redirect_to_login.clone();
        Callback::from(move |_: MouseEvent| handle_logout(session.as_ref(), &add_toast, &redirect))
    };

    let on_module_select = {
        let add_toast = toast_context.add_toast.clone();
        Callback::from(move |shortcut: ModuleShortcut| {
            debug!("Module shortcut selected: {}", shortcut.title);
            add_toast.emit(Toast::info(shortcut.notice()));
        })
    };

    if state.loading {
        return html! { <LoadingScreen /> };
    }

    let view = DashboardViewModel::new(state.session.as_ref(), &state.stats_or_zeroed());

    html! {
        <div class="dashboard">
            <Navbar
                user_name={view.user_name.clone()}
                user_role={view.user_role.clone()}
                on_logout={on_logout}
            />

            <div class="main-content">
                <div class="page-header">
                    <h1 class="page-title">{"Dashboard Overview"}</h1>
                    <p class="page-subtitle">{&view.welcome}</p>
                </div>

                <div class="stats-grid">
                    {view.metrics.iter().map(|card| html! {
                        <StatCard key={card.title} card={card.clone()} />
                    }).collect::<Html>()}
                </div>

                <div class="section-card">
                    <div class="section-header">
                        <h2 class="section-title">{"Quick Actions"}</h2>
                        <p class="section-description">
                            {"Access key features and manage your operations"}
                        </p>
                    </div>

                    <div class="action-grid">
                        {MODULE_SHORTCUTS.iter().map(|shortcut| html! {
                            <ActionCard
                                key={shortcut.title}
                                shortcut={*shortcut}
                                on_select={on_module_select.clone()}
                            />
                        }).collect::<Html>()}
                    </div>
                </div>

                <div class="section-card">
                    <div class="section-header">
                        <h2 class="section-title">{"Business Metrics"}</h2>
                    </div>

                    <QuickStats stats={view.quick_stats.to_vec()} />
                </div>
            </div>
        </div>
    }
}
