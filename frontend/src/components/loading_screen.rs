use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingScreenProps {
    #[prop_or(AttrValue::from("Loading Dashboard..."))]
    pub message: AttrValue,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <div class="loading-text">{props.message.clone()}</div>
        </div>
    }
}
