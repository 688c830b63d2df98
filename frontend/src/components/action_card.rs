use crate::dashboard::view_model::ModuleShortcut;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ActionCardProps {
    pub shortcut: ModuleShortcut,
    pub on_select: Callback<ModuleShortcut>,
}

#[function_component(ActionCard)]
pub fn action_card(props: &ActionCardProps) -> Html {
    let onclick = {
        let shortcut = props.shortcut;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(shortcut))
    };

    html! {
        <div class="action-card" onclick={onclick}>
            <div class="action-icon">{props.shortcut.icon}</div>
            <h3 class="action-title">{props.shortcut.title}</h3>
            <p class="action-description">{props.shortcut.description}</p>
        </div>
    }
}
