use crate::config::Config;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Info,
}

impl ToastType {
    fn class(&self) -> &'static str {
        match self {
            ToastType::Info => "toast-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration_ms: Config::TOAST_DURATION_MS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => {
                let before = toasts.len();
                toasts.retain(|t| t.id != id);
                if toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let add_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration_ms = toast.duration_ms;
            dispatcher.dispatch(ToastAction::Push(toast));

            let dispatcher = dispatcher.clone();
            Timeout::new(duration_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(toast_id));
            })
            .forget();
        })
    };

    let remove_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="toast-container">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| remove_toast.emit(toast_id))
    };

    html! {
        <div class={classes!("toast", props.toast.toast_type.class())} role="status">
            <span class="toast-icon">{props.toast.toast_type.icon()}</span>
            <p class="toast-message">{&props.toast.message}</p>
            <button onclick={on_close} class="toast-close" aria-label="Dismiss">
                {"×"}
            </button>
        </div>
    }
}
