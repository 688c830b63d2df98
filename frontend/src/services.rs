use crate::api::analytics::{AnalyticsApi, HttpAnalyticsClient};
use crate::session::{LocalSessionStore, SessionStore};
use std::rc::Rc;
use yew::prelude::*;

/// Collaborators handed to pages through context.
#[derive(Clone)]
pub struct Services {
    pub session: Rc<dyn SessionStore>,
    pub analytics: Rc<dyn AnalyticsApi>,
}

impl Services {
    pub fn new(session: Rc<dyn SessionStore>, analytics: Rc<dyn AnalyticsApi>) -> Self {
        Self { session, analytics }
    }

    /// Local storage and the HTTP analytics client.
    pub fn browser() -> Self {
        Self::new(Rc::new(LocalSessionStore), Rc::new(HttpAnalyticsClient))
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && Rc::ptr_eq(&self.analytics, &other.analytics)
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ServicesProviderProps {
    #[prop_or_else(Services::browser)]
    pub services: Services,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<Services> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<Services>>
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context not found")
}
