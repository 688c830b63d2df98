use gcdl_shared::{DashboardStats, Session};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub session: Option<Session>,
    pub stats: Option<DashboardStats>,
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            session: None,
            stats: None,
            loading: true,
        }
    }
}

impl DashboardState {
    /// Figures to render. Before the first load completes this is all zero.
    pub fn stats_or_zeroed(&self) -> DashboardStats {
        self.stats.unwrap_or_else(DashboardStats::zeroed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    SessionRestored(Session),
    /// The fetch attempt finished, with real or fallback figures.
    StatsLoaded(DashboardStats),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::SessionRestored(session) => Rc::new(Self {
                session: Some(session),
                ..(*self).clone()
            }),
            DashboardAction::StatsLoaded(stats) => Rc::new(Self {
                stats: Some(stats),
                loading: false,
                ..(*self).clone()
            }),
        }
    }
}
