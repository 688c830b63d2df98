use crate::api::analytics::AnalyticsApi;
use crate::dashboard::state::DashboardAction;
use crate::services::Services;
use crate::session::restore_session;
use gcdl_shared::DashboardStats;
use log::{debug, error};
use std::cell::Cell;
use std::rc::Rc;
use yew::Callback;

/// Ties async work to the lifetime of a mounted view. Clones share one flag;
/// once cancelled, results of work started under the guard are dropped.
#[derive(Clone, Debug)]
pub struct MountGuard {
    active: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        self.active.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the dashboard figures once. Any failure is logged and replaced by
/// zeroed figures.
pub async fn fetch_dashboard_data(api: &dyn AnalyticsApi) -> DashboardStats {
    match api.dashboard().await {
        Ok(stats) => stats,
        Err(e) => {
            error!("Error loading dashboard data: {}", e);
            DashboardStats::zeroed()
        }
    }
}

/// Runs the mount sequence of the dashboard page.
///
/// Without a usable stored session this emits `redirect` and never touches the
/// analytics service. Otherwise the session is dispatched, the figures are
/// fetched once, and `StatsLoaded` is dispatched unless `guard` was cancelled
/// in the meantime.
pub async fn mount_dashboard(
    services: &Services,
    guard: &MountGuard,
    dispatch: &Callback<DashboardAction>,
    redirect: &Callback<()>,
) {
    if !guard.is_active() {
        return;
    }

    let Some(session) = restore_session(services.session.as_ref()) else {
        debug!("No session, redirecting to login");
        redirect.emit(());
        return;
    };
    dispatch.emit(DashboardAction::SessionRestored(session));

    let stats = fetch_dashboard_data(services.analytics.as_ref()).await;
    if guard.is_active() {
        dispatch.emit(DashboardAction::StatsLoaded(stats));
    } else {
        debug!("Dashboard unmounted before analytics arrived, discarding response");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemorySessionStore, MockAnalytics, Recorder};
    use futures::executor::block_on;
    use gcdl_shared::{Session, SharedError};
    use pretty_assertions::assert_eq;

    fn services(store: MemorySessionStore, api: &Rc<MockAnalytics>) -> Services {
        Services::new(Rc::new(store), api.clone())
    }

    #[test]
    fn test_fetch_failure_falls_back_to_zero() {
        let api = MockAnalytics::failing(SharedError::Network("connection refused".into()));
        assert_eq!(block_on(fetch_dashboard_data(&api)), DashboardStats::zeroed());
        assert_eq!(api.calls(), 1);
    }

    #[test]
    fn test_missing_session_redirects_without_fetching() {
        let api = Rc::new(MockAnalytics::succeeding(DashboardStats::zeroed()));
        let actions = Recorder::new();
        let redirects = Recorder::new();

        block_on(mount_dashboard(
            &services(MemorySessionStore::empty(), &api),
            &MountGuard::new(),
            &actions.callback(),
            &redirects.callback(),
        ));

        assert_eq!(redirects.len(), 1);
        assert!(actions.is_empty());
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn test_malformed_session_redirects_without_fetching() {
        let api = Rc::new(MockAnalytics::succeeding(DashboardStats::zeroed()));
        let redirects = Recorder::new();

        block_on(mount_dashboard(
            &services(MemorySessionStore::with_raw_session("not json"), &api),
            &MountGuard::new(),
            &Recorder::new().callback(),
            &redirects.callback(),
        ));

        assert_eq!(redirects.len(), 1);
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn test_stored_session_fetches_exactly_once() {
        let stats = DashboardStats {
            sales_count: 42,
            ..DashboardStats::zeroed()
        };
        let api = Rc::new(MockAnalytics::succeeding(stats));
        let actions = Recorder::new();
        let redirects = Recorder::new();
        let session = Session::new("Jane Doe", "admin");

        block_on(mount_dashboard(
            &services(MemorySessionStore::with_session(&session), &api),
            &MountGuard::new(),
            &actions.callback(),
            &redirects.callback(),
        ));

        assert_eq!(api.calls(), 1);
        assert!(redirects.is_empty());
        assert_eq!(
            actions.take(),
            vec![
                DashboardAction::SessionRestored(session),
                DashboardAction::StatsLoaded(stats),
            ]
        );
    }

    #[test]
    fn test_cancelled_guard_discards_response() {
        let guard = MountGuard::new();
        let api = Rc::new(
            MockAnalytics::succeeding(DashboardStats::zeroed()).cancelling(guard.clone()),
        );
        let actions = Recorder::new();

        block_on(mount_dashboard(
            &services(MemorySessionStore::with_session(&Session::new("Jane Doe", "admin")), &api),
            &guard,
            &actions.callback(),
            &Recorder::new().callback(),
        ));

        assert_eq!(api.calls(), 1);
        let recorded = actions.take();
        assert_eq!(recorded.len(), 1);
        assert!(matches!(recorded[0], DashboardAction::SessionRestored(_)));
    }

    #[test]
    fn test_guard_cancelled_before_mount_does_nothing() {
        let guard = MountGuard::new();
        guard.cancel();
        let api = Rc::new(MockAnalytics::succeeding(DashboardStats::zeroed()));
        let redirects = Recorder::new();

        block_on(mount_dashboard(
            &services(MemorySessionStore::empty(), &api),
            &guard,
            &Recorder::new().callback(),
            &redirects.callback(),
        ));

        assert!(redirects.is_empty());
        assert_eq!(api.calls(), 0);
    }

    #[test]
    fn test_guard_clones_share_state() {
        let guard = MountGuard::new();
        let task = guard.clone();
        assert!(task.is_active());
        guard.cancel();
        assert!(!task.is_active());
    }
}
