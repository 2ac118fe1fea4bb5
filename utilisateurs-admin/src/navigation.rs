//! Routing table and navigator
//!
//! Views are addressed by path:
//!
//! | Path                     | View                |
//! |--------------------------|---------------------|
//! | `/`                      | home                |
//! | `/{resource}`            | list                |
//! | `/{resource}/new`        | create form         |
//! | `/{resource}/{id}/edit`  | edit form           |
//!
//! Any other path redirects to home.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use shared::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    List(Resource),
    New(Resource),
    Edit(Resource, i64),
}

impl Route {
    /// Resolve a path against the routing table
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let Some(resource) = segments.first().and_then(|s| s.parse::<Resource>().ok()) else {
            return Route::Home;
        };
        // singular or mixed-case spellings are not routes
        if segments[0] != resource.as_str() {
            return Route::Home;
        }

        match segments[1..] {
            [] => Route::List(resource),
            ["new"] => Route::New(resource),
            [id, "edit"] => match id.parse() {
                Ok(id) => Route::Edit(resource, id),
                Err(_) => Route::Home,
            },
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::List(resource) => format!("/{}", resource),
            Route::New(resource) => format!("/{}/new", resource),
            Route::Edit(resource, id) => format!("/{}/{}/edit", resource, id),
        }
    }

    pub fn resource(&self) -> Option<Resource> {
        match self {
            Route::Home => None,
            Route::List(r) | Route::New(r) | Route::Edit(r, _) => Some(*r),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug)]
struct NavigatorState {
    current: watch::Sender<Route>,
    history: Mutex<Vec<Route>>,
}

/// Current route holder; clones share the same state
#[derive(Debug, Clone)]
pub struct Navigator {
    state: Arc<NavigatorState>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        let (current, _) = watch::channel(start);
        Self {
            state: Arc::new(NavigatorState {
                current,
                history: Mutex::new(vec![start]),
            }),
        }
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(path = %route, "navigate");
        self.state
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
        // always notify, returning to the same path counts as a navigation
        self.state.current.send_replace(route);
    }

    /// Navigate once `delay` has elapsed
    pub fn navigate_after(&self, route: Route, delay: Duration) -> JoinHandle<()> {
        let navigator = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(route);
        })
    }

    pub fn current(&self) -> Route {
        *self.state.current.borrow()
    }

    /// Every route visited, oldest first
    pub fn history(&self) -> Vec<Route> {
        self.state
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.state.current.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_table() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/vacataires"), Route::List(Resource::Vacataires));
        assert_eq!(Route::parse("/enseignants/new"), Route::New(Resource::Enseignants));
        assert_eq!(
            Route::parse("/etudiants/12/edit"),
            Route::Edit(Resource::Etudiants, 12)
        );
    }

    #[test]
    fn test_unknown_paths_redirect_home() {
        for path in [
            "/roles",
            "/vacataires/abc/edit",
            "/vacataires/3",
            "/vacataire",
            "/etudiants/new/extra",
        ] {
            assert_eq!(Route::parse(path), Route::Home, "{path}");
        }
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::List(Resource::Enseignants),
            Route::New(Resource::Vacataires),
            Route::Edit(Resource::Etudiants, 5),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_navigate_records_history_and_notifies() {
        let navigator = Navigator::default();
        let rx = navigator.subscribe();

        navigator.navigate(Route::List(Resource::Vacataires));
        navigator.navigate(Route::List(Resource::Vacataires));

        assert_eq!(navigator.current(), Route::List(Resource::Vacataires));
        assert_eq!(navigator.history().len(), 3);
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_after_waits_for_delay() {
        let navigator = Navigator::default();
        let handle = navigator.navigate_after(
            Route::List(Resource::Vacataires),
            Duration::from_millis(2500),
        );

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(navigator.current(), Route::Home);

        handle.await.unwrap();
        assert_eq!(navigator.current(), Route::List(Resource::Vacataires));
    }
}
