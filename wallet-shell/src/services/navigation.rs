//! Router-backed [`Navigator`].

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::header::{NavigationRequest, Navigator};

/// Dispatches navigation requests to the `leptos_router` history.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn dispatch(&self, request: NavigationRequest) {
        log::debug!("navigate -> {}", request.path());
        (self.navigate)(request.path(), NavigateOptions::default());
    }
}

/// Grab the router's navigate function. Must be called under a `<Router>`.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator {
        navigate: use_navigate(),
    }
}
