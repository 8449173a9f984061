//! Route reconciliation: decides whether a route update means "load
//! something new" or "the address display must catch up with what is
//! already loaded".

use crate::model::Locator;

/// Who initiated a route update. External navigations are followed with a
/// load; internal updates only correct the displayed route, which is what
/// keeps a completed load from re-triggering its own fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOrigin {
    External,
    Internal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteAction {
    /// Load the algorithm at the requested locator.
    Load(Locator),
    /// Rewrite the displayed route to match the loaded locator without
    /// fetching anything.
    CorrectRoute(String),
    Stay,
}

pub fn arbitrate(requested: &Locator, origin: RouteOrigin, loaded: &Locator) -> RouteAction {
    if requested == loaded {
        return RouteAction::Stay;
    }
    match origin {
        RouteOrigin::External => RouteAction::Load(requested.clone()),
        RouteOrigin::Internal => RouteAction::CorrectRoute(route_for(loaded)),
    }
}

pub fn route_for(locator: &Locator) -> String {
    match locator {
        Locator::Catalog {
            category_key,
            algorithm_key,
        } => format!("/{}/{}", category_key, algorithm_key),
        Locator::Gist { gist_id } => format!("/scratch-paper/{}", gist_id),
        Locator::None => "/".to_string(),
    }
}

pub fn parse_route(route: &str) -> Locator {
    let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["scratch-paper", gist_id] => Locator::gist(*gist_id),
        [category_key, algorithm_key] => Locator::catalog(*category_key, *algorithm_key),
        _ => Locator::None,
    }
}
