//! REST and websocket base URLs.
//!
//! A configured host wins over the page location; the namespace, if any, is
//! appended as a single path segment. Returned strings never end in `/`.

use crate::config::AppEnv;
use crate::location::Location;

fn join(base: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("{base}/{ns}"),
        None => base.to_string(),
    }
}

/// Base URL of the backend REST API.
pub fn base_url(app: &AppEnv, location: &Location) -> String {
    match app.host() {
        Some(host) => join(host, app.namespace()),
        None => join(&location.to_string(), app.namespace()),
    }
}

/// Base URL of the backend websocket endpoint (`wss://` when the page is served over https).
pub fn ws_base_url(app: &AppEnv, location: &Location) -> String {
    if let Some(host) = app.ws_host() {
        return join(host, app.ws_namespace());
    }

    let scheme = if location.is_secure() { "wss" } else { "ws" };
    let base = format!("{scheme}://{}", location.host);
    join(&base, app.ws_namespace())
}
