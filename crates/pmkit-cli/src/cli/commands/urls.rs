//! `pmkit urls` – REST and websocket base URLs.

use anyhow::Result;
use pmkit_core::config::AppEnv;
use pmkit_core::endpoint::{base_url, ws_base_url};
use pmkit_core::location::Location;

pub(super) fn urls_for(app: &AppEnv, origin: &str) -> Result<(String, String)> {
    let location = Location::parse(origin)?;
    Ok((base_url(app, &location), ws_base_url(app, &location)))
}

pub fn run_urls(app: &AppEnv, origin: &str) -> Result<()> {
    let (rest, ws) = urls_for(app, origin)?;
    println!("{:<6} {}", "rest", rest);
    println!("{:<6} {}", "ws", ws);
    Ok(())
}
