pub mod config;
pub mod logging;

pub mod download;
pub mod endpoint;
pub mod filename;
pub mod location;
pub mod perms;
pub mod sets;
