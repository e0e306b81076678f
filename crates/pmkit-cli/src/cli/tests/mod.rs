//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["pmkit", "urls", "--config", "/etc/pmkit.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/pmkit.toml"))
    );
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["pmkit", "status"]).is_err());
}
