//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{build_launch_args, resolve_config_path, resolve_transport, LaunchProfile, TransportMode};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Starter MCP server scaffolded by mcpwizard",
    long_about = None
)]
pub struct LaunchArgs {
    /// Select stdio (default) or sse. Overrides MCP_TRANSPORT.
    #[arg(long, value_enum)]
    pub transport: Option<TransportMode>,
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_path(self.config_override)?;
        let transport = resolve_transport(self.transport)?;
        let launch_args = build_launch_args(transport, &config_path);

        Ok(LaunchProfile {
            config_path,
            transport,
            launch_args,
        })
    }
}
