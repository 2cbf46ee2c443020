use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "Scaffolded MCP server with no tools registered yet; waiting in {transport} mode (host={host}, port={port}). Run `mcpwizard tool add <name>` to register your first tool.",
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port
    )
}
