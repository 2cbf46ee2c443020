//! LaunchProfile and transport/config resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;

const DEFAULT_CONFIG: &str = "config.toml";
const MCP_CONFIG_ENV: &str = "MCP_CONFIG_PATH";
const MCP_TRANSPORT_ENV: &str = "MCP_TRANSPORT";

/// MCP transport mode.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TransportMode {
    Stdio,
    Sse,
}

impl TransportMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Stdio => "stdio",
            TransportMode::Sse => "sse",
        }
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: PathBuf,
    pub transport: TransportMode,
    pub launch_args: Vec<String>,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = override_path
        .or_else(|| env::var_os(MCP_CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

/// Resolve transport in the order: CLI override → env var → stdio.
///
/// Stdio is the shipped default; deploy tooling switches to SSE by
/// exporting `MCP_TRANSPORT=sse` instead of rewriting the source.
pub fn resolve_transport(override_mode: Option<TransportMode>) -> Result<TransportMode> {
    if let Some(mode) = override_mode {
        return Ok(mode);
    }

    match env::var(MCP_TRANSPORT_ENV) {
        Ok(value) if !value.trim().is_empty() => parse_transport(value.trim()),
        _ => Ok(TransportMode::Stdio),
    }
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(transport: TransportMode, config: &Path) -> Vec<String> {
    vec![
        format!("--transport={}", transport.as_str()),
        format!("--config={}", config.display()),
    ]
}

fn parse_transport(raw: &str) -> Result<TransportMode> {
    match raw.to_ascii_lowercase().as_str() {
        "stdio" => Ok(TransportMode::Stdio),
        "sse" => Ok(TransportMode::Sse),
        other => Err(anyhow!(
            "unknown transport `{other}`: expected `stdio` or `sse`"
        )),
    }
}
