use std::{
    process::{Command as StdCommand, Stdio},
    time::Duration,
};

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    process::Command,
    time::timeout,
};

use crate::common::{fixture, BINARY_PATH};

#[test]
fn unknown_transport_env_value_fails_fast() {
    let output = StdCommand::new(BINARY_PATH)
        .env("MCP_TRANSPORT", "websocket")
        .stdin(Stdio::null())
        .output()
        .expect("binary should run");

    assert!(
        !output.status.success(),
        "an unknown transport must fail startup"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown transport"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("Starting the MCP server"),
        "no startup line may appear on a failed launch: {stdout}"
    );
}

#[test]
fn invalid_config_port_fails_startup() {
    let output = StdCommand::new(BINARY_PATH)
        .env(
            "MCP_CONFIG_PATH",
            fixture("tests/fixtures/config_invalid_port.toml"),
        )
        .stdin(Stdio::null())
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("server.port"), "stderr: {stderr}");
}

#[tokio::test]
async fn config_flag_overrides_environment_path() -> Result<()> {
    let temp = tempfile::tempdir().context("can create temporary directory")?;
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "[server]\nhost = \"127.0.0.1\"\nport = 9155\n")
        .context("can write config file")?;

    let mut child = Command::new(BINARY_PATH)
        .arg("--config")
        .arg(&config_path)
        .env(
            "MCP_CONFIG_PATH",
            fixture("tests/fixtures/config_invalid_port.toml"),
        )
        .stdout(Stdio::piped())
        .stdin(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to spawn server process")?;

    // The invalid port in MCP_CONFIG_PATH must be ignored in favor of the
    // --config override, so the server reaches its startup line.
    let stdout = child.stdout.take().expect("child stdout");
    let mut reader = BufReader::new(stdout);
    let mut startup_line = String::new();
    timeout(Duration::from_secs(5), reader.read_line(&mut startup_line))
        .await
        .context("timed out waiting for startup line")??;
    assert_eq!(startup_line.trim_end(), "🚀 Starting the MCP server...");

    child.kill().await.context("failed to stop server")?;
    Ok(())
}
