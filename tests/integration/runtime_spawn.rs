use std::{process::Stdio, time::Duration};

use anyhow::{Context, Result};
use rmcp::{model::ClientInfo, serve_client};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    net::TcpStream,
    process::Command,
    time::{sleep, timeout},
};

use crate::common::{fixture, spawn_server_process, BINARY_PATH};

#[tokio::test]
async fn startup_line_precedes_protocol_frames() -> Result<()> {
    let (mut child, startup_line, transport, stderr_task) = spawn_server_process().await?;
    assert_eq!(startup_line, "🚀 Starting the MCP server...");

    let client = serve_client(ClientInfo::default(), transport).await?;
    let list = client.list_tools(None).await?;
    assert!(
        list.tools.is_empty(),
        "scaffold must expose no tools until `mcpwizard tool add` runs: {:?}",
        list.tools
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[tokio::test]
async fn sse_transport_serves_on_configured_port() -> Result<()> {
    let mut child = Command::new(BINARY_PATH)
        .args(["--transport", "sse"])
        .env(
            "MCP_CONFIG_PATH",
            fixture("tests/fixtures/config_valid.toml"),
        )
        .stdout(Stdio::piped())
        .stdin(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to spawn server process")?;

    let stdout = child.stdout.take().expect("child stdout");
    let mut reader = BufReader::new(stdout);
    let mut startup_line = String::new();
    timeout(Duration::from_secs(5), reader.read_line(&mut startup_line))
        .await
        .context("timed out waiting for startup line")??;
    assert_eq!(startup_line.trim_end(), "🚀 Starting the MCP server...");

    // The SSE listener binds after the startup line, so retry briefly.
    let mut connected = false;
    for _ in 0..50 {
        if TcpStream::connect(("127.0.0.1", 8123)).await.is_ok() {
            connected = true;
            break;
        }
        sleep(Duration::from_millis(100)).await;
    }
    assert!(
        connected,
        "SSE listener should accept connections on the configured port"
    );

    child.kill().await.context("failed to stop server")?;
    Ok(())
}

#[tokio::test]
async fn serve_blocks_until_client_shutdown() -> Result<()> {
    let (mut child, _startup_line, transport, stderr_task) = spawn_server_process().await?;

    let client = serve_client(ClientInfo::default(), transport).await?;

    // The handshake succeeded and the child is still serving.
    assert!(
        child.try_wait()?.is_none(),
        "server must keep blocking while a client is connected"
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}
