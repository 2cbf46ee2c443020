use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::{Context, Error};
use rmcp::{transport::sse_server::SseServer, ServiceExt};

use crate::{
    cli::{LaunchProfile, TransportMode},
    lib::telemetry,
    server::{
        config::ServerConfig,
        runtime::{build_instructions, ExampleServer},
    },
};

/// Fixed status line written to stdout before the server starts serving.
pub const STARTUP_MESSAGE: &str = "🚀 Starting the MCP server...";

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Start the MCP server and select stdio/SSE based on the launch profile.
///
/// This is the only code path with entry-point side effects: library
/// consumers construct `ExampleServer` directly and never see the startup
/// line. The call blocks until the server shuts down or fails.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&profile, &config);
    let server = ExampleServer::new(instructions.clone());

    telemetry::emit_runtime_mode(&telemetry::RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        host: Some(config.server.host.as_str()),
        port: Some(config.server.port),
        config_path: config.source_path.to_string_lossy().as_ref(),
        tool_count: server.tool_count(),
        instructions: &instructions,
        launch_args: &profile.launch_args,
    });

    println!("{STARTUP_MESSAGE}");

    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
        TransportMode::Sse => run_sse(server, &config).await,
    }
}

async fn run_stdio(server: ExampleServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_sse(server: ExampleServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid SSE bind address {}:{}",
                config.server.host, config.server.port
            )
        })
        .map_err(RuntimeExit::from_error)?;
    let sse_server = SseServer::serve(addr)
        .await
        .with_context(|| format!("failed to bind SSE listener on {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "example_server::runtime",
        transport = "sse",
        bind_addr = %addr,
        "Started listening in SSE mode"
    );

    let shutdown = sse_server.with_service(move || server.clone());
    shutdown.cancelled().await;
    Ok(())
}
