use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler, tool_router,
};

use crate::tools::{self, ServerToolRouter};

/// Display name advertised to MCP clients.
///
/// Fixed at construction time; nothing in this crate mutates it afterwards.
pub const SERVER_NAME: &str = "example-server";

/// The scaffolded MCP server.
///
/// Constructing it has no side effects: no output, no I/O, no blocking.
/// Serving only happens through the runtime entry point.
#[derive(Clone)]
pub struct ExampleServer {
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
}

impl ExampleServer {
    pub fn new(instructions: String) -> Self {
        Self {
            instructions: Arc::new(instructions),
            tool_router: tools::build_router(Self::tool_router),
        }
    }

    /// Number of tools currently registered on the router.
    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }
}

// Tools registered by `mcpwizard tool add` land in this block.
#[tool_router(router = tool_router)]
impl ExampleServer {}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ExampleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }
}
