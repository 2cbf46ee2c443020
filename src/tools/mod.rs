//! MCP tools registered on the server and helper functions for the router.
//!
//! The scaffold ships with no tools; `mcpwizard tool add <name>` generates a
//! tool module here and a matching `#[tool]` method on the server.

use rmcp::handler::server::router::tool::ToolRouter;

pub type ServerToolRouter<S> = ToolRouter<S>;

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}
