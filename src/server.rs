//! MCP server implementation
//!
//! `WeatherServer` is the `ServerHandler` registered with the transport; tool
//! listing and dispatch live in [`crate::tools`].

use crate::tools;
use crate::weather::WeatherLookup;
use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::*;
use rmcp::service::{RequestContext, RoleServer};
use std::sync::Arc;

/// Name the server announces during initialization
pub const SERVER_NAME: &str = "weather_server";

#[derive(Clone)]
pub struct WeatherServer {
    lookup: Arc<WeatherLookup>,
}

impl WeatherServer {
    pub fn new(lookup: WeatherLookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    pub fn shared_lookup(&self) -> Arc<WeatherLookup> {
        Arc::clone(&self.lookup)
    }
}

impl ServerHandler for WeatherServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2025_03_26,
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Weather MCP Server".into()),
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Provides current weather conditions and forecasts from wttr.in. \
                 Call get_weather_info with a proper city name such as London or Tokyo; \
                 the result is the raw wttr.in JSON document."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let result = tools::list_tools()?;
        tracing::debug!("ListTools returning {} tools", result.tools.len());
        Ok(result)
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("CallTool {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        tools::call_tool(&self.lookup, &request.name, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherConfig;

    #[test]
    fn test_get_info_returns_correct_metadata() {
        let server = WeatherServer::new(WeatherLookup::new(&WeatherConfig::default()).unwrap());
        let info = server.get_info();

        assert_eq!(info.server_info.name, "weather_server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(
            info.instructions
                .as_deref()
                .is_some_and(|i| i.contains("get_weather_info"))
        );
    }

    #[test]
    fn test_clones_share_one_lookup() {
        let server = WeatherServer::new(WeatherLookup::new(&WeatherConfig::default()).unwrap());
        let clone = server.clone();
        assert!(Arc::ptr_eq(&server.shared_lookup(), &clone.shared_lookup()));
    }
}
