//! MCP tool catalogue and dispatch
//!
//! The server exposes a single tool, `get_weather_info`, which forwards its
//! `location` argument to [`WeatherLookup::get_weather_info`].

use crate::weather::WeatherLookup;
use rmcp::ErrorData as McpError;
use rmcp::model::*;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const GET_WEATHER_INFO: &str = "get_weather_info";

const GET_WEATHER_INFO_DESCRIPTION: &str = "Get Weather information for a given location. \
    The location needs to be a proper city name like London, Tokyo etc.";

/// Arguments of the `get_weather_info` tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetWeatherInfoArgs {
    /// The location for which to get the weather information.
    /// The location needs to be a proper city name like London, Tokyo etc.
    pub location: String,
}

fn to_schema<T: JsonSchema>() -> Result<Arc<JsonObject>, McpError> {
    let schema = schema_for!(T);
    let json_value = serde_json::to_value(schema).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize schema: {}", e), None)
    })?;
    let object = json_value
        .as_object()
        .ok_or_else(|| McpError::internal_error("Schema is not a JSON object", None))?
        .clone();
    Ok(Arc::new(object))
}

/// List all available tools
pub fn list_tools() -> Result<ListToolsResult, McpError> {
    Ok(ListToolsResult {
        tools: vec![Tool {
            name: GET_WEATHER_INFO.into(),
            title: Some("Weather lookup".into()),
            description: Some(GET_WEATHER_INFO_DESCRIPTION.into()),
            input_schema: to_schema::<GetWeatherInfoArgs>()?,
            output_schema: None,
            annotations: None,
            icons: None,
        }],
        next_cursor: None,
    })
}

/// Call a tool by name with given arguments
///
/// Lookup failures are reported inside the result with `is_error` set, so the
/// host hands the message back to the caller; protocol misuse (unknown tool,
/// malformed arguments) is an MCP error instead.
pub async fn call_tool(
    lookup: &WeatherLookup,
    tool_name: &str,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    match tool_name {
        GET_WEATHER_INFO => {
            let args: GetWeatherInfoArgs =
                serde_json::from_value(serde_json::Value::Object(arguments)).map_err(|e| {
                    McpError::invalid_params(format!("Invalid arguments: {}", e), None)
                })?;

            match lookup.get_weather_info(&args.location).await {
                Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
                Err(e) => {
                    tracing::warn!("get_weather_info('{}') failed: {}", args.location, e);
                    Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
                }
            }
        }
        _ => Err(McpError::method_not_found::<CallToolRequestMethod>()),
    }
}
