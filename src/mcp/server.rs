//! nutricalc MCP Server Implementation
//!
//! Exposes the nutrition calculator as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::nutrition::{NutrientDatabase, DEFAULT_SERVINGS};
use crate::tools::ingredients;
use crate::tools::recipes;
use crate::tools::status::StatusTracker;

/// nutricalc MCP Service
#[derive(Clone)]
pub struct NutricalcService {
    status_tracker: Arc<StatusTracker>,
    database: Arc<NutrientDatabase>,
    tool_router: ToolRouter<NutricalcService>,
}

impl NutricalcService {
    pub fn new(database: Arc<NutrientDatabase>, dataset_source: impl Into<String>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(dataset_source)),
            database,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateNutritionParams {
    /// Ingredient lines, e.g. ["1 cup quinoa", "2 tbsp olive oil"]
    pub ingredients: Vec<String>,
    /// Number of servings the recipe makes (positive integer, default 1)
    #[serde(default = "default_servings")]
    pub servings: i64,
}

fn default_servings() -> i64 { DEFAULT_SERVINGS }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseIngredientParams {
    /// A single ingredient line
    pub line: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupIngredientParams {
    /// Ingredient name to resolve
    pub name: String,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutricalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the nutricalc service including build info, reference dataset and process information")]
    async fn nutricalc_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.database);
        to_json(&status)
    }

    #[tool(description = "Get instructions for writing ingredient lines and reading nutrition results. Call this when unsure how lines are parsed or matched.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::NUTRITION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    // --- Recipes ---

    #[tool(description = "Calculate nutrition per serving for a list of ingredient lines. Unmatched ingredients contribute zero and are listed in 'unresolved'.")]
    fn calculate_nutrition(&self, Parameters(p): Parameters<CalculateNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::calculate_nutrition(&self.database, &p.ingredients, p.servings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        self.status_tracker.record_calculation();
        to_json(&result)
    }

    #[tool(description = "Calculate nutrition per serving and show how every line was parsed, converted to grams and matched")]
    fn explain_nutrition(&self, Parameters(p): Parameters<CalculateNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::explain_nutrition(&self.database, &p.ingredients, p.servings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        self.status_tracker.record_calculation();
        to_json(&result)
    }

    // --- Ingredients ---

    #[tool(description = "Parse a single ingredient line into amount, unit and name, and convert it to grams")]
    fn parse_ingredient(&self, Parameters(p): Parameters<ParseIngredientParams>) -> Result<CallToolResult, McpError> {
        to_json(&ingredients::parse_ingredient_line(&p.line))
    }

    #[tool(description = "Resolve an ingredient name to its reference nutrition profile (per 100g)")]
    fn lookup_ingredient(&self, Parameters(p): Parameters<LookupIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = ingredients::lookup_ingredient(&self.database, &p.name)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List reference ingredients in match priority order, plus the generic category rules")]
    fn list_reference_ingredients(&self) -> Result<CallToolResult, McpError> {
        to_json(&ingredients::list_reference_ingredients(&self.database))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutricalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutricalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Recipe Nutrition Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "nutricalc - Nutrition facts per serving from recipe ingredient lines. \
                 Call nutrition_instructions for the line format. \
                 Recipes: calculate_nutrition, explain_nutrition. \
                 Ingredients: parse_ingredient, lookup_ingredient, list_reference_ingredients. \
                 Status: nutricalc_status."
                    .into(),
            ),
        }
    }
}
