//! sportcalc MCP Server Implementation
//!
//! Implements the MCP server with the energy and sweat-rate calculator tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::activities::ActivityTable;
use crate::models::SweatInputs;
use crate::tools::energy::{self, EnergyRequest};
use crate::tools::status::StatusTracker;
use crate::tools::sweat;

/// sportcalc MCP Service
#[derive(Clone)]
pub struct SportcalcService {
    status_tracker: Arc<StatusTracker>,
    activities: Arc<ActivityTable>,
    tool_router: ToolRouter<SportcalcService>,
}

impl SportcalcService {
    pub fn new(activities_path: PathBuf, activities: ActivityTable) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(activities_path)),
            activities: Arc::new(activities),
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response, or turn a calculation rejection into a tool-level error
/// so the client sees the message and the session carries on.
fn respond<T: Serialize>(result: Result<T, String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let json = serde_json::to_string_pretty(&value)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        Err(message) => {
            debug!(%message, "Tool call rejected");
            Ok(CallToolResult::error(vec![Content::text(message)]))
        }
    }
}

// ============================================================================
// Activity Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListActivitiesParams {
    /// Category name exactly as returned by list_activity_categories
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetActivityParams {
    /// Specific activity name
    pub activity_name: String,
    /// Restrict the lookup to this category (optional)
    pub category: Option<String>,
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmrParams {
    /// Age in years (1-120)
    pub age_years: u32,
    /// Sex: M or F
    pub sex: String,
    /// Body weight in kg (30-200)
    pub weight_kg: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateEnergyParams {
    /// Age in years (1-120)
    pub age_years: u32,
    /// Sex: M or F
    pub sex: String,
    /// Body weight in kg (30-200)
    pub weight_kg: f64,
    /// Activity category
    pub category: String,
    /// Specific activity within the category
    pub activity_name: String,
    /// Daily hours spent on the activity (0-24, default 1.0)
    #[serde(default = "default_activity_hours")]
    pub activity_hours: f64,
    /// Physical activity level for the remaining hours (1.2-2.5, default 1.5)
    #[serde(default = "default_pal")]
    pub pal: f64,
}

fn default_activity_hours() -> f64 { 1.0 }
fn default_pal() -> f64 { 1.5 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateSweatRateParams {
    /// Body weight before exercise (kg)
    pub initial_weight_kg: f64,
    /// Body weight after exercise (kg)
    pub final_weight_kg: f64,
    /// Fluid consumed during exercise (ml)
    #[serde(default)]
    pub fluid_intake_ml: f64,
    /// Urine lost during exercise (ml)
    #[serde(default)]
    pub urine_loss_ml: f64,
    /// Exercise duration (minutes, > 0)
    pub duration_min: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl SportcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the sportcalc service including build info, activity dataset and process information")]
    fn sportcalc_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.activities);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for the 24h energy expenditure calculator: PAL explanation, input ranges and formulas. Call this before calculating energy expenditure.")]
    fn energy_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ENERGY_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ENERGY_INSTRUCTIONS)]))
    }

    #[tool(description = "Get instructions for the sweat rate calculator: inputs, formulas and the 2% hydration rule.")]
    fn sweat_rate_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SWEAT_RATE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SWEAT_RATE_INSTRUCTIONS)]))
    }

    // --- Activities ---

    #[tool(description = "List all activity categories in the MET reference table, sorted")]
    fn list_activity_categories(&self) -> Result<CallToolResult, McpError> {
        respond(Ok(energy::list_activity_categories(&self.activities)))
    }

    #[tool(description = "List the activities of one category with their MET values")]
    fn list_activities(&self, Parameters(p): Parameters<ListActivitiesParams>) -> Result<CallToolResult, McpError> {
        respond(energy::list_activities(&self.activities, &p.category))
    }

    #[tool(description = "Look up one activity by name, optionally within a category")]
    fn get_activity(&self, Parameters(p): Parameters<GetActivityParams>) -> Result<CallToolResult, McpError> {
        respond(energy::get_activity(&self.activities, &p.activity_name, p.category.as_deref()))
    }

    // --- Calculators ---

    #[tool(description = "Calculate basal metabolic rate (kcal/day) with the Schofield equations")]
    fn calculate_bmr(&self, Parameters(p): Parameters<CalculateBmrParams>) -> Result<CallToolResult, McpError> {
        respond(energy::calculate_bmr(p.age_years, &p.sex, p.weight_kg))
    }

    #[tool(description = "Calculate 24h total energy expenditure from BMR, a specific activity's METs and hours, and the general activity level (PAL). Returns the rest and activity components with a step-by-step breakdown.")]
    fn calculate_energy_expenditure(&self, Parameters(p): Parameters<CalculateEnergyParams>) -> Result<CallToolResult, McpError> {
        let request = EnergyRequest {
            age_years: p.age_years,
            sex: &p.sex,
            weight_kg: p.weight_kg,
            category: &p.category,
            activity_name: &p.activity_name,
            activity_hours: p.activity_hours,
            pal: p.pal,
        };
        respond(energy::calculate_energy_expenditure(&self.activities, &request))
    }

    #[tool(description = "Calculate sweat rate (ml/h and L/h) and body-weight loss percentage from pre/post exercise weight, fluid intake, urine loss and duration. Rejects inputs that produce a negative sweat loss.")]
    fn calculate_sweat_rate(&self, Parameters(p): Parameters<CalculateSweatRateParams>) -> Result<CallToolResult, McpError> {
        let inputs = SweatInputs {
            initial_weight_kg: p.initial_weight_kg,
            final_weight_kg: p.final_weight_kg,
            fluid_intake_ml: p.fluid_intake_ml,
            urine_loss_ml: p.urine_loss_ml,
            duration_min: p.duration_min,
        };
        respond(sweat::calculate_sweat_rate(inputs))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SportcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sportcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Sports Science Calculators".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Sports Science Calculators - 24h energy expenditure and sweat rate. \
                 IMPORTANT: Call energy_instructions before energy calculations and sweat_rate_instructions before sweat rate. \
                 Activities: list_activity_categories, list_activities, get_activity. \
                 Energy: calculate_bmr, calculate_energy_expenditure. \
                 Hydration: calculate_sweat_rate. \
                 Status: sportcalc_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
CODE,CATEGORY,MET,SPECIFIC-ACTIVITY
12050,Running,9.8,\"running, 6 mph (10 min/mile)\"
";

    fn service() -> SportcalcService {
        let table = ActivityTable::from_reader(SAMPLE.as_bytes()).unwrap();
        SportcalcService::new(PathBuf::from("data/compendium.csv"), table)
    }

    fn sweat_params(final_weight_kg: f64) -> CalculateSweatRateParams {
        CalculateSweatRateParams {
            initial_weight_kg: 80.0,
            final_weight_kg,
            fluid_intake_ml: 500.0,
            urine_loss_ml: 200.0,
            duration_min: 60.0,
        }
    }

    #[test]
    fn test_sweat_rate_success() {
        let result = service().calculate_sweat_rate(Parameters(sweat_params(79.0))).unwrap();
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_negative_sweat_is_tool_error_not_failure() {
        let result = service().calculate_sweat_rate(Parameters(sweat_params(81.0))).unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_energy_expenditure_tool() {
        let params = CalculateEnergyParams {
            age_years: 30,
            sex: "F".to_string(),
            weight_kg: 60.0,
            category: "Running".to_string(),
            activity_name: "running, 6 mph (10 min/mile)".to_string(),
            activity_hours: default_activity_hours(),
            pal: default_pal(),
        };
        let result = service().calculate_energy_expenditure(Parameters(params)).unwrap();
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_unknown_category_is_tool_error() {
        let params = ListActivitiesParams { category: "Swimming".to_string() };
        let result = service().list_activities(Parameters(params)).unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_status_is_shared_across_clones() {
        let service = service();
        let clone = service.clone();
        assert!(Arc::ptr_eq(&service.status_tracker, &clone.status_tracker));
        let result = clone.sportcalc_status().unwrap();
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_sweat_params_default_fluids() {
        let p: CalculateSweatRateParams = serde_json::from_str(
            r#"{"initial_weight_kg": 70, "final_weight_kg": 69, "duration_min": 60}"#,
        )
        .unwrap();
        assert_eq!(p.fluid_intake_ml, 0.0);
        assert_eq!(p.urine_loss_ml, 0.0);
    }
}
