//! Calories MCP Server Implementation
//!
//! Registers the calorie form tools and serves them. The service owns a
//! single form session; every tool call locks it for the duration of the call.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use crate::form::CalorieForm;
use crate::tools::form;
use crate::tools::status::StatusTracker;
use crate::tools::FormError;

/// Calories MCP Service
#[derive(Clone)]
pub struct CaloriesService {
    status_tracker: Arc<StatusTracker>,
    form: Arc<Mutex<CalorieForm>>,
    tool_router: ToolRouter<CaloriesService>,
}

impl CaloriesService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            form: Arc::new(Mutex::new(CalorieForm::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn lock_form(&self) -> Result<MutexGuard<'_, CalorieForm>, McpError> {
        self.form
            .lock()
            .map_err(|e| McpError::internal_error(format!("Form session unavailable: {}", e), None))
    }
}

impl Default for CaloriesService {
    fn default() -> Self {
        Self::new()
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid_params(e: FormError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetWeightParams {
    /// Weight text as typed, in whole kilograms (e.g. "70"). Invalid or empty text reads as 0.
    pub weight: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectGenderParams {
    /// Gender: male (m) or female (f)
    pub gender: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectIntensityParams {
    /// Activity level: light, usual, moderate, hard, very_hard
    pub intensity: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateCaloriesParams {
    /// Weight text in whole kilograms. Invalid or empty text reads as 0.
    #[serde(default)]
    pub weight: String,
    /// Gender: male or female (default male)
    pub gender: Option<String>,
    /// Activity level: light, usual, moderate, hard, very_hard (default light)
    pub intensity: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CaloriesService {
    // --- Status ---

    #[tool(description = "Get the current status of the calories service: version, form session summary and process information")]
    fn calories_status(&self) -> Result<CallToolResult, McpError> {
        let session = self.lock_form()?;
        json_result(&self.status_tracker.get_status(&session))
    }

    #[tool(description = "Get instructions for using the calorie form tools. Call this when unsure how the form behaves.")]
    fn form_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::FORM_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(FORM_INSTRUCTIONS)]))
    }

    // --- Form ---

    #[tool(description = "Get everything the calorie form currently shows: weight text, gender, activity level and the last calculated result")]
    fn get_form(&self) -> Result<CallToolResult, McpError> {
        let session = self.lock_form()?;
        json_result(&form::get_form(&session))
    }

    #[tool(description = "Set the weight field text (kilograms). Does not recalculate the result.")]
    fn set_weight(&self, Parameters(p): Parameters<SetWeightParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.lock_form()?;
        json_result(&form::set_weight(&mut session, &p.weight))
    }

    #[tool(description = "Select the gender category (male or female). Does not recalculate the result.")]
    fn select_gender(&self, Parameters(p): Parameters<SelectGenderParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.lock_form()?;
        let result = form::select_gender(&mut session, &p.gender).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "Select the activity level (light, usual, moderate, hard, very_hard). Does not recalculate the result.")]
    fn select_intensity(&self, Parameters(p): Parameters<SelectIntensityParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.lock_form()?;
        let result = form::select_intensity(&mut session, &p.intensity).map_err(invalid_params)?;
        json_result(&result)
    }

    #[tool(description = "List the activity levels with their multipliers, marking the selected one")]
    fn list_intensity_levels(&self) -> Result<CallToolResult, McpError> {
        let session = self.lock_form()?;
        json_result(&form::list_intensity_levels(&session))
    }

    #[tool(description = "Press the calculate button: estimate calories burned from the current form values and show the result")]
    fn calculate(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.lock_form()?;
        let response = form::calculate(&mut session);
        self.status_tracker.record_calculation();
        json_result(&response)
    }

    #[tool(description = "Estimate calories burned from the given values without changing the form")]
    fn estimate_calories(&self, Parameters(p): Parameters<EstimateCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = form::estimate_calories(&p.weight, p.gender.as_deref(), p.intensity.as_deref())
            .map_err(invalid_params)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CaloriesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "calories".into(),
                version: crate::tools::status::VERSION.into(),
                title: Some("Calorie Burn Estimator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Calorie burn estimator with a single form. \
                 Call form_instructions first. \
                 Form: set_weight, select_gender, select_intensity, list_intensity_levels, calculate, get_form. \
                 Editing inputs never updates the result; call calculate. \
                 One-off: estimate_calories. Status: calories_status."
                    .into(),
            ),
        }
    }
}
