//! Energy Expenditure MCP Tools
//!
//! Tools for browsing the activity table and calculating BMR and 24h energy expenditure.

use serde::Serialize;
use tracing::{info, warn};

use crate::activities::{format_mets, ActivityRecord, ActivityTable};
use crate::models::{validate_pal, ActivitySelection, EnergyResult, PalBand, PersonalProfile, Sex};
use crate::physiology::{schofield_bmr, total_energy_expenditure, SchofieldBracket};

// ============================================================================
// Response Structs
// ============================================================================

/// Response for list_activity_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<String>,
    pub total: usize,
}

/// Activity as presented in pickers
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummary {
    pub id: String,
    pub category: String,
    pub activity_name: String,
    pub mets: f64,
    pub label: String,
}

impl From<&ActivityRecord> for ActivitySummary {
    fn from(record: &ActivityRecord) -> Self {
        Self {
            id: record.id.clone(),
            category: record.category.clone(),
            activity_name: record.activity_name.clone(),
            mets: record.mets,
            label: record.label(),
        }
    }
}

/// Response for list_activities
#[derive(Debug, Serialize)]
pub struct ListActivitiesResponse {
    pub category: String,
    pub activities: Vec<ActivitySummary>,
    pub total: usize,
}

/// Response for calculate_bmr
#[derive(Debug, Serialize)]
pub struct BmrResponse {
    pub profile: PersonalProfile,
    pub equation: String,
    pub bmr_kcal: f64,
    pub display: String,
    pub calculated_at: String,
}

/// Rounded values for display
#[derive(Debug, Serialize)]
pub struct EnergyDisplay {
    pub bmr: String,
    pub activity_energy: String,
    pub total_energy: String,
}

/// Response for calculate_energy_expenditure
#[derive(Debug, Serialize)]
pub struct EnergyExpenditureResponse {
    pub profile: PersonalProfile,
    pub activity: ActivitySummary,
    pub pal_band: PalBand,
    pub pal_band_description: String,
    pub result: EnergyResult,
    pub display: EnergyDisplay,
    pub breakdown: Vec<String>,
    pub calculated_at: String,
}

/// Everything the energy form collects
#[derive(Debug, Clone)]
pub struct EnergyRequest<'a> {
    pub age_years: u32,
    pub sex: &'a str,
    pub weight_kg: f64,
    pub category: &'a str,
    pub activity_name: &'a str,
    pub activity_hours: f64,
    pub pal: f64,
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_sex(sex: &str) -> Result<Sex, String> {
    Sex::from_str(sex).ok_or_else(|| format!("Invalid sex: '{}'. Valid values: M, F", sex))
}

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn format_kcal(kcal: f64) -> String {
    format!("{:.0} kcal", kcal)
}

/// Step-by-step lines showing how the total was reached
pub fn energy_breakdown(result: &EnergyResult) -> Vec<String> {
    vec![
        format!("Sleep and general activity hours: {:.1}h", result.rest_hours),
        format!(
            "Sleep and general activity component: {:.0} × {} × ({:.1}/24) = {:.0} kcal",
            result.bmr_kcal, result.pal, result.rest_hours, result.rest_component_kcal
        ),
        format!("Exercise hours: {:.1}h", result.activity_hours),
        format!(
            "Exercise component: {} METs × {}kg × {:.1}h = {:.0} kcal",
            format_mets(result.mets),
            result.weight_kg, result.activity_hours, result.activity_component_kcal
        ),
    ]
}

// ============================================================================
// Tool Functions
// ============================================================================

/// List the activity categories in sorted order
pub fn list_activity_categories(table: &ActivityTable) -> ListCategoriesResponse {
    let categories: Vec<String> = table.categories().into_iter().map(String::from).collect();
    let total = categories.len();
    ListCategoriesResponse { categories, total }
}

/// List the activities of one category
pub fn list_activities(table: &ActivityTable, category: &str) -> Result<ListActivitiesResponse, String> {
    let activities: Vec<ActivitySummary> = table
        .by_category(category)
        .into_iter()
        .map(ActivitySummary::from)
        .collect();

    if activities.is_empty() {
        return Err(format!(
            "Unknown category: '{}'. Use list_activity_categories to see valid categories.",
            category
        ));
    }

    let total = activities.len();
    Ok(ListActivitiesResponse {
        category: category.to_string(),
        activities,
        total,
    })
}

/// Look up a single activity by name, optionally constrained to a category
pub fn get_activity(
    table: &ActivityTable,
    activity_name: &str,
    category: Option<&str>,
) -> Result<ActivitySummary, String> {
    let record = match category {
        Some(category) => table.find(category, activity_name),
        None => table.find_by_name(activity_name),
    };

    record.map(ActivitySummary::from).ok_or_else(|| match category {
        Some(category) => format!("Activity '{}' not found in category '{}'", activity_name, category),
        None => format!("Activity '{}' not found", activity_name),
    })
}

/// Calculate basal metabolic rate for a profile
pub fn calculate_bmr(age_years: u32, sex: &str, weight_kg: f64) -> Result<BmrResponse, String> {
    let sex = parse_sex(sex)?;
    let profile = PersonalProfile::new(age_years, sex, weight_kg).map_err(|e| e.to_string())?;

    let bmr_kcal = schofield_bmr(profile.age_years, profile.sex, profile.weight_kg)
        .map_err(|e| e.to_string())?;
    let bracket = SchofieldBracket::for_age(profile.age_years);
    let (slope, intercept) = bracket.coefficients(profile.sex);

    Ok(BmrResponse {
        profile,
        equation: format!(
            "Schofield {} {}: {} × W {} {}",
            profile.sex.as_str(),
            bracket.as_str(),
            slope,
            if intercept < 0.0 { "-" } else { "+" },
            intercept.abs()
        ),
        bmr_kcal,
        display: format_kcal(bmr_kcal),
        calculated_at: now_timestamp(),
    })
}

/// Calculate 24h energy expenditure from profile, selected activity and PAL
pub fn calculate_energy_expenditure(
    table: &ActivityTable,
    request: &EnergyRequest<'_>,
) -> Result<EnergyExpenditureResponse, String> {
    let sex = parse_sex(request.sex)?;
    let profile =
        PersonalProfile::new(request.age_years, sex, request.weight_kg).map_err(|e| e.to_string())?;
    let selection = ActivitySelection::new(request.category, request.activity_name, request.activity_hours)
        .map_err(|e| e.to_string())?;
    let pal = validate_pal(request.pal).map_err(|e| e.to_string())?;

    let record = table
        .find(&selection.category, &selection.activity_name)
        .ok_or_else(|| {
            warn!(
                category = %selection.category,
                activity = %selection.activity_name,
                "Unknown activity selection"
            );
            format!(
                "Activity '{}' not found in category '{}'",
                selection.activity_name, selection.category
            )
        })?;

    let bmr = schofield_bmr(profile.age_years, profile.sex, profile.weight_kg)
        .map_err(|e| e.to_string())?;
    let result = total_energy_expenditure(bmr, pal, record.mets, profile.weight_kg, selection.hours)
        .map_err(|e| e.to_string())?;

    info!(
        activity = %record.activity_name,
        total_kcal = result.total_kcal,
        "Calculated energy expenditure"
    );

    let pal_band = PalBand::classify(pal);

    Ok(EnergyExpenditureResponse {
        profile,
        activity: ActivitySummary::from(record),
        pal_band,
        pal_band_description: pal_band.description().to_string(),
        display: EnergyDisplay {
            bmr: format_kcal(result.bmr_kcal),
            activity_energy: format_kcal(result.activity_component_kcal),
            total_energy: format_kcal(result.total_kcal),
        },
        breakdown: energy_breakdown(&result),
        result,
        calculated_at: now_timestamp(),
    })
}
