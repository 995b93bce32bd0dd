//! sportcalc Status Tool
//!
//! Runtime status of the service and the usage guides returned by the instruction tools.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::activities::ActivityTable;
use crate::build_info::BuildInfo;

/// Energy expenditure instructions for AI assistants
pub const ENERGY_INSTRUCTIONS: &str = r#"
# 24h Energy Expenditure Calculator

Estimates daily energy expenditure from:
1. Basal metabolic rate (Schofield equations)
2. One specific physical activity (METs from the activity table)
3. General activity level (PAL)

## Step-by-Step Workflow

### 1. Pick the activity

```
list_activity_categories()
list_activities(category: "Running")
```

Each activity is returned with its MET value, e.g. `running, 6 mph (10 min/mile) (9.8 METs)`.
Use `category` and `activity_name` exactly as returned.

### 2. Calculate

```
calculate_energy_expenditure(
  age_years: 30,
  sex: "M",
  weight_kg: 70,
  category: "Running",
  activity_name: "running, 6 mph (10 min/mile)",
  activity_hours: 1.0,
  pal: 1.5
)
```

Use `calculate_bmr(age_years, sex, weight_kg)` when only the basal rate is needed.

## Input Ranges

| Field | Range |
|-------|-------|
| age_years | 1-120 |
| sex | M or F |
| weight_kg | 30-200 |
| activity_hours | 0-24 in steps of 0.5 (e.g. 1.25 is rejected) |
| pal | 1.2-2.5 (steps of 0.1; values like 1.45 are accepted) |

## PAL Explanation

- **1.2:** Bed rest
- **1.2-1.6:** Sedentary (office work, little exercise)
- **1.6-2.0:** Active (regular exercise)
- **>2.0:** Very active (intense physical work)

## Formulas

```
rest_hours         = 24 - activity_hours
rest_component     = BMR × PAL × (rest_hours / 24)
activity_component = MET × weight_kg × activity_hours
total              = rest_component + activity_component
```

Results are reported unrounded plus display strings rounded to whole kcal.

## Important Notes

1. These are estimates based on standard equations
2. For more precision, consult a nutrition professional
3. PAL applies to the hours not spent on the selected exercise (general activity and sleep)
4. MET values are reference averages
5. Individual metabolism varies
"#;

/// Sweat rate instructions for AI assistants
pub const SWEAT_RATE_INSTRUCTIONS: &str = r#"
# Sweat Rate Calculator

Estimates sweat rate (ml/h) from body weight measured before and after training.

## Inputs

| Field | Meaning | Range |
|-------|---------|-------|
| initial_weight_kg | Body weight before exercise | >= 0 |
| final_weight_kg | Body weight after exercise | >= 0 |
| fluid_intake_ml | Fluid drunk during exercise | >= 0 |
| urine_loss_ml | Urine passed during exercise | >= 0 |
| duration_min | Exercise duration in minutes | > 0 |

## Example

```
calculate_sweat_rate(
  initial_weight_kg: 80,
  final_weight_kg: 79,
  fluid_intake_ml: 500,
  urine_loss_ml: 200,
  duration_min: 60
)
```

Returns 1000 g weight difference, 1300 ml total sweat, 1300 ml/h (1.30 L/h), 1.25 % loss.

## Formulas

```
weight_diff_g   = (initial_kg - final_kg) × 1000
total_sweat_ml  = weight_diff_g + fluid_intake_ml - urine_loss_ml
sweat_rate_ml_h = total_sweat_ml / duration_min × 60
weight_loss_pct = (initial_kg - final_kg) / initial_kg × 100
```

## Hydration Rule

- Loss ≤ 2 % of body weight: adequate hydration
- Loss > 2 %: excessive loss, adjust hydration

## Rejections

- A negative total sweat loss means the inputs are inconsistent. Check the values.
- An initial weight of 0 cannot produce a percentage.

Based on GSSI and ACSM field guidance.
"#;

/// Runtime status of the sportcalc service
#[derive(Debug, Clone, Serialize)]
pub struct SportcalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Activity dataset information
    pub activities_path: String,
    pub activity_count: usize,
    pub category_count: usize,
    /// Rows in the dataset bundled with this build
    pub bundled_activity_count: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    activities_path: PathBuf,
}

impl StatusTracker {
    pub fn new(activities_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            activities_path,
        }
    }

    pub fn get_status(&self, table: &ActivityTable) -> SportcalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        SportcalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            activities_path: self.activities_path.display().to_string(),
            activity_count: table.len(),
            category_count: table.categories().len(),
            bundled_activity_count: build_info.bundled_activities,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
