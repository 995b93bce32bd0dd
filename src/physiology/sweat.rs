//! Sweat rate from body-mass change
//!
//! Body-mass loss during exercise, corrected for fluid drunk and urine passed, is taken
//! as the sweat volume (1 g == 1 ml).

use tracing::debug;

use super::error::{ensure_finite, ensure_non_negative, ensure_positive, CalcError, CalcResult};
use super::units::{kg_to_g, ml_to_l, per_minute_to_per_hour};
use crate::models::{HydrationStatus, SweatInputs, SweatResult};

/// Calculate the sweat-rate breakdown for one session.
///
/// # Errors
///
/// - `CalcError::InvalidInput` for negative or non-finite inputs, a non-positive duration,
///   or inputs so large that an intermediate result overflows
/// - `CalcError::NegativeSweatLoss` when intake and urine corrections leave a negative total
/// - `CalcError::DivisionByZero` when the initial weight is 0 (percentage undefined)
pub fn sweat_rate(inputs: &SweatInputs) -> CalcResult<SweatResult> {
    let initial_kg = ensure_non_negative("initial_weight_kg", inputs.initial_weight_kg)?;
    let final_kg = ensure_non_negative("final_weight_kg", inputs.final_weight_kg)?;
    let intake_ml = ensure_non_negative("fluid_intake_ml", inputs.fluid_intake_ml)?;
    let urine_ml = ensure_non_negative("urine_loss_ml", inputs.urine_loss_ml)?;
    let duration_min = ensure_positive("duration_min", inputs.duration_min)?;

    // Subtract in kg first so equal weights give exactly 0 g at any magnitude
    let weight_diff_g = ensure_finite("weight_diff_g", kg_to_g(initial_kg - final_kg))?;
    let total_sweat_ml = ensure_finite("total_sweat_ml", weight_diff_g + intake_ml - urine_ml)?;

    if total_sweat_ml < 0.0 {
        debug!(total_sweat_ml, "rejecting negative sweat loss");
        return Err(CalcError::NegativeSweatLoss { total_sweat_ml });
    }

    let sweat_rate_ml_per_h =
        ensure_finite("sweat_rate_ml_per_h", per_minute_to_per_hour(total_sweat_ml, duration_min))?;

    if initial_kg == 0.0 {
        return Err(CalcError::DivisionByZero("initial_weight_kg"));
    }
    let weight_loss_pct =
        ensure_finite("weight_loss_pct", ((initial_kg - final_kg) / initial_kg) * 100.0)?;

    Ok(SweatResult {
        weight_diff_g,
        total_sweat_ml,
        sweat_rate_ml_per_h,
        sweat_rate_l_per_h: ml_to_l(sweat_rate_ml_per_h),
        weight_loss_pct,
        hydration: HydrationStatus::classify(weight_loss_pct),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(initial: f64, final_: f64, intake: f64, urine: f64, minutes: f64) -> SweatInputs {
        SweatInputs {
            initial_weight_kg: initial,
            final_weight_kg: final_,
            fluid_intake_ml: intake,
            urine_loss_ml: urine,
            duration_min: minutes,
        }
    }

    #[test]
    fn test_reference_session() {
        let r = sweat_rate(&inputs(80.0, 79.0, 500.0, 200.0, 60.0)).unwrap();
        assert!((r.weight_diff_g - 1000.0).abs() < 1e-9);
        assert!((r.total_sweat_ml - 1300.0).abs() < 1e-9);
        assert!((r.sweat_rate_ml_per_h - 1300.0).abs() < 1e-9);
        assert!((r.sweat_rate_l_per_h - 1.3).abs() < 1e-9);
        assert!((r.weight_loss_pct - 1.25).abs() < 1e-9);
        assert_eq!(r.hydration, HydrationStatus::Adequate);
    }

    #[test]
    fn test_rate_scales_with_duration() {
        let r = sweat_rate(&inputs(70.0, 69.5, 250.0, 0.0, 45.0)).unwrap();
        // 500 g + 250 ml over 45 min = 1000 ml/h
        assert!((r.sweat_rate_ml_per_h - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_weight_gain_without_fluid_offset_is_rejected() {
        let err = sweat_rate(&inputs(70.0, 70.5, 0.0, 0.0, 60.0)).unwrap_err();
        match err {
            CalcError::NegativeSweatLoss { total_sweat_ml } => {
                assert!((total_sweat_ml + 500.0).abs() < 1e-6)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_urine_exceeding_loss_is_rejected() {
        assert!(matches!(
            sweat_rate(&inputs(70.0, 69.9, 0.0, 300.0, 60.0)),
            Err(CalcError::NegativeSweatLoss { .. })
        ));
    }

    #[test]
    fn test_zero_sweat_is_accepted() {
        let r = sweat_rate(&inputs(70.0, 70.0, 0.0, 0.0, 30.0)).unwrap();
        assert_eq!(r.total_sweat_ml, 0.0);
        assert_eq!(r.sweat_rate_ml_per_h, 0.0);
        assert_eq!(r.weight_loss_pct, 0.0);
    }

    #[test]
    fn test_zero_initial_weight_is_division_error() {
        assert_eq!(
            sweat_rate(&inputs(0.0, 0.0, 500.0, 0.0, 60.0)),
            Err(CalcError::DivisionByZero("initial_weight_kg"))
        );
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(matches!(
            sweat_rate(&inputs(70.0, 69.0, 0.0, 0.0, 0.0)),
            Err(CalcError::InvalidInput { field: "duration_min", .. })
        ));
        assert!(matches!(
            sweat_rate(&inputs(70.0, 69.0, -1.0, 0.0, 60.0)),
            Err(CalcError::InvalidInput { field: "fluid_intake_ml", .. })
        ));
        assert!(sweat_rate(&inputs(f64::INFINITY, 69.0, 0.0, 0.0, 60.0)).is_err());
    }

    #[test]
    fn test_large_loss_is_excessive() {
        // 2 kg of 70 kg = 2.86 %
        let r = sweat_rate(&inputs(70.0, 68.0, 0.0, 0.0, 120.0)).unwrap();
        assert!(r.weight_loss_pct > 2.0);
        assert_eq!(r.hydration, HydrationStatus::Excessive);
    }

    #[test]
    fn test_huge_equal_weights_stay_finite() {
        let r = sweat_rate(&inputs(1e306, 1e306, 0.0, 0.0, 60.0)).unwrap();
        assert_eq!(r.weight_diff_g, 0.0);
        assert_eq!(r.total_sweat_ml, 0.0);
        assert_eq!(r.sweat_rate_ml_per_h, 0.0);
        assert_eq!(r.weight_loss_pct, 0.0);
        assert_eq!(r.hydration, HydrationStatus::Adequate);
    }

    #[test]
    fn test_overflowing_inputs_are_rejected_or_finite() {
        let cases = [
            inputs(1e306, 0.0, 0.0, 0.0, 60.0),
            inputs(70.0, 69.0, f64::MAX, 0.0, 60.0),
            inputs(70.0, 69.0, 1e307, 0.0, 1e-300),
            inputs(f64::MAX, 1.0, 0.0, 0.0, 60.0),
        ];
        for case in &cases {
            match sweat_rate(case) {
                Ok(r) => {
                    assert!(r.weight_diff_g.is_finite());
                    assert!(r.total_sweat_ml.is_finite());
                    assert!(r.sweat_rate_ml_per_h.is_finite());
                    assert!(r.sweat_rate_l_per_h.is_finite());
                    assert!(r.weight_loss_pct.is_finite());
                }
                Err(err) => assert!(matches!(err, CalcError::InvalidInput { .. }), "{:?}", err),
            }
        }
        assert!(matches!(
            sweat_rate(&inputs(1e306, 0.0, 0.0, 0.0, 60.0)),
            Err(CalcError::InvalidInput { field: "weight_diff_g", .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let i = inputs(64.3, 63.1, 750.0, 120.0, 95.0);
        assert_eq!(sweat_rate(&i), sweat_rate(&i));
    }
}
