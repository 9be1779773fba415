use material_property_toolbox::pipe_stress::{
    bend_correction_factor, evaluate, hoop_stress, inner_radius, water_dynamic_viscosity,
    PipeStressError, PipeStressInput,
};
use material_property_toolbox::units::{convert_pressure, from_pa, to_pa, PressureUnit};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn default_input() -> PipeStressInput {
    PipeStressInput {
        outer_diameter_m: 1.0,
        thickness_m: 0.01,
        internal_pressure_pa: to_pa(10.0, PressureUnit::Atm),
        external_pressure_pa: to_pa(1.0, PressureUnit::Atm),
        bend_radius_m: None,
        safety_factor: 1.0,
    }
}

#[test]
fn hoop_stress_thin_wall() {
    // (10 - 1) atm × 1 m / (2 × 0.01 m)
    let s = hoop_stress(1_013_250.0, 101_325.0, 1.0, 0.01);
    assert_close("hoop", s, 45_596_250.0, 1e-12);
    assert_close("r_in", inner_radius(1.0, 0.01), 0.49, 1e-12);
}

#[test]
fn copper_yield_passes_straight_pipe() {
    let res = evaluate(&default_input(), 69.0e6).expect("stress calc");
    assert_close("correction", res.correction_factor, 1.0, 1e-12);
    assert_close("hoop", res.hoop_stress_pa, 45_596_250.0, 1e-9);
    assert_close("r_mean", res.mean_radius_m, 0.495, 1e-12);
    assert!(res.passes);
}

#[test]
fn safety_factor_can_fail_design() {
    let input = PipeStressInput {
        safety_factor: 2.0,
        ..default_input()
    };
    let res = evaluate(&input, 69.0e6).expect("stress calc");
    assert_close("adjusted", res.adjusted_yield_pa, 34.5e6, 1e-12);
    assert!(!res.passes);
}

#[test]
fn tight_bend_raises_stress() {
    let r_mean = 0.495;
    let i = bend_correction_factor(1.5, 0.01, r_mean);
    let h: f64 = 1.5 * 0.01 / (r_mean * r_mean);
    assert_close("i", i, 0.9 / h.powf(2.0 / 3.0), 1e-12);
    assert!(i > 1.0);

    let input = PipeStressInput {
        bend_radius_m: Some(1.5),
        ..default_input()
    };
    let res = evaluate(&input, 69.0e6).expect("stress calc");
    assert_close("bent hoop", res.hoop_stress_pa, i * 45_596_250.0, 1e-9);
}

#[test]
fn gentle_bend_is_clamped_to_one() {
    assert_close("i", bend_correction_factor(1000.0, 0.05, 0.1), 1.0, 1e-12);
}

#[test]
fn invalid_geometry_is_rejected() {
    let too_thick = PipeStressInput {
        thickness_m: 0.6,
        ..default_input()
    };
    assert!(matches!(
        evaluate(&too_thick, 1.0e8),
        Err(PipeStressError::InvalidInput(_))
    ));
    let no_safety = PipeStressInput {
        safety_factor: 0.0,
        ..default_input()
    };
    assert!(evaluate(&no_safety, 1.0e8).is_err());
    let bad_bend = PipeStressInput {
        bend_radius_m: Some(0.0),
        ..default_input()
    };
    assert!(evaluate(&bad_bend, 1.0e8).is_err());
}

#[test]
fn water_viscosity_at_room_temperature() {
    // 25 °C, 1 atm 물 ≈ 0.89 mPa·s
    let mu = water_dynamic_viscosity(298.15, 101_325.0).expect("IF97");
    assert_close("mu", mu, 8.9e-4, 0.02);
    assert!(water_dynamic_viscosity(-1.0, 101_325.0).is_err());
}

#[test]
fn pressure_units() {
    assert_close("atm", to_pa(1.0, PressureUnit::Atm), 101_325.0, 1e-12);
    assert_close("MPa", to_pa(345.6, PressureUnit::MegaPascal), 345.6e6, 1e-12);
    assert_close("psi", convert_pressure(14.5038, PressureUnit::Psi, PressureUnit::Bar), 1.0, 1e-4);
    assert_close("kPa", from_pa(2_500.0, PressureUnit::KiloPascal), 2.5, 1e-12);
    assert_eq!("MPa".parse::<PressureUnit>(), Ok(PressureUnit::MegaPascal));
    assert_eq!(" kpa ".parse::<PressureUnit>(), Ok(PressureUnit::KiloPascal));
    assert!("furlong".parse::<PressureUnit>().is_err());
}
