use divdiff::interpolation::errors::InterpolationError;
use divdiff::interpolation::newton::{interpolate, NewtonCfg};

#[test]
fn unequal_length_error() {
    let x   = [0.0, 1.0, 2.0];
    let y   = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::ShapeMismatch { x_len: 3, y_len: 2 }));
}

#[test]
fn unequal_length_error_y_first() {
    let x   = [0.0, 1.0];
    let y   = [0.0, 1.0, 2.0];
    let cfg = NewtonCfg::new().set_y(&y).unwrap();
    let err = cfg.set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::ShapeMismatch { x_len: 2, y_len: 3 }));
}

#[test]
fn duplicate_x_error() {
    let x   = [0.0, 2.0, 0.0];
    let err = NewtonCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateNode { first: 0, second: 2, x }
        if x == 0.0));
}

#[test]
fn unsorted_nodes_accepted() {
    let x = [3.0, 1.0, 2.0];
    assert!(NewtonCfg::new().set_x(&x).is_ok());
}

#[test]
fn tolerance_rechecks_existing_nodes() {
    let x   = [0.0, 1e-13, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = cfg.set_x_tol(1e-12).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateNode { first: 0, second: 1, .. }));
}

#[test]
fn tolerance_applies_to_later_nodes() {
    let x   = [0.0, 0.05, 1.0];
    let err = NewtonCfg::new()
        .set_x_tol(0.1).unwrap()
        .set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateNode { first: 0, second: 1, .. }));
}

#[test]
fn invalid_tolerance() {
    let err = NewtonCfg::new().set_x_tol(f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { .. }));

    let err = NewtonCfg::new().set_x_tol(-1e-9).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == -1e-9));
}

#[test]
fn empty_vectors_rejected() {
    let err = NewtonCfg::new().set_x(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientData { got: 0, need: 1 }));

    let err = NewtonCfg::new().set_y(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientData { got: 0, need: 1 }));
}

#[test]
fn non_finite_rejected() {
    let err = NewtonCfg::new().set_y(&[0.0, f64::NEG_INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));

    let err = NewtonCfg::new().set_x_eval(&[f64::NAN]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));
}

#[test]
fn missing_y_rejected_at_run() {
    let x   = [0.0, 1.0];
    let cfg = NewtonCfg::new().set_x(&x).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientData { got: 0, need: 1 }));
}
