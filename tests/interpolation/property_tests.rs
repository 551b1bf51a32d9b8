use approx::assert_relative_eq;
use divdiff::interpolation::errors::InterpolationError;
use divdiff::interpolation::newton::evaluate;
use divdiff::interpolation::table::divided_differences;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

type DivDiffResult = Result<(), InterpolationError>;

const CASES: usize = 64;

/// Well separated nodes, shuffled so they are not sorted.
fn random_samples(rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    let n = rng.gen_range(1..=8);
    let mut x: Vec<f64> = (0..n).map(|i| i as f64 + rng.gen_range(0.0..0.5)).collect();
    x.shuffle(rng);
    let y: Vec<f64> = (0..n).map(|_| rng.gen_range(-5.0..5.0)).collect();
    (x, y)
}

#[test]
fn passes_through_every_sample() -> DivDiffResult {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let (x, y) = random_samples(&mut rng);
        let coeffs = divided_differences(&x, &y)?;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(evaluate(&x, &coeffs, xi)?, yi, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn sample_order_does_not_change_values() -> DivDiffResult {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..CASES {
        let (x, y) = random_samples(&mut rng);

        let mut perm: Vec<usize> = (0..x.len()).collect();
        perm.shuffle(&mut rng);
        let xp: Vec<f64> = perm.iter().map(|&i| x[i]).collect();
        let yp: Vec<f64> = perm.iter().map(|&i| y[i]).collect();

        let c  = divided_differences(&x, &y)?;
        let cp = divided_differences(&xp, &yp)?;

        for _ in 0..8 {
            let q = rng.gen_range(0.0..x.len() as f64);
            assert_relative_eq!(
                evaluate(&x, &c, q)?,
                evaluate(&xp, &cp, q)?,
                epsilon = 1e-8,
                max_relative = 1e-8
            );
        }
    }
    Ok(())
}

#[test]
fn single_sample_is_constant_everywhere() -> DivDiffResult {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..CASES {
        let x0 = rng.gen_range(-100.0..100.0);
        let y0 = rng.gen_range(-100.0..100.0);
        let c  = divided_differences(&[x0], &[y0])?;
        let q  = rng.gen_range(-1e6..1e6);
        assert_eq!(evaluate(&[x0], &c, q)?, y0);
    }
    Ok(())
}
