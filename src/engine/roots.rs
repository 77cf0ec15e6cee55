//! Locating real roots of a function of one variable numerically.

use crate::engine::EngineError;

/// Sign changes and exact zeros are looked for between consecutive points
/// of a grid spaced logarithmically from ±1e-4 to ±1e7 (plus zero), then
/// refined by bisection. Roots come back largest first.
pub(super) fn find_roots<F>(f: F) -> Result<Vec<f64>, EngineError>
where
    F: Fn(f64) -> Result<f64, EngineError>,
{
    let mut roots = Vec::new();
    let mut previous: Option<(f64, f64)> = None;

    for x in sample_points() {
        let y = f(x)?;
        if !y.is_finite() {
            previous = None;
            continue;
        }

        if y == 0.0 {
            roots.push(x);
        } else if let Some((a, fa)) = previous {
            if fa != 0.0 && fa.signum() != y.signum() {
                if let Some(root) = bisect(&f, a, fa, x, y)? {
                    roots.push(root);
                }
            }
        }

        previous = Some((x, y));
    }

    Ok(tidy(roots))
}

fn sample_points() -> Vec<f64> {
    let mut points = vec![0.0];

    for exponent in -4..=6 {
        let scale = 10f64.powi(exponent);
        // mantissas 1.00, 1.25, ... 9.75
        for step in 4..40 {
            let magnitude = step as f64 * 0.25 * scale;
            points.push(magnitude);
            points.push(-magnitude);
        }
    }

    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup();
    points
}

fn bisect<F>(f: &F, low: f64, f_low: f64, high: f64, f_high: f64) -> Result<Option<f64>, EngineError>
where
    F: Fn(f64) -> Result<f64, EngineError>,
{
    let (mut a, mut fa, mut b) = (low, f_low, high);

    for _ in 0..200 {
        let middle = a + (b - a) / 2.0;
        if middle <= a || middle >= b {
            break;
        }

        let f_middle = f(middle)?;
        if f_middle == 0.0 {
            return Ok(Some(middle));
        }
        if !f_middle.is_finite() {
            return Ok(None);
        }

        if f_middle.signum() == fa.signum() {
            a = middle;
            fa = f_middle;
        } else {
            b = middle;
        }
    }

    let root = a + (b - a) / 2.0;
    let residual = f(root)?;

    // A sign change across a pole converges onto the pole, where the
    // function is anything but small.
    let tolerance = 1e-6 * f_low
        .abs()
        .max(f_high.abs())
        .max(1.0);
    if residual.is_finite() && residual.abs() <= tolerance {
        Ok(Some(root))
    } else {
        Ok(None)
    }
}

fn tidy(mut roots: Vec<f64>) -> Vec<f64> {
    for root in roots.iter_mut() {
        let nearest = root.round();
        if (*root - nearest).abs()
            <= 1e-9 * nearest
                .abs()
                .max(1.0)
        {
            *root = nearest;
        }
        if *root == 0.0 {
            // no negative zero
            *root = 0.0;
        }
    }

    roots.sort_by(|a, b| b.total_cmp(a));
    roots.dedup_by(|a, b| (*a - *b).abs() <= 1e-9 * a.abs().max(1.0));
    roots
}
