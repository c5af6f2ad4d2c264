//! Sample grids, and editing sampled values by hand.

/// When there are more samples than this, [`edit_samples`] also changes the samples next to the
/// edited one, so that the edit is visible.
const DENSE_SAMPLES: usize = 100;

/// The number of neighbours on each side changed by [`edit_samples`] when the samples are dense.
const EDIT_RADIUS: usize = 3;

/// Returns `n` evenly spaced values from `start` to `end`, inclusive.
///
/// ```
/// use plotty_function::sampling::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// assert!(linspace(2.0, 3.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        },
    }
}

/// Sets the sample nearest to `x` to the value `y`. If there are many samples, the samples next to
/// it are set as well.
///
/// `xs` must be sorted in ascending order. Nothing happens if `x` is outside of the sampled range.
pub fn edit_samples(xs: &[f64], ys: &mut [f64], x: f64, y: f64) {
    let (Some(first), Some(last)) = (xs.first(), xs.last()) else {
        return;
    };
    if x < *first || x > *last || xs.len() != ys.len() {
        return;
    }

    let closest = xs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(i, _)| i)
        .unwrap_or(0);

    if xs.len() > DENSE_SAMPLES {
        let start = closest.saturating_sub(EDIT_RADIUS);
        let end = (closest + EDIT_RADIUS).min(ys.len() - 1);
        ys[start..=end].iter_mut().for_each(|sample| *sample = y);
    } else {
        ys[closest] = y;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn default_grid() {
        let xs = linspace(-PI, PI, 1024);
        assert_eq!(xs.len(), 1024);
        assert_eq!(xs[0], -PI);
        assert_eq!(xs[1023], PI);
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn edit_sparse() {
        let xs = linspace(0.0, 4.0, 5);
        let mut ys = vec![0.0; 5];
        edit_samples(&xs, &mut ys, 2.2, 7.0);
        assert_eq!(ys, vec![0.0, 0.0, 7.0, 0.0, 0.0]);
    }

    #[test]
    fn edit_dense() {
        let xs = linspace(0.0, 200.0, 201);
        let mut ys = vec![0.0; 201];
        edit_samples(&xs, &mut ys, 50.0, 1.0);
        let changed = ys.iter()
            .enumerate()
            .filter(|(_, y)| **y == 1.0)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        assert_eq!(changed, vec![47, 48, 49, 50, 51, 52, 53]);
    }

    #[test]
    fn edit_dense_at_edges() {
        let xs = linspace(0.0, 200.0, 201);
        let mut ys = vec![0.0; 201];
        edit_samples(&xs, &mut ys, 0.0, 1.0);
        edit_samples(&xs, &mut ys, 200.0, 2.0);
        assert_eq!(&ys[..5], &[1.0, 1.0, 1.0, 1.0, 0.0]);
        assert_eq!(&ys[196..], &[0.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn edit_out_of_range() {
        let xs = linspace(0.0, 4.0, 5);
        let mut ys = vec![0.0; 5];
        edit_samples(&xs, &mut ys, -1.0, 7.0);
        edit_samples(&xs, &mut ys, 4.5, 7.0);
        assert_eq!(ys, vec![0.0; 5]);
    }
}
