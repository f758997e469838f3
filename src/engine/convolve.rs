//! Discrete convolution and renormalization
//!
//! The discrete linear convolution of two equal-step density arrays,
//! scaled by the step size, approximates the continuous convolution
//! `∫ f(t)·g(x−t) dt` - the density of the sum of two independent random
//! variables.

/// Direct discrete convolution of two equal-step density arrays.
///
/// `result[k] = step · Σ a[i]·b[k−i]`, output length
/// `a.len() + b.len() − 1`. O(N·M); no FFT acceleration.
pub fn convolve(a: &[f64], b: &[f64], step: f64) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut result = vec![0.0; a.len() + b.len() - 1];
    for (i, &av) in a.iter().enumerate() {
        for (j, &bv) in b.iter().enumerate() {
            result[i + j] += av * bv * step;
        }
    }
    result
}

/// Rescale a sampled density in place so it integrates to 1, correcting
/// the rounding error accumulated by discretization.
pub fn renormalize(values: &mut [f64], step: f64) {
    let area: f64 = values.iter().sum::<f64>() * step;
    if area > 0.0 {
        for v in values.iter_mut() {
            *v /= area;
        }
    }
}
