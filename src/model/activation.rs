/// The logistic function `1 / (1 + e^-z)`.
///
/// Evaluated on whichever side keeps the exponent non positive so it never overflows: it
/// saturates to exactly `0.` or `1.` for extreme `z` and never returns NaN for a finite
/// input.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0. {
        1. / (1. + (-z).exp())
    } else {
        let e = z.exp();
        e / (1. + e)
    }
}
