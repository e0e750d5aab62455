use crate::decode::{classify, exponent_field, Class};
use crate::error::{ExpDistError, Result};
use crate::layout::FloatLayout;
use tracing::debug;

/// Returns the unbiased exponent of every normal value in `words`, in input order.
///
/// Zeros, subnormals, infinities and NaNs are dropped without being counted
/// anywhere in the result. Callers who need those counts must classify the
/// words themselves.
pub fn extract(words: &[u64], layout: FloatLayout) -> Result<Vec<i32>> {
    if words.is_empty() {
        return Err(ExpDistError::EmptyInput);
    }

    let unbiased: Vec<i32> = words
        .iter()
        .map(|&bits| exponent_field(bits, layout))
        .filter(|&field| classify(field, layout) == Class::Normal)
        .map(|field| field as i32 - layout.bias())
        .collect();

    debug!(
        "{} of {} values are normal, {} special values dropped",
        unbiased.len(),
        words.len(),
        words.len() - unbiased.len()
    );

    if unbiased.is_empty() {
        return Err(ExpDistError::NoNormalValues);
    }
    Ok(unbiased)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FloatFormat;

    #[test]
    fn one_has_zero_exponent_and_zero_is_dropped() {
        let layout = FloatFormat::Float32.layout();
        let words = [1.0_f32, 0.0, 8.0, 0.25]
            .map(|v| v.to_bits() as u64)
            .to_vec();
        assert_eq!(extract(&words, layout).unwrap(), vec![0, 3, -2]);
    }

    #[test]
    fn half_precision_fields() {
        let layout = FloatFormat::Float16.layout();
        // field 16, field 31 (infinity), field 31 with mantissa (NaN), field 1
        let words = vec![16_u64 << 10, 31 << 10, (31 << 10) | 1, 1 << 10];
        assert_eq!(extract(&words, layout).unwrap(), vec![1, -14]);
    }

    #[test]
    fn sign_does_not_matter() {
        let layout = FloatFormat::Float64.layout();
        let words = vec![(-3.0_f64).to_bits(), 3.0_f64.to_bits()];
        assert_eq!(extract(&words, layout).unwrap(), vec![1, 1]);
    }

    #[test]
    fn empty_and_all_special_inputs_fail() {
        let layout = FloatFormat::Float32.layout();
        assert!(matches!(extract(&[], layout), Err(ExpDistError::EmptyInput)));

        let specials = [0.0_f32, -0.0, f32::INFINITY, f32::NAN, 1.0e-40]
            .map(|v| v.to_bits() as u64)
            .to_vec();
        assert!(matches!(
            extract(&specials, layout),
            Err(ExpDistError::NoNormalValues)
        ));
    }
}
