//! Generic helpers for applying normalizers across containers.
//!
//! The per-shape normalizers are assembled from these building blocks: a
//! keyed structure is normalized field by field with [`normalize_field`],
//! a sequence element-wise with [`normalize_sequence`], and a transform
//! that only applies to some shapes with [`normalize_if`]. All three are
//! pure and propagate the supplied normalizer's error unwrapped.

use crate::error::UnrecognizedFormatError;

/// Applies `normalize` to every element of `values`, preserving order and
/// length. The first rejected element aborts the whole sequence.
pub fn normalize_sequence<T, U, E>(
    values: impl IntoIterator<Item = T>,
    normalize: impl FnMut(T) -> Result<U, E>,
) -> Result<Vec<U>, E> {
    values.into_iter().map(normalize).collect()
}

/// Applies `normalize` to `value` when `accepts` holds; passes the value
/// through untouched otherwise.
pub fn normalize_if<T, E>(
    value: T,
    accepts: impl FnOnce(&T) -> bool,
    normalize: impl FnOnce(T) -> Result<T, E>,
) -> Result<T, E> {
    if accepts(&value) {
        normalize(value)
    } else {
        Ok(value)
    }
}

/// Applies `normalize` to a field's value when present, retagging any
/// rejection with the field's name. Absent fields stay absent.
pub fn normalize_field<T, U>(
    field: &'static str,
    value: Option<T>,
    normalize: impl FnOnce(T) -> Result<U, UnrecognizedFormatError>,
) -> Result<Option<U>, UnrecognizedFormatError> {
    value
        .map(|value| normalize(value).map_err(|error| error.for_field(field)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_even(value: u64) -> Result<u64, UnrecognizedFormatError> {
        if value % 2 == 0 {
            Ok(value * 2)
        } else {
            Err(UnrecognizedFormatError::new("number", &value))
        }
    }

    #[test]
    fn sequence_preserves_order_and_length() -> anyhow::Result<()> {
        let normalized = normalize_sequence([0u64, 2, 4], double_even)?;
        assert_eq!(normalized, vec![0, 4, 8]);

        Ok(())
    }

    #[test]
    fn sequence_stops_at_first_rejection() {
        let error = normalize_sequence([0u64, 3, 4], double_even).unwrap_err();
        assert_eq!(error.value, "3");
    }

    #[test]
    fn conditional_only_applies_when_accepted() -> anyhow::Result<()> {
        let doubled = normalize_if(2u64, |value| *value == 2, double_even)?;
        assert_eq!(doubled, 4);

        let untouched = normalize_if(7u64, |value| *value == 2, double_even)?;
        assert_eq!(untouched, 7);

        Ok(())
    }

    #[test]
    fn absent_fields_stay_absent() -> anyhow::Result<()> {
        assert_eq!(normalize_field("count", None, double_even)?, None);
        assert_eq!(normalize_field("count", Some(2), double_even)?, Some(4));

        Ok(())
    }

    #[test]
    fn field_rejections_carry_the_field_name() {
        let error = normalize_field("count", Some(3), double_even).unwrap_err();
        assert_eq!(error.to_string(), "count is not in a recognized format: 3");
    }
}
