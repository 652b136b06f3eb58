use super::bands::TargetBand;

/// 目標範囲の検証エラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{name} must be a finite number, got {value}")]
    NonFiniteBound { name: &'static str, value: f32 },

    #[error("{name} lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange { name: &'static str, lower: f32, upper: f32 },
}

fn ensure_finite(name: &'static str, value: f32) -> Result<f32, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFiniteBound { name, value })
    }
}

pub fn parse_range(name: &'static str, lower: f32, upper: f32) -> Result<TargetBand, ValidationError> {
    let lower = ensure_finite(name, lower)?;
    let upper = ensure_finite(name, upper)?;
    if lower > upper {
        return Err(ValidationError::InvertedRange { name, lower, upper });
    }
    Ok(TargetBand::range(lower, upper))
}

pub fn parse_floor(name: &'static str, lower: f32) -> Result<TargetBand, ValidationError> {
    Ok(TargetBand::floor(ensure_finite(name, lower)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_bounds_are_accepted() {
        assert_eq!(parse_range("humidity", 0.5, 0.5), Ok(TargetBand::range(0.5, 0.5)));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = parse_range("temperature", 30.0, 5.0);
        assert!(matches!(result, Err(ValidationError::InvertedRange { name: "temperature", .. })));
    }

    #[test]
    fn test_nan_bound_is_rejected() {
        assert!(parse_range("temperature", f32::NAN, 5.0).is_err());
        assert!(parse_floor("soil", f32::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let inverted = parse_range("humidity", 0.7, 0.6).unwrap_err();
        assert_eq!(inverted.to_string(), "humidity lower bound 0.7 exceeds upper bound 0.6");

        let nan = parse_floor("soil", f32::NAN).unwrap_err();
        assert_eq!(nan.to_string(), "soil must be a finite number, got NaN");
    }

    #[test]
    fn test_floor_has_no_upper_bound() {
        let band = parse_floor("light", 0.6).unwrap();
        assert!(band.is_floor());
    }
}
