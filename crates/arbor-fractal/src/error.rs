use std::fmt;

/// Rejected tree parameter.
///
/// Both variants describe a configuration under which branch lengths would
/// not shrink below the cutoff, so generation could never terminate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    /// Shrink factor outside the open interval `(0, 1)`.
    ShrinkFactor(f32),
    /// Minimum branch length that is not a finite positive number.
    MinLength(f32),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::ShrinkFactor(v) => {
                write!(f, "shrink factor must lie in (0, 1), got {v}")
            }
            ParamError::MinLength(v) => {
                write!(f, "minimum branch length must be finite and positive, got {v}")
            }
        }
    }
}

impl std::error::Error for ParamError {}
