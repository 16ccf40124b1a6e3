/// Convenience result type used across the core.
pub type OrganicResult<T> = Result<T, OrganicError>;

/// Errors raised while building a network or parsing its configuration.
///
/// Ticks never fail; these only surface at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrganicError {
    /// A configuration value is out of its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A colour string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl OrganicError {
    /// Build an [`OrganicError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build an [`OrganicError::InvalidColor`] value.
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let e = OrganicError::invalid_config("left_nodes");
        assert_eq!(e.to_string(), "invalid config: left_nodes");

        let e = OrganicError::invalid_color("#zz");
        assert_eq!(e.to_string(), "invalid color: #zz");
    }
}
