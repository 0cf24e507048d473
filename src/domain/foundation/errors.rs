//! Error types for the domain layer.

use thiserror::Error;

use super::Theme;

/// Raised when a theme about to be evaluated is missing required
/// answers. Evaluation is all-or-nothing: there is no partial or
/// degraded output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("theme '{theme}' is missing required answers: {}", .missing.join(", "))]
pub struct ValidationError {
    /// The first theme, in presentation order, with incomplete answers.
    pub theme: Theme,
    /// The question keys missing for that theme.
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    /// Creates a missing-answers validation error.
    pub fn missing_answers(theme: Theme, missing: Vec<&'static str>) -> Self {
        Self { theme, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_theme_and_lists_missing_keys() {
        let err = ValidationError::missing_answers(
            Theme::Operations,
            vec!["manual_dependency", "service_capacity"],
        );
        assert_eq!(
            format!("{}", err),
            "theme 'Operations' is missing required answers: manual_dependency, service_capacity"
        );
    }

    #[test]
    fn carries_theme_and_keys_for_the_caller() {
        let err = ValidationError::missing_answers(Theme::Maturity, vec!["maturity_level"]);
        assert_eq!(err.theme, Theme::Maturity);
        assert_eq!(err.missing, vec!["maturity_level"]);
    }
}
