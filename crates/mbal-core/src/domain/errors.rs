use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineErrorCategory {
    Success,
    InputValidationError,
    ConfigurationError,
    IoSystemError,
    InternalError,
}

impl EngineErrorCategory {
    pub const fn exit_contract(self) -> ExitContract {
        match self {
            Self::Success => ExitContract {
                exit_code: 0,
                category: "Success",
                class: "SUCCESS",
            },
            Self::InputValidationError => ExitContract {
                exit_code: 2,
                category: "InputValidationError",
                class: "INVALID_INPUT",
            },
            Self::ConfigurationError => ExitContract {
                exit_code: 3,
                category: "ConfigurationError",
                class: "CONFIG_FATAL",
            },
            Self::IoSystemError => ExitContract {
                exit_code: 4,
                category: "IoSystemError",
                class: "IO_FATAL",
            },
            Self::InternalError => ExitContract {
                exit_code: 5,
                category: "InternalError",
                class: "SYS_FATAL",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_contract().exit_code
    }

    pub const fn name(self) -> &'static str {
        self.exit_contract().category
    }

    pub const fn class(self) -> &'static str {
        self.exit_contract().class
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitContract {
    pub exit_code: i32,
    pub category: &'static str,
    pub class: &'static str,
}

/// Engine failure carrying a stable dotted code (`INPUT.INITIAL_API`) next to
/// the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    category: EngineErrorCategory,
    code: &'static str,
    message: String,
}

impl EngineError {
    pub fn new(
        category: EngineErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EngineErrorCategory::InputValidationError, code, message)
    }

    pub fn configuration(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EngineErrorCategory::ConfigurationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EngineErrorCategory::IoSystemError, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(EngineErrorCategory::InternalError, code, message)
    }

    pub const fn category(&self) -> EngineErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.category.name(), self.code, self.message)
    }
}

impl Error for EngineError {}

/// Rejects NaN and infinities before they reach any closure formula.
pub(crate) fn require_finite(code: &'static str, field: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::invalid_input(
            code,
            format!("'{field}' must be a finite number, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineError, EngineErrorCategory, require_finite};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (EngineErrorCategory::Success, 0, "Success", "SUCCESS"),
            (
                EngineErrorCategory::InputValidationError,
                2,
                "InputValidationError",
                "INVALID_INPUT",
            ),
            (
                EngineErrorCategory::ConfigurationError,
                3,
                "ConfigurationError",
                "CONFIG_FATAL",
            ),
            (
                EngineErrorCategory::IoSystemError,
                4,
                "IoSystemError",
                "IO_FATAL",
            ),
            (
                EngineErrorCategory::InternalError,
                5,
                "InternalError",
                "SYS_FATAL",
            ),
        ];

        for (category, exit_code, name, class) in cases {
            let contract = category.exit_contract();
            assert_eq!(contract.exit_code, exit_code);
            assert_eq!(contract.category, name);
            assert_eq!(contract.class, class);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = EngineError::invalid_input(
            "INPUT.INITIAL_API",
            "'initial_api' must be greater than zero, got 0",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.INITIAL_API] 'initial_api' must be greater than zero, got 0"
        );
        assert_eq!(error.fatal_exit_line().as_deref(), Some("FATAL EXIT CODE: 2"));
        assert_eq!(
            error.to_string(),
            "InputValidationError [INPUT.INITIAL_API] 'initial_api' must be greater than zero, got 0"
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(require_finite("INPUT.X", "x", 1.5), Ok(1.5));
        let error = require_finite("INPUT.X", "x", f64::NAN).expect_err("NaN should fail");
        assert_eq!(error.category(), EngineErrorCategory::InputValidationError);
        assert_eq!(error.code(), "INPUT.X");
        assert!(require_finite("INPUT.X", "x", f64::INFINITY).is_err());
    }
}
