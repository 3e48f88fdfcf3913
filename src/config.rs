//! Numeric field configuration
//!
//! Stores the constraint set in `~/.config/numfield/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grammar::MAX_DIGITS;

/// Constraints that define which texts a numeric field may hold.
///
/// Immutable once handed to a guard: changing any field means building a new
/// matcher (see [`crate::guard::NumericGuard::set_constraints`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NumericConstraints {
    /// Allow a single leading `-`
    #[serde(default = "default_true")]
    pub allow_negative: bool,

    /// Allow a `.` followed by fractional digits
    #[serde(default = "default_true")]
    pub allow_decimal: bool,

    /// Maximum number of digits before the decimal point
    #[serde(default = "default_max_int_digits")]
    pub max_int_digits: u32,

    /// Maximum number of digits after the decimal point
    #[serde(default = "default_max_frac_digits")]
    pub max_frac_digits: u32,
}

fn default_true() -> bool {
    true
}

fn default_max_int_digits() -> u32 {
    6
}

fn default_max_frac_digits() -> u32 {
    2
}

impl Default for NumericConstraints {
    fn default() -> Self {
        Self {
            allow_negative: true,
            allow_decimal: true,
            max_int_digits: default_max_int_digits(),
            max_frac_digits: default_max_frac_digits(),
        }
    }
}

impl NumericConstraints {
    /// Defaults used when building a bare matcher (six fractional digits
    /// instead of the field's two)
    pub fn grammar_defaults() -> Self {
        Self {
            max_frac_digits: 6,
            ..Self::default()
        }
    }

    /// Integer-only constraints with the given digit limit
    pub fn integer(max_int_digits: u32) -> Self {
        Self {
            allow_decimal: false,
            max_int_digits,
            ..Self::default()
        }
    }

    pub fn with_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    pub fn with_decimal(mut self, allow: bool) -> Self {
        self.allow_decimal = allow;
        self
    }

    pub fn with_int_digits(mut self, digits: u32) -> Self {
        self.max_int_digits = digits;
        self
    }

    pub fn with_frac_digits(mut self, digits: u32) -> Self {
        self.max_frac_digits = digits;
        self
    }

    /// Check the digit limits against what the grammar builder supports
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_int_digits", self.max_int_digits),
            ("max_frac_digits", self.max_frac_digits),
        ] {
            if value > MAX_DIGITS {
                return Err(ConfigError::Invalid(format!(
                    "{} = {} exceeds the limit of {}",
                    name, value, MAX_DIGITS
                )));
            }
        }
        Ok(())
    }

    /// Parse constraints from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let constraints: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        constraints.validate()?;
        Ok(constraints)
    }

    /// Load constraints from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let constraints = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded constraints from {}", path.display());
        Ok(constraints)
    }

    /// Load constraints from the user config file, or return defaults if it
    /// is missing or unreadable
    pub fn load_user_or_default() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load(&path) {
            Ok(constraints) => constraints,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Errors from loading or validating constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid constraints: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
