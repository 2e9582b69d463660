//! Transposition configuration
//!
//! The configuration is an explicit immutable value handed to the emitter
//! at construction, never read from shared mutable state.

use super::{TransposeError, TransposeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Whether an edge matching the label is retained in its original form
/// alongside its reversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// The original edge survives next to the reversed copy
    Keep,
    /// The original edge is replaced by the reversed copy
    Drop,
}

impl FromStr for Action {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "KEEP" => Ok(Self::Keep),
            "DROP" => Ok(Self::Drop),
            _ => Err(TransposeError::InvalidAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "KEEP"),
            Self::Drop => write!(f, "DROP"),
        }
    }
}

/// Recognized option keys
const LABEL: &str = "label";
const NEW_LABEL: &str = "newLabel";
const ACTION: &str = "action";

/// Immutable configuration for one transposition run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransposeConfig {
    /// Edge label selected for transposition
    pub label: String,
    /// Label assigned to every reversed edge
    pub new_label: String,
    /// Whether matching edges are retained in original form
    pub action: Action,
}

impl TransposeConfig {
    /// Create a configuration from its parts
    pub fn new(
        label: impl Into<String>,
        new_label: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            label: label.into(),
            new_label: new_label.into(),
            action,
        }
    }

    /// Build a configuration from a string option map.
    ///
    /// Recognized options: `label`, `newLabel`, `action`. All three are
    /// required; `action` must parse as KEEP or DROP (case-insensitive).
    pub fn from_options(options: &HashMap<String, String>) -> TransposeResult<Self> {
        let label = options
            .get(LABEL)
            .ok_or(TransposeError::MissingOption(LABEL))?;
        let new_label = options
            .get(NEW_LABEL)
            .ok_or(TransposeError::MissingOption(NEW_LABEL))?;
        let action = options
            .get(ACTION)
            .ok_or(TransposeError::MissingOption(ACTION))?
            .parse()?;

        Ok(Self::new(label.as_str(), new_label.as_str(), action))
    }
}
