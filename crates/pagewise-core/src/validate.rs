//! Conditional field validation.
//!
//! A [`Validator`] is a list of [`ConditionalRule`]s. Each rule names a field
//! and carries a condition; when the condition holds for a configuration the
//! rule reports a [`ConfigViolation`] naming the field, its current value and
//! the owning component. Validation runs once, when a component is built.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Read access to a configuration's fields by name, for violation reports.
pub trait FieldValues {
    /// Render the value of `field`, or `None` when it is unset or unknown.
    fn field_value(&self, field: &str) -> Option<String>;
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigViolation {
    /// Component that owns the configuration.
    pub component: String,
    /// Offending field.
    pub field: String,
    /// Rendered field value (`None` when unset).
    pub value: Option<String>,
    /// Rule message.
    pub message: String,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or("unset");
        write!(
            f,
            "Invalid field '{}' '{}' supplied to '{}'. {}",
            self.field, value, self.component, self.message
        )
    }
}

/// All violations found by one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationErrors {
    violations: Vec<ConfigViolation>,
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations.iter().join("; ")
}

impl ValidationErrors {
    /// The violations, in rule order.
    pub fn violations(&self) -> &[ConfigViolation] {
        &self.violations
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false for errors produced by [`Validator::validate`].
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Check whether any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ConfigViolation;
    type IntoIter = std::vec::IntoIter<ConfigViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// A rule that fires when its condition returns `true`.
pub struct ConditionalRule<C> {
    field: &'static str,
    message: String,
    condition: Box<dyn Fn(&C) -> bool>,
}

impl<C> ConditionalRule<C> {
    /// Create a new rule for `field`.
    pub fn new(
        field: &'static str,
        message: impl Into<String>,
        condition: impl Fn(&C) -> bool + 'static,
    ) -> Self {
        Self {
            field,
            message: message.into(),
            condition: Box::new(condition),
        }
    }

    /// Field this rule guards.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Check the rule against `config`.
    pub fn is_violated(&self, config: &C) -> bool {
        (self.condition)(config)
    }
}

impl<C> fmt::Debug for ConditionalRule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of conditional rules.
#[derive(Debug)]
pub struct Validator<C> {
    rules: Vec<ConditionalRule<C>>,
}

impl<C> Default for Validator<C> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<C: FieldValues> Validator<C> {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule.
    pub fn rule(
        mut self,
        field: &'static str,
        message: impl Into<String>,
        condition: impl Fn(&C) -> bool + 'static,
    ) -> Self {
        self.rules.push(ConditionalRule::new(field, message, condition));
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Collect every violation for `config`.
    pub fn violations(&self, config: &C, component: &str) -> Vec<ConfigViolation> {
        self.rules
            .iter()
            .filter(|rule| rule.is_violated(config))
            .map(|rule| ConfigViolation {
                component: component.to_string(),
                field: rule.field.to_string(),
                value: config.field_value(rule.field),
                message: rule.message.clone(),
            })
            .collect()
    }

    /// Validate `config`, failing with every violation found.
    pub fn validate(&self, config: &C, component: &str) -> Result<(), ValidationErrors> {
        let violations = self.violations(config, component);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}
