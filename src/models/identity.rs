//! Identity fields shared by every employee variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The name and social security number of an employee.
///
/// Identity fields are stored verbatim: no format checks are applied and
/// empty text is accepted. They cannot be changed after construction.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::Identity;
///
/// let identity = Identity::new("John", "Smith", "111-11-1111");
/// assert_eq!(
///     identity.to_string(),
///     "John Smith\nsocial security number: 111-11-1111"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    first_name: String,
    last_name: String,
    social_security_number: String,
}

impl Identity {
    /// Creates an identity from a first name, last name and social security number.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        social_security_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            social_security_number: social_security_number.into(),
        }
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the social security number.
    pub fn social_security_number(&self) -> &str {
        &self.social_security_number
    }

    /// Returns `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\nsocial security number: {}",
            self.first_name, self.last_name, self.social_security_number
        )
    }
}
