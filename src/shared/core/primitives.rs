#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid email address")]
pub struct InvalidEmail;

/// A student identifier as accepted at the API boundary.
///
/// Only the shape is checked (`local@domain.tld`, no whitespace). The registry
/// treats the inner string as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentEmail(String);

impl StudentEmail {
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let candidate = raw.trim();
        if candidate.chars().any(char::is_whitespace) {
            return Err(InvalidEmail);
        }
        let (local, domain) = candidate.split_once('@').ok_or(InvalidEmail)?;
        if local.is_empty() || domain.contains('@') {
            return Err(InvalidEmail);
        }
        let well_formed_domain = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains("..");
        if !well_formed_domain {
            return Err(InvalidEmail);
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
