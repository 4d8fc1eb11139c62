use chrono::{DateTime, Utc};
use std::fmt;

/// A guild role attached to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    /// The implicit role every guild member carries
    pub is_everyone: bool,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_everyone: false,
        }
    }

    pub fn everyone() -> Self {
        Self {
            name: "@everyone".to_string(),
            is_everyone: true,
        }
    }
}

/// Represents a user on the messaging platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub discriminator: Option<u16>,
    pub created_at: DateTime<Utc>,
    /// Roles in hierarchy order, lowest first
    pub roles: Vec<Role>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            discriminator: None,
            created_at: DateTime::<Utc>::default(),
            roles: Vec::new(),
        }
    }

    pub fn with_discriminator(mut self, discriminator: u16) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    /// Legacy `name#1234` form when the account still has a discriminator
    pub fn display_name(&self) -> String {
        match self.discriminator {
            Some(d) if d != 0 => format!("{}#{:04}", self.name, d),
            _ => self.name.clone(),
        }
    }

    /// Role names without the implicit everyone role
    pub fn role_names(&self) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|r| !r.is_everyone)
            .map(|r| r.name.as_str())
            .collect()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
