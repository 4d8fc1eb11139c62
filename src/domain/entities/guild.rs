use chrono::{DateTime, Utc};

/// Snapshot of the guild a message was posted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub owner: String,
    pub member_count: u64,
    pub members: Vec<String>,
}

impl Guild {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: DateTime::<Utc>::default(),
            owner: String::new(),
            member_count: 0,
            members: Vec::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the member names; the count follows unless set explicitly afterwards
    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.member_count = members.len() as u64;
        self.members = members;
        self
    }

    pub fn with_member_count(mut self, count: u64) -> Self {
        self.member_count = count;
        self
    }
}
