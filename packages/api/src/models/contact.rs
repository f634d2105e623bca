use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::Keyed;

/// Lifecycle of a contact-form lead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Closed,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::New,
        ContactStatus::Read,
        ContactStatus::Replied,
        ContactStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::New => "New",
            ContactStatus::Read => "Read",
            ContactStatus::Replied => "Replied",
            ContactStatus::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Keyed for Contact {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactStats {
    pub total: u64,
    pub new: u64,
    pub read: u64,
    pub replied: u64,
    pub closed: u64,
}

impl ContactStats {
    pub fn tally<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Self {
        let mut stats = Self::default();
        for contact in contacts {
            stats.total += 1;
            match contact.status {
                ContactStatus::New => stats.new += 1,
                ContactStatus::Read => stats.read += 1,
                ContactStatus::Replied => stats.replied += 1,
                ContactStatus::Closed => stats.closed += 1,
            }
        }
        stats
    }

    pub fn count(&self, status: ContactStatus) -> u64 {
        match status {
            ContactStatus::New => self.new,
            ContactStatus::Read => self.read,
            ContactStatus::Replied => self.replied,
            ContactStatus::Closed => self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(status: ContactStatus) -> Contact {
        Contact {
            id: "c".into(),
            full_name: "Ravi".into(),
            email_address: "ravi@example.com".into(),
            status,
            ..Contact::default()
        }
    }

    #[test]
    fn tally_counts_each_status() {
        let leads = [
            lead(ContactStatus::New),
            lead(ContactStatus::New),
            lead(ContactStatus::Closed),
        ];
        let stats = ContactStats::tally(&leads);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(ContactStatus::New), 2);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.replied, 0);
    }

    #[test]
    fn status_is_lowercase_on_the_wire() {
        let json = r#"{"_id":"c1","fullName":"A","emailAddress":"a@b.co","subject":"Hi",
            "message":"Call me","status":"replied","createdAt":"2024-01-15T10:00:00.000Z"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.status, ContactStatus::Replied);
        assert!(contact.mobile_number.is_none());
        assert_eq!(ContactStatus::parse("closed"), Some(ContactStatus::Closed));
    }
}
