//! Customer account record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Database-assigned identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    /// Always present on the wire; `null` when the customer has no phone.
    pub phone_number: Option<String>,
    /// Date the customer joined, ISO-8601 (`YYYY-MM-DD`) on the wire.
    pub date_joined: NaiveDate,
}

/// The client-supplied portion of an account, used for create and update.
///
/// `name`, `email`, `address`, and `date_joined` are required; a body
/// missing any of them fails deserialization and surfaces as a 400.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

impl AccountDraft {
    /// Field-level checks beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("email must not be empty".to_string());
        }
        Ok(())
    }

    /// Attach a database id, producing a full account.
    pub fn into_account(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
        }
    }
}
