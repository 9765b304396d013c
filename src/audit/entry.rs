//! Audit entry data structures
//!
//! Defines the operation types and the entry format written to the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::Record;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was created
    Create,
    /// Contact was updated
    Update,
    /// Contact was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on a contact with optional before/after snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name of the affected contact
    pub contact: String,

    /// Contact state before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Contact state after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            contact: record.name().to_string(),
            before: None,
            after: serde_json::to_value(record).ok(),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(before: &Record, after: &Record) -> Self {
        let before = serde_json::to_value(before).ok();
        let after_value = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after_value) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            contact: after.name().to_string(),
            before,
            after: after_value,
            diff_summary,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            contact: record.name().to_string(),
            before: serde_json::to_value(record).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.contact
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Record {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        record
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&alice());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.contact, "Alice");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["phones"][0], "1234567890");
    }

    #[test]
    fn test_update_entry() {
        let before = alice();
        let mut after = before.clone();
        after.add_birthday("01.02.1990").unwrap();

        let entry = AuditEntry::update(&before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.diff_summary,
            Some("birthday: null -> \"01.02.1990\"".to_string())
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&alice());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(&alice());
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(!json.contains("before"));
        assert!(!json.contains("diff_summary"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.contact, "Alice");
    }

    #[test]
    fn test_human_readable_format() {
        let before = alice();
        let mut after = before.clone();
        after.add_phone("0987654321").unwrap();

        let formatted = AuditEntry::update(&before, &after).format_human_readable();
        assert!(formatted.contains("UPDATE Alice"));
        assert!(formatted.contains("Changes: phones: [1234567890] -> [1234567890, 0987654321]"));
    }
}
