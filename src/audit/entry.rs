//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
    /// A weekly cycle boundary was crossed
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Profile,
    Allowance,
    Expense,
    StudyTask,
    StudyReminder,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Profile => write!(f, "Profile"),
            EntityType::Allowance => write!(f, "Allowance"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::StudyTask => write!(f, "StudyTask"),
            EntityType::StudyReminder => write!(f, "StudyReminder"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on one entity, with optional before/after snapshots
/// for change tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// The user the operation was performed for
    pub user_id: UserId,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// JSON snapshot before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON snapshot after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a create operation
    pub fn create<T: Serialize>(
        user_id: UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id,
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            before: None,
            after: serde_json::to_value(entity).ok(),
            summary: None,
        }
    }

    /// Entry for an update operation
    pub fn update<T: Serialize>(
        user_id: UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id,
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary,
        }
    }

    /// Entry for a delete operation
    pub fn delete<T: Serialize>(
        user_id: UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id,
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            before: serde_json::to_value(entity).ok(),
            after: None,
            summary: None,
        }
    }

    /// Entry for a weekly reset crossing
    pub fn reset(user_id: UserId, cleared: usize, summary: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            user_id,
            operation: Operation::Reset,
            entity_type: EntityType::Allowance,
            entity_id: user_id.to_string(),
            before: None,
            after: None,
            summary: Some(format!("{} ({} expenses cleared)", summary.into(), cleared)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Profile};

    #[test]
    fn test_create_entry_has_after_snapshot() {
        let profile = Profile::new("amina");
        let entry = AuditEntry::create(profile.id, EntityType::Profile, profile.id.to_string(), &profile);

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_has_both_snapshots() {
        let user = UserId::new();
        let before = Money::from_units(5000);
        let after = Money::from_units(8000);
        let entry = AuditEntry::update(
            user,
            EntityType::Allowance,
            user.to_string(),
            &before,
            &after,
            Some("allowance: 5000.00 -> 8000.00".to_string()),
        );

        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.summary.as_deref(), Some("allowance: 5000.00 -> 8000.00"));
    }

    #[test]
    fn test_reset_entry_summary() {
        let user = UserId::new();
        let entry = AuditEntry::reset(user, 3, "weekly reset");
        assert_eq!(entry.operation, Operation::Reset);
        assert_eq!(entry.summary.as_deref(), Some("weekly reset (3 expenses cleared)"));
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let user = UserId::new();
        let entry = AuditEntry::reset(user, 0, "weekly reset");
        let json = serde_json::to_string(&entry).unwrap();
        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::Reset);
        assert_eq!(back.user_id, user);
    }
}
