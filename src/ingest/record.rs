//! Contact record normalization
//!
//! Turns one owner's raw export rows into the owner identity plus the distinct
//! full names of its contacts.

use crate::graph::Identity;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One row of a contact export. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawContact {
    #[serde(rename = "First Name", default)]
    pub first_name: Option<String>,
    #[serde(rename = "Last Name", default)]
    pub last_name: Option<String>,
    #[serde(rename = "Company", default)]
    pub company: Option<String>,
}

impl RawContact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        RawContact {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            company: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn full_name(&self) -> Identity {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// All rows exported by one owner
#[derive(Debug, Clone)]
pub struct OwnerExport {
    pub owner: Identity,
    pub entries: Vec<RawContact>,
}

impl OwnerExport {
    pub fn new(owner: impl Into<Identity>, entries: Vec<RawContact>) -> Self {
        OwnerExport {
            owner: owner.into(),
            entries,
        }
    }

    pub fn normalize(&self) -> ContactRecord {
        normalize_record(self.owner.clone(), &self.entries)
    }
}

/// Owner plus its distinct contacts, in first-occurrence order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub owner: Identity,
    pub contacts: Vec<Identity>,
}

/// Trimmed first and last name joined by a single space.
///
/// Missing parts count as empty, so a row without names yields `" "`. Such
/// degenerate names are kept as ordinary identities.
pub fn full_name(first_name: Option<&str>, last_name: Option<&str>) -> Identity {
    Identity::from(format!(
        "{} {}",
        first_name.unwrap_or_default().trim(),
        last_name.unwrap_or_default().trim()
    ))
}

pub fn normalize_record(owner: Identity, entries: &[RawContact]) -> ContactRecord {
    let contacts: IndexSet<Identity> = entries.iter().map(RawContact::full_name).collect();
    ContactRecord {
        owner,
        contacts: contacts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_parts() {
        assert_eq!(full_name(Some("  Ada "), Some(" Lovelace\t")), "Ada Lovelace");
    }

    #[test]
    fn test_missing_parts_are_empty() {
        assert_eq!(full_name(Some("Cher"), None), "Cher ");
        assert_eq!(full_name(None, Some("Prince")), " Prince");
        assert_eq!(full_name(None, None), " ");
        assert_eq!(RawContact::default().full_name(), " ");
    }

    #[test]
    fn test_normalize_collapses_duplicates() {
        let entries = vec![
            RawContact::new("Bob", "Smith"),
            RawContact::new(" Bob", "Smith "),
            RawContact::new("Carol", "Jones"),
            RawContact::new("bob", "smith"),
        ];
        let record = normalize_record(Identity::from("alice"), &entries);

        assert_eq!(record.owner, "alice");
        let contacts: Vec<&str> = record.contacts.iter().map(Identity::as_str).collect();
        assert_eq!(contacts, vec!["Bob Smith", "Carol Jones", "bob smith"]);
    }

    #[test]
    fn test_owner_export_normalize() {
        let export = OwnerExport::new("dana", vec![RawContact::default(), RawContact::default()]);
        let record = export.normalize();
        assert_eq!(record.contacts, vec![Identity::from(" ")]);
    }
}
