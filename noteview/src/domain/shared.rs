// src/domain/shared.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Note;

/// A note owned by someone else and shared with the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedNote {
    #[serde(flatten)]
    pub note: Note,
    pub shared_by: Collaborator,
    pub permissions: Permission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    pub name: String,
    pub initials: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Edit,
}

impl Collaborator {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let initials = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        Self {
            id: id.into(),
            name,
            initials,
        }
    }
}

impl SharedNote {
    pub fn can_edit(&self) -> bool {
        self.permissions == Permission::Edit
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::View => write!(f, "view"),
            Permission::Edit => write!(f, "edit"),
        }
    }
}
