use std::fmt;

use crate::config::{Config, CrudFlags};

const TITLE_PREFIX: &str = "As the dev team I want to";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl CrudOperation {
    /// Order in which per-operation issues are filed.
    pub const ALL: [CrudOperation; 4] = [
        CrudOperation::Create,
        CrudOperation::Read,
        CrudOperation::Update,
        CrudOperation::Delete,
    ];

    pub fn verb(self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::Read => "read",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for CrudOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl CrudFlags {
    pub fn is_enabled(&self, operation: CrudOperation) -> bool {
        match operation {
            CrudOperation::Create => self.create,
            CrudOperation::Read => self.read,
            CrudOperation::Update => self.update,
            CrudOperation::Delete => self.delete,
        }
    }

    pub fn any(&self) -> bool {
        self.create || self.read || self.update || self.delete
    }

    pub fn enabled(&self) -> impl Iterator<Item = CrudOperation> + '_ {
        CrudOperation::ALL
            .into_iter()
            .filter(|operation| self.is_enabled(*operation))
    }
}

/// Titles for a single keyword: one generic title when no flag is set,
/// otherwise one per enabled operation.
pub fn issue_titles(keyword: &str, flags: &CrudFlags) -> Vec<String> {
    if !flags.any() {
        return vec![format!("{TITLE_PREFIX} have {keyword}")];
    }

    flags
        .enabled()
        .map(|operation| format!("{TITLE_PREFIX} be able to {operation} {keyword}"))
        .collect()
}

pub fn plan(config: &Config) -> Vec<String> {
    config
        .keywords
        .iter()
        .flat_map(|(keyword, flags)| issue_titles(keyword, flags))
        .collect()
}
