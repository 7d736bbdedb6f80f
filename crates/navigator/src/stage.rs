//! Ordered set of named stages.

use crate::error::{NavigatorError, Result};
use serde::Serialize;

/// Stage names in display order, indexed `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSet {
    names: Vec<String>,
}

impl StageSet {
    /// Build a stage set; names must be non-empty and unique.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if collected.contains(&name) {
                return Err(NavigatorError::DuplicateStage(name));
            }
            collected.push(name);
        }

        if collected.is_empty() {
            return Err(NavigatorError::EmptyStageSet);
        }

        Ok(Self { names: collected })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.names.len() - 1
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.names.len()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for StageSet {
    fn default() -> Self {
        Self {
            names: festival_core::config::NavigatorConfig::default().stages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_five_stages() {
        let stages = StageSet::default();
        assert_eq!(stages.len(), 5);
        assert_eq!(stages.name(0), Some("home"));
        assert_eq!(stages.last_index(), 4);
    }

    #[test]
    fn test_lookup() {
        let stages = StageSet::new(["gate", "camp", "playa"]).unwrap();
        assert_eq!(stages.index_of("camp"), Some(1));
        assert_eq!(stages.index_of("temple"), None);
        assert!(stages.contains_index(2));
        assert!(!stages.contains_index(3));
        assert_eq!(stages.name(3), None);
    }

    #[test]
    fn test_empty_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(StageSet::new(empty), Err(NavigatorError::EmptyStageSet));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            StageSet::new(["camp", "camp"]),
            Err(NavigatorError::DuplicateStage("camp".to_string()))
        );
    }
}
