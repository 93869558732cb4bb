//! Read-only portfolio catalogue

use super::project::Project;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Case studies shipped with the binary
const BUILTIN_PROJECTS: &str = include_str!("../../data/projects.json");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("no project with id {0:?}")]
    NotFound(String),
}

/// Ordered, static list of case studies
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The catalogue embedded at build time
    pub fn builtin() -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(BUILTIN_PROJECTS).context("Failed to parse built-in portfolio")?;
        Ok(Self::new(projects))
    }

    /// Load a catalogue from a JSON file with the same shape as the built-in one
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio from {}", path.display()))?;
        let projects: Vec<Project> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse portfolio from {}", path.display()))?;
        tracing::info!(count = projects.len(), path = %path.display(), "Loaded portfolio");
        Ok(Self::new(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Exact-match scan by id
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Like [`find_project`](Self::find_project), with a miss as an error
    pub fn lookup(&self, id: &str) -> Result<&Project, PortfolioError> {
        self.find_project(id)
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_builtin_parses() {
        let catalog = assert_ok!(ProjectCatalog::builtin());
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_find_project_hit() {
        let catalog = ProjectCatalog::builtin().unwrap();
        let project = catalog.find_project("1").unwrap();
        assert_eq!(project.id, "1");
        assert_eq!(project.title, "Heritage Executive Collection");
    }

    #[test]
    fn test_find_project_miss() {
        let catalog = ProjectCatalog::builtin().unwrap();
        assert!(catalog.find_project("nonexistent").is_none());
    }

    #[test]
    fn test_find_project_is_exact() {
        let catalog = ProjectCatalog::builtin().unwrap();
        assert!(catalog.find_project(" 1").is_none());
        assert!(catalog.find_project("").is_none());
        assert!(catalog.find_project("10").is_none());
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let catalog = ProjectCatalog::builtin().unwrap();
        let err = assert_err!(catalog.lookup("nonexistent"));
        assert_eq!(err, PortfolioError::NotFound("nonexistent".to_string()));
        assert_eq!(err.to_string(), r#"no project with id "nonexistent""#);
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = ProjectCatalog::builtin().unwrap();
        let ids: Vec<_> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProjectCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.find_project("1").is_none());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, BUILTIN_PROJECTS).unwrap();

        let catalog = ProjectCatalog::from_path(&path).unwrap();

        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProjectCatalog::from_path(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_challenge_markup_is_stripped() {
        let catalog = ProjectCatalog::builtin().unwrap();
        let project = catalog.find_project("1").unwrap();
        let plain = project.challenge.plain_description();
        assert!(!plain.contains('<'));
        assert!(plain.contains("350 personalised sets"));
    }
}
