//! Portfolio case studies and lookup by id

mod catalog;
mod project;

pub use catalog::ProjectCatalog;
pub use project::Project;
