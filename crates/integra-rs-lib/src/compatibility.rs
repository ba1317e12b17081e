//! Validation of a chosen set of integrations.
//! 
//! # Usage
//! 1. Create a [`CompatibilityChecker`], optionally with [`CheckerOptions`](crate::CheckerOptions).
//! 1. [`CompatibilityChecker::check_compatibility()`] to validate dependencies and staleness against a [`Catalog`](crate::Catalog).
//! 1. [`CompatibilityChecker::check_circular_dependencies()`] to look for a dependency cycle.
//! 1. Gate installation on [`CheckResult::is_ok()`], warnings and info never block.
//! 
//! [`CompatibilityChecker::check_all()`] runs both checks into a single [`CheckResult`].
//! 
//! The checker only *validates*, it never picks versions for the integrations it is given.

mod issue;
pub use issue::Severity;
pub use issue::IssueType;
pub use issue::CompatibilityIssue;
pub use issue::CheckResult;

mod dependency_graph;
pub use dependency_graph::DependencyGraph;
pub use dependency_graph::Cycle;

mod checker;
pub use checker::CompatibilityChecker;
