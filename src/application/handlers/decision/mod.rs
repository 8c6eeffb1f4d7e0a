//! Decision handlers - one per operation.

mod create_decision;
mod delete_decision;
mod get_decision;
mod list_decisions;
mod recall_decision;
mod update_decision;

pub use create_decision::{CreateDecisionCommand, CreateDecisionError, CreateDecisionHandler};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery};
pub use recall_decision::{RecallDecisionCommand, RecallDecisionHandler, NOT_FOUND_ADVISORY};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler};
