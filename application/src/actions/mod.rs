//! Actions: orchestrated platform operations
//!
//! Each action coordinates several dependent backend calls into one
//! logical operation and returns the `(warnings, result)` pair the
//! command surface renders. Sub-calls run strictly sequentially; later
//! calls depend on GUIDs resolved by earlier ones.

pub mod auth;
pub mod error;
pub mod job;
pub mod resolve;
pub mod route;

use error::ActionError;
use stratus_domain::Warnings;

/// The outcome of an action: every advisory collected up to the point of
/// success or failure, plus the result itself. Warnings accumulated before
/// a failure are never dropped.
pub type ActionResult<T> = (Warnings, Result<T, ActionError>);
