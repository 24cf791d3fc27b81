//! Page Controllers
//!
//! Each controller owns one user-visible operation. They talk to the
//! page through a surface trait and to the server through `ApiClient`,
//! so both sides can be swapped for fakes in tests.

mod create;
mod list;

pub use create::{CreateController, FormInput, StatusSurface, SubmissionPhase};
pub use list::{ListController, ListSurface};
