//! Demo profile models and resolution.
//!
//! After the gate admits a session, the surface is hydrated from a canned
//! per-role profile rather than from the persisted record's own identity
//! fields. That substitution is the platform's demo behavior and is kept
//! faithfully here, behind a resolver seam for a later real lookup.

mod fixtures;
mod model;
mod resolver;

pub use fixtures::demo_profile;
pub use model::{DemoProfile, RoleStats};
pub use resolver::{DemoProfileResolver, ProfileResolver};
