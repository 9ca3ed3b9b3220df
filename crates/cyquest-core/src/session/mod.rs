//! Session domain models, gate logic and repository traits.
//!
//! A session is a client-local record of who is "logged in" and as what
//! role. The gate validates that record against the role a surface
//! requires before any page state is hydrated.

mod gate;
mod model;
mod repository;

pub use gate::{GateError, Route, SessionGate};
pub use model::SessionRecord;
pub use repository::SessionStore;
