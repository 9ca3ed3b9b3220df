//! Role gate for protected surfaces.

use thiserror::Error;

use crate::role::Role;
use crate::session::model::SessionRecord;

/// Navigation target a caller should redirect to after a gate rejection.
///
/// Both rejection variants resolve to the login route. The gate never
/// attempts cross-role redirection (sending a teacher who opened the
/// student area to the teacher area); that is a deliberate design choice
/// of the platform, not an omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login page.
    Login,
}

/// Why the gate refused to hydrate a surface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// No session record is present.
    #[error("not authenticated")]
    Unauthenticated,

    /// A record is present but its role does not match the surface.
    #[error("session role '{actual}' cannot access the {required} area")]
    WrongRole {
        /// The role the surface requires.
        required: Role,
        /// The role the record claims.
        actual: Role,
    },
}

impl GateError {
    /// The route the caller should redirect to.
    pub fn redirect(&self) -> Route {
        Route::Login
    }
}

/// Validates a session record against the role a surface requires.
///
/// One gate instance is created per protected surface with that surface's
/// required role. The gate only performs the role comparison; loading the
/// record and resolving the post-gate profile belong to the application
/// layer.
#[derive(Debug, Clone, Copy)]
pub struct SessionGate {
    required: Role,
}

impl SessionGate {
    /// Creates a gate for a surface requiring `required`.
    pub fn new(required: Role) -> Self {
        Self { required }
    }

    /// The role this gate requires.
    pub fn required_role(&self) -> Role {
        self.required
    }

    /// Checks a (possibly absent) record against the required role.
    pub fn evaluate(&self, record: Option<&SessionRecord>) -> Result<(), GateError> {
        match record {
            None => Err(GateError::Unauthenticated),
            Some(record) if record.role != self.required => Err(GateError::WrongRole {
                required: self.required,
                actual: record.role,
            }),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_absent_record_never_passes() {
        for required in Role::iter() {
            let gate = SessionGate::new(required);
            let err = gate.evaluate(None).unwrap_err();
            assert_eq!(err, GateError::Unauthenticated);
            assert_eq!(err.redirect(), Route::Login);
        }
    }

    #[test]
    fn test_wrong_role_never_passes() {
        for required in Role::iter() {
            for actual in Role::iter().filter(|r| *r != required) {
                let gate = SessionGate::new(required);
                let record = SessionRecord::new(actual, "whoever");
                let err = gate.evaluate(Some(&record)).unwrap_err();
                assert_eq!(err, GateError::WrongRole { required, actual });
                assert_eq!(err.redirect(), Route::Login);
            }
        }
    }

    #[test]
    fn test_matching_role_passes() {
        for required in Role::iter() {
            let gate = SessionGate::new(required);
            let record = SessionRecord::new(required, "whoever");
            assert!(gate.evaluate(Some(&record)).is_ok());
        }
    }
}
