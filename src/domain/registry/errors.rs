//! Registry error types.

use thiserror::Error;

use crate::domain::foundation::{DisplayName, DomainError, ErrorCode, GroupId};

/// Errors returned by registry operations.
///
/// The two not-found kinds are deliberately distinct: setting a display's
/// group can fail on either side, and callers map them differently.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No display is registered under this name.
    #[error("Display not found: {0}")]
    DisplayNotFound(DisplayName),

    /// No group exists with this ID.
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    /// The persistence backend failed.
    #[error("Storage failure: {0}")]
    Store(#[from] DomainError),
}

impl RegistryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::DisplayNotFound(_) => ErrorCode::DisplayNotFound,
            RegistryError::GroupNotFound(_) => ErrorCode::GroupNotFound,
            RegistryError::Store(err) => err.code,
        }
    }

    /// Returns true for either not-found kind.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::DisplayNotFound(_) | RegistryError::GroupNotFound(_)
        )
    }
}
