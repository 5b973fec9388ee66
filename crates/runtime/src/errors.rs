use thiserror::Error;

use crate::values::ValueType;

pub type PropsResult<T> = Result<T, PropsError>;

/// Error raised when manipulating properties on a runtime value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// The target value category has no writable own property storage
    #[error("cannot attach properties to a {typ} value")]
    PropsNotSupported {
        /// Category of the rejected target
        typ: ValueType,
    },
}
