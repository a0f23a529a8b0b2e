//! Errors reported by `Fifo` steps.

use core::fmt;

use thiserror::Error;

/// Error value indicating a request the queue could not honour in a step.
///
/// Rejected items are handed back through `element`, so nothing is lost on
/// failure. A rejected step leaves the cursors and flags as they were, apart
/// from a reset asserted in the same step.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Error)]
pub enum FifoError<T = ()> {
    /// Enqueue requested while full, with no dequeue in the same step.
    #[error("fifo overflow: enqueue requested while full")]
    Overflow {
        /// The element that caused the error.
        element: T,
    },

    /// Dequeue requested while empty, with no enqueue in the same step.
    #[error("fifo underflow: dequeue requested while empty")]
    Underflow,

    /// Enqueue and dequeue requested together while empty.
    ///
    /// This only occurs to `Fifo<_, Strict>`.
    #[error("indeterminate read: enqueue and dequeue requested while empty")]
    IndeterminateRead {
        /// The element that caused the error.
        element: T,
    },
}

impl<T> FifoError<T> {
    /// Drops the carried element, keeping only the kind of violation.
    pub fn kind(&self) -> FifoError {
        match *self {
            FifoError::Overflow { .. } => FifoError::Overflow { element: () },
            FifoError::Underflow => FifoError::Underflow,
            FifoError::IndeterminateRead { .. } => FifoError::IndeterminateRead { element: () },
        }
    }

    /// Takes back the element that was refused, if any.
    pub fn into_element(self) -> Option<T> {
        match self {
            FifoError::Overflow { element } | FifoError::IndeterminateRead { element } => {
                Some(element)
            }
            FifoError::Underflow => None,
        }
    }

    fn name(&self) -> &'static str {
        match *self {
            FifoError::Overflow { .. } => "Overflow",
            FifoError::Underflow => "Underflow",
            FifoError::IndeterminateRead { .. } => "IndeterminateRead",
        }
    }
}

impl<T> fmt::Debug for FifoError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FifoError::{}: {}", self.name(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::FifoError;

    #[test]
    fn kind_strips_element() {
        let err = FifoError::Overflow { element: "late" };
        assert_eq!(err.kind(), FifoError::Overflow { element: () });
        assert_eq!(err.into_element(), Some("late"));
        assert_eq!(FifoError::<u8>::Underflow.into_element(), None);
    }

    #[test]
    fn messages() {
        let err: FifoError<u8> = FifoError::IndeterminateRead { element: 1 };
        assert_eq!(
            err.to_string(),
            "indeterminate read: enqueue and dequeue requested while empty"
        );
        assert_eq!(
            format!("{:?}", FifoError::<u8>::Underflow),
            "FifoError::Underflow: fifo underflow: dequeue requested while empty"
        );
    }
}
