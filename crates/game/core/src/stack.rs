//! Bounded stack counts shared by items and equipment.

/// Errors raised when a stack count would leave its allowed range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackError {
    #[error("adding {requested} to a stack of {count} exceeds the maximum of {max}")]
    Overflow { count: u16, requested: u16, max: u16 },

    #[error("cannot remove {requested} from a stack of {count}")]
    Underflow { count: u16, requested: u16 },
}

impl crate::error::GameError for StackError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "STACK_OVERFLOW",
            Self::Underflow { .. } => "STACK_UNDERFLOW",
        }
    }
}

/// Count after adding `requested` (a request below 1 counts as 1).
pub(crate) fn checked_add(count: u16, requested: u16, max: u16) -> Result<u16, StackError> {
    let requested = requested.max(1);
    match count.checked_add(requested) {
        Some(total) if total <= max => Ok(total),
        _ => Err(StackError::Overflow {
            count,
            requested,
            max,
        }),
    }
}

/// Count after removing `requested`.
pub(crate) fn checked_remove(count: u16, requested: u16) -> Result<u16, StackError> {
    count
        .checked_sub(requested)
        .ok_or(StackError::Underflow { count, requested })
}
