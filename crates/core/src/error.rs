/// Which externally visible outcome an error collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller did not present a usable identity.
    Unauthorized,
    /// Anything that went wrong on our side. Details stay in the logs.
    Unavailable,
}

/// A fixed, client-facing error: its kind plus the only message clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Returned when the identity header is missing, malformed, or zero.
pub const UNAUTHORIZED: ErrorDescriptor = ErrorDescriptor {
    kind: ErrorKind::Unauthorized,
    message: "please include a valid USER_ID header in the request",
};

/// Returned for every internal failure.
pub const SERVICE_UNAVAILABLE: ErrorDescriptor = ErrorDescriptor {
    kind: ErrorKind::Unavailable,
    message: "sorry, this service is currently unavailable",
};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unauthorized: missing or invalid identity")]
    Unauthorized,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The descriptor this error is reported to clients as.
    pub fn descriptor(&self) -> ErrorDescriptor {
        match self {
            CoreError::Unauthorized => UNAUTHORIZED,
            CoreError::Validation(_) | CoreError::Internal(_) => SERVICE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_unauthorized_descriptor() {
        assert_eq!(CoreError::Unauthorized.descriptor(), UNAUTHORIZED);
    }

    #[test]
    fn other_errors_collapse_to_unavailable() {
        let validation = CoreError::Validation("bad id".into());
        let internal = CoreError::Internal("boom".into());
        assert_eq!(validation.descriptor().kind, ErrorKind::Unavailable);
        assert_eq!(internal.descriptor(), SERVICE_UNAVAILABLE);
    }

    #[test]
    fn descriptor_messages_are_fixed() {
        assert_eq!(
            UNAUTHORIZED.message,
            "please include a valid USER_ID header in the request"
        );
        assert_eq!(
            SERVICE_UNAVAILABLE.message,
            "sorry, this service is currently unavailable"
        );
    }
}
