//! Router event stream types.

use vela_store::FetchError;

/// Why a navigation failed.
///
/// The error view is identical for all reasons; the distinction is
/// reported here for subscribers that want to surface or log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No document exists for the page identifier.
    NotFound,
    /// The document could not be parsed.
    Malformed,
    /// The content source failed at the transport level.
    Network,
    /// The fetch timed out.
    Timeout,
}

impl From<&FetchError> for FailureReason {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::NotFound(_) => Self::NotFound,
            FetchError::Malformed { .. } => Self::Malformed,
            FetchError::Network(_, _) => Self::Network,
            FetchError::Timeout(_) => Self::Timeout,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotFound => "not found",
            Self::Malformed => "malformed",
            Self::Network => "network error",
            Self::Timeout => "timeout",
        };
        f.write_str(s)
    }
}

/// Notification broadcast to router subscribers.
///
/// Navigation UI (active-link tracking, loading indicators, title
/// application) subscribes via [`Router::subscribe`](crate::Router::subscribe)
/// and reacts to these; the router never reaches into the UI directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// A navigation entered the loading state.
    Loading {
        /// Requested page identifier.
        page_id: String,
    },
    /// A navigation completed and the page is displayed.
    PageChanged {
        /// Displayed page identifier.
        page_id: String,
        /// Document title for the host to apply.
        title: String,
    },
    /// A navigation failed and the error view is displayed.
    NavigationFailed {
        /// Requested page identifier.
        page_id: String,
        /// Failure classification.
        reason: FailureReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_from_fetch_error() {
        let err = FetchError::NotFound("missing".to_owned());
        assert_eq!(FailureReason::from(&err), FailureReason::NotFound);

        let err = FetchError::Timeout("slow".to_owned());
        assert_eq!(FailureReason::from(&err), FailureReason::Timeout);
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::NotFound.to_string(), "not found");
        assert_eq!(FailureReason::Network.to_string(), "network error");
    }
}
