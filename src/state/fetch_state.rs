//! FetchState - Request Lifecycle Reducer
//!
//! Shared by every fetch-style hook: a status enum plus the latest data and
//! error, driven exclusively through [`fetch_reducer`].

use std::fmt::Debug;

/// Request status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl FetchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Pending => "pending",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        }
    }
}

/// Lifecycle state of one request slot
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T, E = String> {
    pub status: FetchStatus,
    pub data: Option<T>,
    pub error: Option<E>,
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T, E> FetchState<T, E> {
    pub fn is_pending(&self) -> bool {
        self.status == FetchStatus::Pending
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }
}

/// Transitions accepted by [`fetch_reducer`]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T, E = String> {
    /// A request started
    Pending,
    /// A request finished with data
    Resolve(T),
    /// A request failed
    Rejected(E),
    /// Back to the initial state
    Reset,
}

impl<T, E> FetchAction<T, E> {
    pub fn name(&self) -> &'static str {
        match self {
            FetchAction::Pending => "PENDING",
            FetchAction::Resolve(_) => "RESOLVE",
            FetchAction::Rejected(_) => "REJECTED",
            FetchAction::Reset => "RESET",
        }
    }
}

/// Apply an action to a fetch state
pub fn fetch_reducer<T, E: Debug>(state: FetchState<T, E>, action: FetchAction<T, E>) -> FetchState<T, E> {
    match &action {
        FetchAction::Rejected(error) => {
            tracing::debug!("Fetch action: {}, error: {:?}", action.name(), error)
        }
        _ => tracing::debug!("Fetch action: {}", action.name()),
    }

    match action {
        FetchAction::Pending => FetchState {
            status: FetchStatus::Pending,
            data: None,
            error: None,
        },
        FetchAction::Resolve(data) => FetchState {
            status: FetchStatus::Success,
            data: Some(data),
            error: None,
        },
        FetchAction::Rejected(error) => FetchState {
            status: FetchStatus::Error,
            error: Some(error),
            ..state
        },
        FetchAction::Reset => FetchState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = FetchState<u32>;

    #[test]
    fn test_initial_state() {
        let state = State::default();
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_pending_clears_previous_result() {
        let state = State {
            status: FetchStatus::Error,
            data: Some(1),
            error: Some("boom".into()),
        };
        let state = fetch_reducer(state, FetchAction::Pending);
        assert!(state.is_pending());
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_resolve_then_reject_keeps_data() {
        let state = fetch_reducer(State::default(), FetchAction::Resolve(7));
        assert!(state.is_success());
        assert_eq!(state.data, Some(7));

        let state = fetch_reducer(state, FetchAction::Rejected("late failure".into()));
        assert!(state.is_error());
        assert_eq!(state.data, Some(7));
        assert_eq!(state.error.as_deref(), Some("late failure"));
    }

    #[test]
    fn test_reset() {
        let state = fetch_reducer(State::default(), FetchAction::Resolve(3));
        assert_eq!(fetch_reducer(state, FetchAction::Reset), State::default());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(FetchStatus::Pending.label(), "pending");
        assert_eq!(FetchAction::<u32>::Reset.name(), "RESET");
    }
}
