//! CSV header preview flow, modeled as an explicit state machine.
//!
//! Each file selection starts one upload; the machine moves
//! `Idle -> AwaitingHeaders -> Ready` as the request resolves. Requests carry
//! monotonically increasing sequence numbers: picking another file while one
//! is in flight supersedes the pending request, and the superseded resolution
//! is discarded when it eventually arrives. Failures restore whatever header
//! list was on screen when the request started, so a failed re-upload leaves
//! a stale but usable picker instead of a cleared one.

/// Where the CSV header preview currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// No preview has succeeded yet; the field picker is disabled.
    Idle,
    /// A request is in flight. `prior` keeps the headers that were on screen
    /// when it started so a failure can fall back to them.
    AwaitingHeaders {
        seq: u64,
        prior: Option<Vec<String>>,
    },
    /// Headers arrived; the field picker is enabled.
    Ready(Vec<String>),
}

impl PreviewState {
    /// Marks request `seq` as pending. Any request already in flight is
    /// superseded: its sequence number is forgotten, so its resolution will
    /// be reported stale. The headers visible before the first of the
    /// overlapping requests remain the fallback.
    pub fn begin(&mut self, seq: u64) {
        let prior = match std::mem::replace(self, PreviewState::Idle) {
            PreviewState::Idle => None,
            PreviewState::AwaitingHeaders { prior, .. } => prior,
            PreviewState::Ready(headers) => Some(headers),
        };
        *self = PreviewState::AwaitingHeaders { seq, prior };
    }

    /// Applies a successful resolution of request `seq`, replacing (never
    /// merging) the header list. Returns `false` when `seq` is not the
    /// pending request, in which case nothing changes.
    pub fn succeed(&mut self, seq: u64, headers: Vec<String>) -> bool {
        if self.pending_seq() != Some(seq) {
            return false;
        }
        *self = PreviewState::Ready(headers);
        true
    }

    /// Applies a failed resolution of request `seq`: falls back to the
    /// headers visible before the request started, or to `Idle` when there
    /// were none. Returns `false` when `seq` is not the pending request.
    pub fn fail(&mut self, seq: u64) -> bool {
        match self {
            PreviewState::AwaitingHeaders { seq: pending, prior } if *pending == seq => {
                *self = match prior.take() {
                    Some(headers) => PreviewState::Ready(headers),
                    None => PreviewState::Idle,
                };
                true
            }
            _ => false,
        }
    }

    /// Headers the field picker should offer, if any. While a request is in
    /// flight this is still the previously delivered list.
    pub fn headers(&self) -> Option<&[String]> {
        match self {
            PreviewState::Idle => None,
            PreviewState::AwaitingHeaders { prior, .. } => prior.as_deref(),
            PreviewState::Ready(headers) => Some(headers),
        }
    }

    fn pending_seq(&self) -> Option<u64> {
        match self {
            PreviewState::AwaitingHeaders { seq, .. } => Some(*seq),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn starts_with_picker_disabled() {
        assert_eq!(PreviewState::Idle.headers(), None);
    }

    #[test]
    fn first_success_delivers_headers() {
        let mut state = PreviewState::Idle;
        state.begin(0);
        assert_eq!(state.headers(), None);

        assert!(state.succeed(0, headers(&["name", "phone"])));
        assert_eq!(state.headers(), Some(&headers(&["name", "phone"])[..]));
    }

    #[test]
    fn in_flight_request_keeps_prior_list_visible() {
        let mut state = PreviewState::Ready(headers(&["name"]));
        state.begin(1);
        assert_eq!(state.headers(), Some(&headers(&["name"])[..]));
    }

    #[test]
    fn success_replaces_instead_of_merging() {
        let mut state = PreviewState::Ready(headers(&["name"]));
        state.begin(1);
        assert!(state.succeed(1, headers(&["email"])));
        assert_eq!(state.headers(), Some(&headers(&["email"])[..]));
    }

    #[test]
    fn failure_restores_prior_list() {
        let mut state = PreviewState::Ready(headers(&["name"]));
        state.begin(1);
        assert!(state.fail(1));
        assert_eq!(state, PreviewState::Ready(headers(&["name"])));
    }

    #[test]
    fn failure_before_any_success_leaves_picker_disabled() {
        let mut state = PreviewState::Idle;
        state.begin(0);
        assert!(state.fail(0));
        assert_eq!(state, PreviewState::Idle);
    }

    #[test]
    fn superseded_resolution_is_discarded() {
        let mut state = PreviewState::Idle;
        state.begin(0);
        state.begin(1);

        assert!(!state.succeed(0, headers(&["stale"])));
        assert_eq!(state.headers(), None);

        assert!(state.succeed(1, headers(&["fresh"])));
        assert_eq!(state.headers(), Some(&headers(&["fresh"])[..]));
    }

    #[test]
    fn superseded_failure_is_discarded_too() {
        let mut state = PreviewState::Ready(headers(&["name"]));
        state.begin(1);
        state.begin(2);

        assert!(!state.fail(1));
        assert!(state.succeed(2, headers(&["email"])));
        assert_eq!(state, PreviewState::Ready(headers(&["email"])));
    }

    #[test]
    fn resolution_after_settling_is_ignored() {
        let mut state = PreviewState::Ready(headers(&["name"]));
        assert!(!state.succeed(7, headers(&["late"])));
        assert!(!state.fail(7));
        assert_eq!(state, PreviewState::Ready(headers(&["name"])));
    }
}
