use act_boundary::Activities;
use act_frontend_api as api;

/// What the activity list currently shows.
///
/// A reload triggered by a mutating action keeps the previously rendered
/// collection (including any optimistic insert) on screen until the fresh
/// server data arrives and replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Rendered(Activities),
    Failed,
}

impl ViewState {
    /// Names of the rendered activities, for the signup select control.
    #[must_use]
    pub fn activity_names(&self) -> Vec<String> {
        match self {
            Self::Rendered(activities) => activities.keys().cloned().collect(),
            Self::Loading | Self::Failed => Vec::new(),
        }
    }

    /// Optimistically add a participant to a rendered activity.
    ///
    /// Idempotent: inserting an email that is already listed is a no-op, so
    /// the later reconciling reload cannot produce a duplicate row. Returns
    /// whether the view actually changed.
    pub fn insert_participant(&mut self, activity: &str, email: &str) -> bool {
        let Self::Rendered(activities) = self else {
            return false;
        };
        let Some(activity) = activities.get_mut(activity) else {
            return false;
        };
        if activity.has_participant(email) {
            return false;
        }
        activity.participants.push(email.to_owned());
        true
    }
}

/// Intent dispatched by the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

/// Intent dispatched by the unregister button of a participant row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterRequest {
    pub activity: String,
    pub email: String,
}

/// User-facing text for a failed request.
///
/// Application-level errors surface the server-provided detail verbatim;
/// transport failures get the generic per-operation fallback.
#[must_use]
pub fn error_message(err: &api::Error, fallback: &str) -> String {
    match err {
        api::Error::Fetch(_) => fallback.to_owned(),
        api::Error::Api(err) if err.detail.is_empty() => "An error occurred".to_owned(),
        api::Error::Api(err) => err.detail.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use act_boundary::Activity;

    fn rendered(name: &str, participants: &[&str]) -> ViewState {
        let activity = Activity {
            description: "desc".into(),
            schedule: "Fridays".into(),
            max_participants: 10,
            participants: participants.iter().map(|&p| p.to_owned()).collect(),
        };
        ViewState::Rendered([(name.to_owned(), activity)].into_iter().collect())
    }

    fn participants(state: &ViewState, name: &str) -> Vec<String> {
        let ViewState::Rendered(activities) = state else {
            panic!("not rendered");
        };
        activities[name].participants.clone()
    }

    #[test]
    fn optimistic_insert_adds_participant_once() {
        let mut state = rendered("Chess Club", &["a@mergington.edu"]);
        assert!(state.insert_participant("Chess Club", "b@mergington.edu"));
        // a reconciling reload that raced the first insert changes nothing
        assert!(!state.insert_participant("Chess Club", "b@mergington.edu"));
        assert_eq!(
            participants(&state, "Chess Club"),
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
    }

    #[test]
    fn insert_into_unknown_activity_is_a_noop() {
        let mut state = rendered("Chess Club", &[]);
        assert!(!state.insert_participant("Drama Club", "a@mergington.edu"));
        assert_eq!(participants(&state, "Chess Club"), Vec::<String>::new());
    }

    #[test]
    fn insert_outside_rendered_state_is_a_noop() {
        let mut state = ViewState::Loading;
        assert!(!state.insert_participant("Chess Club", "a@mergington.edu"));
        assert_eq!(state, ViewState::Loading);

        let mut state = ViewState::Failed;
        assert!(!state.insert_participant("Chess Club", "a@mergington.edu"));
        assert_eq!(state, ViewState::Failed);
    }

    #[test]
    fn activity_names_lists_rendered_keys() {
        let state = rendered("Chess Club", &[]);
        assert_eq!(state.activity_names(), vec!["Chess Club"]);
        assert!(ViewState::Loading.activity_names().is_empty());
        assert!(ViewState::Failed.activity_names().is_empty());
    }

    #[test]
    fn error_message_prefers_server_detail() {
        let err = api::Error::Api(act_boundary::Error {
            detail: "Already signed up".into(),
        });
        assert_eq!(
            error_message(&err, "Failed to sign up. Please try again."),
            "Already signed up"
        );
    }

    #[test]
    fn error_message_falls_back_when_detail_is_empty() {
        let err = api::Error::Api(act_boundary::Error {
            detail: String::new(),
        });
        assert_eq!(
            error_message(&err, "Failed to sign up. Please try again."),
            "An error occurred"
        );
    }

    #[test]
    fn transport_error_uses_generic_fallback() {
        let err = api::Error::Fetch("connection refused".into());
        assert_eq!(
            error_message(&err, "Failed to unregister. Please try again."),
            "Failed to unregister. Please try again."
        );
    }
}
