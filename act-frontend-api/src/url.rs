use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub(crate) fn activities(base: &str) -> String {
    format!("{base}/activities")
}

pub(crate) fn signup(base: &str, activity: &str, email: &str) -> String {
    let activity = utf8_percent_encode(activity, NON_ALPHANUMERIC);
    let email = utf8_percent_encode(email, NON_ALPHANUMERIC);
    format!("{base}/activities/{activity}/signup?email={email}")
}

pub(crate) fn unregister(base: &str, activity: &str, email: &str) -> String {
    let activity = utf8_percent_encode(activity, NON_ALPHANUMERIC);
    let email = utf8_percent_encode(email, NON_ALPHANUMERIC);
    format!("{base}/activities/{activity}/unregister?email={email}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activities_url_appends_collection_path() {
        assert_eq!(activities(""), "/activities");
        assert_eq!(activities("/api"), "/api/activities");
    }

    #[test]
    fn signup_url_percent_encodes_name_and_email() {
        assert_eq!(
            signup("", "Chess Club", "user+tag@example.com"),
            "/activities/Chess%20Club/signup?email=user%2Btag%40example%2Ecom"
        );
    }

    #[test]
    fn unregister_url_percent_encodes_name_and_email() {
        assert_eq!(
            unregister("", "Art Club", "emma@mergington.edu"),
            "/activities/Art%20Club/unregister?email=emma%40mergington%2Eedu"
        );
    }
}
