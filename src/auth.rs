use crate::persisted_store;

/// The single demo credential pair accepted by the local fallback login.
/// Real sign-in goes through the external identity provider.
pub(crate) const DEMO_EMAIL: &str = "test@example.com";
pub(crate) const DEMO_PASSWORD: &str = "1234";
pub(crate) const DEMO_USER_ID: &str = "demo";

pub(crate) fn demo_login(email: &str, password: &str) -> Option<String> {
    if email.trim() == DEMO_EMAIL && password == DEMO_PASSWORD {
        Some(DEMO_USER_ID.to_string())
    } else {
        None
    }
}

pub(crate) fn current_user() -> Option<String> {
    persisted_store::session_record().user_id
}

pub(crate) fn is_authenticated() -> bool {
    current_user().is_some()
}

pub(crate) fn sign_in(user_id: &str) {
    let user_id = user_id.to_string();
    persisted_store::update_session_record(|record| {
        record.user_id = Some(user_id);
    });
}

pub(crate) fn sign_out() {
    persisted_store::update_session_record(|record| {
        record.user_id = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_demo_pair_is_accepted() {
        assert_eq!(demo_login(DEMO_EMAIL, DEMO_PASSWORD).as_deref(), Some("demo"));
        assert_eq!(demo_login(" test@example.com ", DEMO_PASSWORD).as_deref(), Some("demo"));
        assert!(demo_login(DEMO_EMAIL, "wrong").is_none());
        assert!(demo_login("other@example.com", DEMO_PASSWORD).is_none());
        assert!(demo_login("", "").is_none());
    }
}
