use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

/// Simulated provider login pages behind the dashboard's social buttons.
/// Pure presentation stubs; the pages post a message back to the opener and
/// carry no authentication semantics of their own.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/callback/google", get(google_callback))
        .route("/api/auth/callback/facebook", get(facebook_callback))
        .route("/api/auth/callback/twitter", get(twitter_callback))
}

async fn google_callback() -> Html<&'static str> {
    Html(include_str!("../../assets/google-login.html"))
}

async fn facebook_callback() -> Html<&'static str> {
    Html(include_str!("../../assets/facebook-login.html"))
}

async fn twitter_callback() -> Html<&'static str> {
    Html(include_str!("../../assets/twitter-login.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn callback_pages_post_back_to_the_opener() {
        let Html(google) = google_callback().await;
        let Html(facebook) = facebook_callback().await;
        let Html(twitter) = twitter_callback().await;

        assert!(google.contains("GOOGLE_LOGIN_SUCCESS"));
        assert!(facebook.contains("FACEBOOK_LOGIN_SUCCESS"));
        assert!(twitter.contains("TWITTER_LOGIN_SUCCESS"));
    }
}
