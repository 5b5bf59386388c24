use crate::model::user::User;
use crate::session::{SessionStore, SESSION_COOKIE};
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

pub struct SessionAuthState {
    pub sessions: Arc<dyn SessionStore>,
}

/// The authenticated user for this request, resolved once from the session
/// cookie. None means anonymous; handlers decide between a redirect and a
/// `{success:false}` body from there.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn role(&self) -> Option<crate::model::user::Role> {
        self.0.as_ref().map(|u| u.role)
    }
}

pub async fn resolve_session(
    State(state): State<Arc<SessionAuthState>>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let user = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()));
    req.extensions_mut().insert(CurrentUser(user));
    next.run(req).await
}
