use crate::config::SessionConfig;
use crate::dto::auth_dto::{LoginForm, RegisterForm};
use crate::middlewares::session_middleware::CurrentUser;
use crate::model::user::Role;
use crate::service::user_service::UserService;
use crate::session::{SessionStore, SESSION_COOKIE};
use crate::util::error::ServiceError;
use crate::view::pages;
use axum::{
    extract::{Extension, Form, State},
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use tracing::info;

pub struct AuthState {
    pub user_service: Arc<dyn UserService>,
    pub sessions: Arc<dyn SessionStore>,
    pub session_config: SessionConfig,
}

// GET /
pub async fn index_handler(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    if current.0.is_some() {
        Redirect::to("/menu").into_response()
    } else {
        Html(pages::login_page(None, None)).into_response()
    }
}

// POST /login
pub async fn login_handler(
    State(state): State<Arc<AuthState>>,
    jar: CookieJar,
    Form(payload): Form<LoginForm>,
) -> impl IntoResponse {
    match state.user_service.login(&payload.username, &payload.password).await {
        Ok(user) => {
            let token = state.sessions.create(&user);
            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .max_age(time::Duration::hours(state.session_config.ttl_hours))
                .build();
            let target = match user.role {
                Role::Admin => "/admin",
                Role::Customer => "/menu",
            };
            (jar.add(cookie), Redirect::to(target)).into_response()
        }
        Err(_) => Html(pages::login_page(Some("Invalid credentials"), None)).into_response(),
    }
}

// POST /register
pub async fn register_handler(
    State(state): State<Arc<AuthState>>,
    Form(payload): Form<RegisterForm>,
) -> impl IntoResponse {
    match state
        .user_service
        .register(payload.username, payload.password, payload.email)
        .await
    {
        Ok(_) => Html(pages::login_page(
            None,
            Some("Registration successful! Please login."),
        )),
        Err(ServiceError::Conflict(_)) => {
            Html(pages::login_page(Some("Username exists"), None))
        }
        Err(_) => Html(pages::login_page(Some("Registration failed"), None)),
    }
}

// GET /logout
pub async fn logout_handler(State(state): State<Arc<AuthState>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        info!("Destroying session on logout");
        state.sessions.destroy(cookie.value());
    }
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    (jar, Redirect::to("/"))
}
