use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::admin_user_conf::AdminUserConfig;
use crate::config::app_conf::AppConfig;
use crate::config::session_conf::SessionConfig;
use crate::handler::auth_handler::AuthState;
use crate::handler::menu_handler::MenuState;
use crate::handler::network_handler::network_test_handler;
use crate::handler::order_handler::OrderState;
use crate::middlewares::session_middleware::{resolve_session, SessionAuthState};
use crate::model::menu::MenuItem;
use crate::model::user::Role;
use crate::repository::menu_repo::InMemoryMenuRepository;
use crate::repository::order_repo::InMemoryOrderRepository;
use crate::repository::user_repo::{InMemoryUserRepository, UserRepository};
use crate::router::auth_router::auth_router;
use crate::router::menu_router::menu_router;
use crate::router::order_router::order_router;
use crate::service::menu_service::MenuServiceImpl;
use crate::service::order_service::OrderServiceImpl;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::session::InMemorySessionStore;

/// Demo catalog seeded at startup.
fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem { id: 1, name: "Chicken Biryani".to_string(), price: 120.0, category: "Main Course".to_string() },
        MenuItem { id: 2, name: "Veg Fried Rice".to_string(), price: 80.0, category: "Main Course".to_string() },
        MenuItem { id: 3, name: "Cold Coffee".to_string(), price: 50.0, category: "Beverages".to_string() },
    ]
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub user_service: Arc<UserServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let session_config = SessionConfig::from_env();

        let user_repo = Arc::new(InMemoryUserRepository::new());
        let menu_repo = Arc::new(InMemoryMenuRepository::new(seed_menu()));
        let order_repo = Arc::new(InMemoryOrderRepository::new());
        let sessions = Arc::new(InMemorySessionStore::new(chrono::Duration::hours(
            session_config.ttl_hours,
        )));

        let user_service = Arc::new(UserServiceImpl::new(user_repo.clone()));
        let menu_service = Arc::new(MenuServiceImpl::new(menu_repo.clone()));
        let order_service = Arc::new(OrderServiceImpl::new(order_repo, menu_repo));

        Self::seed_demo_users(user_repo.as_ref()).await;

        let auth_state = Arc::new(AuthState {
            user_service: user_service.clone(),
            sessions: sessions.clone(),
            session_config,
        });
        let menu_state = Arc::new(MenuState { menu_service });
        let order_state = Arc::new(OrderState { order_service });
        let session_auth_state = Arc::new(SessionAuthState { sessions });

        let router = Router::new()
            .merge(auth_router(auth_state))
            .merge(menu_router(menu_state))
            .merge(order_router(order_state))
            .route("/network-test", get(network_test_handler))
            .route("/health", get(|| async { "OK" }))
            .layer(middleware::from_fn_with_state(session_auth_state, resolve_session));

        let app = App { config, router, user_service };
        app.create_first_admin_user().await;
        app
    }

    /// The router with all state attached, for driving the app in tests
    /// without binding a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        info!("📍 Local access: http://127.0.0.1:{}", self.config.port);
        info!("🔧 Connectivity check from other devices: http://<your-ip>:{}/network-test", self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Failed to start server");
    }

    async fn seed_demo_users(user_repo: &InMemoryUserRepository) {
        let seeds = [
            ("admin", "admin123", "admin@college.com", Role::Admin),
            ("student", "password", "student@college.com", Role::Customer),
        ];
        for (username, password, email, role) in seeds {
            match user_repo
                .insert(username.to_string(), password.to_string(), email.to_string(), role)
                .await
            {
                Ok(_) => info!(username, "Seeded demo user"),
                Err(e) => error!("Failed to seed demo user {username}: {e}"),
            }
        }
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        if self
            .user_service
            .user_repo
            .find_by_username(&admin_conf.username)
            .await
            .is_some()
        {
            info!("Admin user already exists, skipping creation.");
            return;
        }

        match self
            .user_service
            .create_admin(admin_conf.username, admin_conf.password, admin_conf.email)
            .await
        {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}
