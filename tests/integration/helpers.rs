//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use album_console::Console;
use album_core::config::{AppConfig, Locale};
use album_core::failure::Failure;
use album_core::traits::AuthService;
use album_entity::user::{Role, UserProfile};
use album_ui::profile::ProfilePage;

/// A call received by [`FakeAuthService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCall {
    UpdateProfile { username: String, email: String },
    ChangePassword { current: String, new: String },
}

/// Auth service returning scripted results in order; `Ok` once exhausted.
#[derive(Default)]
pub struct FakeAuthService {
    calls: Mutex<Vec<AuthCall>>,
    results: Mutex<VecDeque<Result<(), Failure>>>,
}

impl FakeAuthService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the result of the next call.
    pub fn push_result(&self, result: Result<(), Failure>) {
        self.results.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: AuthCall) -> Result<(), Failure> {
        self.calls.lock().unwrap().push(call);
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

#[async_trait]
impl AuthService for FakeAuthService {
    async fn update_profile(&self, username: &str, email: &str) -> Result<(), Failure> {
        self.respond(AuthCall::UpdateProfile {
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), Failure> {
        self.respond(AuthCall::ChangePassword {
            current: current_password.to_string(),
            new: new_password.to_string(),
        })
    }
}

/// Console plus a fake auth service.
pub struct TestApp {
    pub console: Console,
    pub service: Arc<FakeAuthService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn portuguese() -> Self {
        let mut config = AppConfig::default();
        config.messages.locale = Locale::PtBr;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            console: Console::new(config).expect("valid test config"),
            service: FakeAuthService::new(),
        }
    }

    /// Put a user into the session.
    pub fn sign_in(&self, username: &str) -> UserProfile {
        let user = make_user(username);
        self.console.session().set_user(Some(user.clone()));
        user
    }

    pub fn page(&self) -> ProfilePage {
        self.console.profile_page(self.service.clone())
    }

    /// Messages of the visible toasts, oldest first.
    pub fn toast_messages(&self) -> Vec<String> {
        self.console
            .toasts()
            .visible()
            .into_iter()
            .map(|t| t.message)
            .collect()
    }
}

pub fn make_user(username: &str) -> UserProfile {
    UserProfile {
        id: 17,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        roles: vec![Role::User],
        active: true,
        created_at: None,
        last_login: None,
    }
}
