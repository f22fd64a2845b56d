use crate::api_client::ApiClient;
use crate::configuration::{ApiSettings, get_configuration};
use crate::domain::{AccessToken, AuthResponse, TestUser};
use crate::error::{SetupError, StepError};
use reqwest::StatusCode;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

/// Setup/teardown harness wrapped around every test.
///
/// Construction pins the client to the configured base URL. Every token
/// recorded during the test is used to delete its user on teardown.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub api: ApiClient,
    tokens: Arc<Mutex<Vec<AccessToken>>>,
}

impl TestContext {
    pub fn new(settings: ApiSettings) -> Result<Self, reqwest::Error> {
        tracing::debug!(base_url = %settings.base_url, "Preparing test context");
        Ok(Self {
            api: settings.client()?,
            tokens: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn from_configuration() -> Result<Self, SetupError> {
        let configuration = get_configuration()?;
        Ok(Self::new(configuration.api)?)
    }

    fn lock_tokens(&self) -> MutexGuard<'_, Vec<AccessToken>> {
        // A panicking test body must not prevent cleanup
        self.tokens.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn record_token(&self, token: AccessToken) {
        if token.is_empty() {
            tracing::debug!("Ignoring an empty access token");
            return;
        }
        self.lock_tokens().push(token);
    }

    pub fn recorded_tokens(&self) -> usize {
        self.lock_tokens().len()
    }

    /// Registers `user`, expecting success, and records the issued token.
    pub async fn register(&self, user: &TestUser) -> Result<AuthResponse, StepError> {
        let auth = self.api.register_new_user(user).await?;
        self.record_token(auth.access_token.clone());
        Ok(auth)
    }

    /// Generates a fresh user and registers it.
    pub async fn register_generated_user(&self) -> Result<(TestUser, AuthResponse), StepError> {
        let user = TestUser::generate();
        let auth = self.register(&user).await?;
        Ok((user, auth))
    }

    async fn delete_recorded_users(&self) -> Vec<Result<StatusCode, reqwest::Error>> {
        let tokens = std::mem::take(&mut *self.lock_tokens());
        let mut outcomes = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let outcome = self
                .api
                .delete_user(Some(token))
                .await
                .map(|response| response.status());
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Deletes every recorded user and asserts each deletion was accepted.
    /// Does nothing when no token was recorded.
    #[tracing::instrument(name = "Tearing down test context", skip(self))]
    pub async fn teardown(&self) {
        let outcomes = self.delete_recorded_users().await;
        if outcomes.is_empty() {
            tracing::debug!("No user was created, nothing to clean up");
        }
        for outcome in outcomes {
            let status = outcome.expect("Failed to execute the user deletion request.");
            assert_eq!(status, StatusCode::ACCEPTED, "User deletion was not accepted");
        }
    }

    async fn teardown_after_failure(&self) {
        for outcome in self.delete_recorded_users().await {
            match outcome {
                Ok(StatusCode::ACCEPTED) => {}
                Ok(status) => tracing::error!(%status, "User deletion was not accepted"),
                Err(e) => tracing::error!(error = ?e, "Failed to execute the user deletion request"),
            }
        }
    }

    /// Runs `body` and always tears the context down afterwards, also when
    /// `body` panics. The panic of `body` is resumed after cleanup.
    pub async fn run_test<F, Fut>(self, body: F)
    where
        F: FnOnce(TestContext) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let outcome = tokio::spawn(body(self.clone())).await;
        match outcome {
            Ok(()) => self.teardown().await,
            Err(e) => {
                self.teardown_after_failure().await;
                if e.is_panic() {
                    std::panic::resume_unwind(e.into_panic());
                }
                panic!("Test body did not complete: {}", e);
            }
        }
    }
}
