use crate::domain::{
    AccessToken, AuthResponse, Credentials, IngredientHash, IngredientsResponse, NewOrder,
    ProfileUpdate, Registration, TestUser,
};
use crate::error::StepError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const USER_PATH: &str = "/api/auth/user";
pub const ORDERS_PATH: &str = "/api/orders";
pub const INGREDIENTS_PATH: &str = "/api/ingredients";

/// One method per backend endpoint. Every call issues exactly one request
/// and hands the raw response back to the caller.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    pub fn new(
        base_url: String,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        // Leaving the header out is how unauthorized access is exercised
        match token.filter(|t| !t.is_empty()) {
            Some(token) => builder.header(AUTHORIZATION, token.expose_secret()),
            None => builder,
        }
    }

    #[tracing::instrument(
        name = "Registering user",
        skip(self, registration),
        fields(email = ?registration.email, name = ?registration.name)
    )]
    pub async fn register_user(
        &self,
        registration: &Registration,
    ) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::POST, REGISTER_PATH, None)
            .json(registration)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Registration answered");
        Ok(response)
    }

    #[tracing::instrument(name = "Logging in", skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login_user(&self, credentials: &Credentials) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::POST, LOGIN_PATH, None)
            .json(credentials)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Login answered");
        Ok(response)
    }

    #[tracing::instrument(name = "Deleting user", skip_all, fields(authorized = sends_token(token)))]
    pub async fn delete_user(&self, token: Option<&AccessToken>) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::DELETE, USER_PATH, token)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Deletion answered");
        Ok(response)
    }

    #[tracing::instrument(name = "Fetching ingredients", skip(self))]
    pub async fn fetch_ingredients(&self) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::GET, INGREDIENTS_PATH, None)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Ingredient listing answered");
        Ok(response)
    }

    #[tracing::instrument(
        name = "Creating order",
        skip(self, order, token),
        fields(ingredients = order.ingredients.len(), authorized = sends_token(token))
    )]
    pub async fn create_order(
        &self,
        order: &NewOrder,
        token: Option<&AccessToken>,
    ) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::POST, ORDERS_PATH, token)
            .json(order)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Order creation answered");
        Ok(response)
    }

    #[tracing::instrument(name = "Fetching orders", skip_all, fields(authorized = sends_token(token)))]
    pub async fn fetch_orders(&self, token: Option<&AccessToken>) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::GET, ORDERS_PATH, token)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Order listing answered");
        Ok(response)
    }

    #[tracing::instrument(
        name = "Updating user",
        skip(self, update, token),
        fields(email = ?update.email, name = ?update.name, authorized = sends_token(token))
    )]
    pub async fn update_user(
        &self,
        update: &ProfileUpdate,
        token: Option<&AccessToken>,
    ) -> Result<Response, reqwest::Error> {
        let response = self
            .request(Method::PATCH, USER_PATH, token)
            .json(update)
            .send()
            .await?;
        tracing::info!(status = %response.status(), "Profile update answered");
        Ok(response)
    }

    /// Registers `user` and insists on a 200.
    pub async fn register_new_user(&self, user: &TestUser) -> Result<AuthResponse, StepError> {
        let step = "register user";
        let response = self
            .register_user(&user.registration())
            .await
            .map_err(|source| StepError::Transport { step, source })?;
        expect_json(step, response, StatusCode::OK).await
    }

    /// Logs `user` in and insists on a 200.
    pub async fn login_as(&self, user: &TestUser) -> Result<AuthResponse, StepError> {
        let step = "login user";
        let response = self
            .login_user(&user.credentials())
            .await
            .map_err(|source| StepError::Transport { step, source })?;
        expect_json(step, response, StatusCode::OK).await
    }

    pub async fn ingredient_hashes(&self) -> Result<Vec<IngredientHash>, StepError> {
        let step = "fetch ingredients";
        let response = self
            .fetch_ingredients()
            .await
            .map_err(|source| StepError::Transport { step, source })?;
        let listing: IngredientsResponse = expect_json(step, response, StatusCode::OK).await?;
        Ok(listing.hashes())
    }
}

/// Whether `token` ends up in the `Authorization` header.
fn sends_token(token: Option<&AccessToken>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

async fn expect_json<T>(
    step: &'static str,
    response: Response,
    expected: StatusCode,
) -> Result<T, StepError>
where
    T: serde::de::DeserializeOwned,
{
    let actual = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| StepError::Transport { step, source })?;
    if actual != expected {
        return Err(StepError::UnexpectedStatus {
            step,
            expected: expected.as_u16(),
            actual: actual.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|source| StepError::Decode { step, source })
}
