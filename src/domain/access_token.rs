use secrecy::{ExposeSecret, Secret};

/// Bearer credential issued at registration or login.
///
/// The backend returns it with its `Bearer ` prefix and expects it back
/// verbatim in the `Authorization` header.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(transparent)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub const BEARER_PREFIX: &'static str = "Bearer ";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(Secret::new(raw.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub fn has_bearer_prefix(&self) -> bool {
        self.0.expose_secret().starts_with(Self::BEARER_PREFIX)
    }
}

impl ExposeSecret<String> for AccessToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
