use crate::domain::{Credentials, Registration};
use crate::test_data::{generate_email, generate_name, generate_password};
use secrecy::{ExposeSecret, Secret};

/// A backend account created for the duration of a single test.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub email: String,
    pub password: Secret<String>,
    pub name: String,
}

impl TestUser {
    pub fn generate() -> Self {
        Self {
            email: generate_email(),
            password: Secret::new(generate_password()),
            name: generate_name(),
        }
    }

    pub fn registration(&self) -> Registration {
        Registration::new(
            self.email.clone(),
            self.password.expose_secret().clone(),
            self.name.clone(),
        )
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.expose_secret().clone(),
        }
    }
}
