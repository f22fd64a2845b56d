use crate::domain::IngredientHash;

/// Body of `POST /api/auth/register`.
///
/// Missing fields are serialized as `null` so that the validation paths of
/// the backend can be exercised.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Registration {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            name: Some(name.into()),
        }
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `PATCH /api/auth/user`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProfileUpdate {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            name: None,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            email: None,
            name: Some(name.into()),
        }
    }
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct NewOrder {
    pub ingredients: Vec<IngredientHash>,
}

impl NewOrder {
    pub fn new(ingredients: impl IntoIterator<Item = IngredientHash>) -> Self {
        Self {
            ingredients: ingredients.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
