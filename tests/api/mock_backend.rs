//! A `MockServer` speaking the food-ordering backend's contract, so the step
//! helpers, fixture and assertions can be exercised offline.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const INGREDIENT_IDS: [&str; 3] = [
    "61c0c5a71d1f82001bdaaa6d",
    "61c0c5a71d1f82001bdaaa6f",
    "61c0c5a71d1f82001bdaaa70",
];

pub fn auth_body(email: &str, name: &str, access_token: &str) -> Value {
    json!({
        "success": true,
        "user": { "email": email, "name": name },
        "accessToken": access_token,
        "refreshToken": "0f1e2d3c4b5a69788796a5b4c3d2e1f0"
    })
}

pub fn error_body(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Matches requests that carry no `Authorization` header at all.
pub struct Anonymous;
impl wiremock::Match for Anonymous {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("Authorization")
    }
}

/// Matches registrations where at least one required field is `null` or absent.
pub struct MissingRequiredField;
impl wiremock::Match for MissingRequiredField {
    fn matches(&self, request: &Request) -> bool {
        match serde_json::from_slice::<Value>(&request.body) {
            Ok(body) => ["email", "password", "name"]
                .iter()
                .any(|field| body.get(field).map_or(true, Value::is_null)),
            Err(_) => false,
        }
    }
}

/// Every mock below also insists on the JSON content type, which the step
/// helpers send on every request.
pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub async fn accept_registration(&self, email: &str, name: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(json!({ "email": email, "name": name })))
            .respond_with(json_response(200, auth_body(email, name, token)))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    pub async fn reject_registration(&self, email: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(json!({ "email": email })))
            .respond_with(json_response(403, error_body(message)))
            .mount(&self.server)
            .await;
    }

    pub async fn reject_incomplete_registrations(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(header("Content-Type", "application/json"))
            .and(MissingRequiredField)
            .respond_with(json_response(403, error_body(message)))
            .mount(&self.server)
            .await;
    }

    pub async fn accept_login(&self, email: &str, password: &str, name: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "email": email, "password": password })))
            .respond_with(json_response(200, auth_body(email, name, token)))
            .mount(&self.server)
            .await;
    }

    /// Any login that did not match an accepted one.
    pub async fn reject_other_logins(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(header("Content-Type", "application/json"))
            .respond_with(json_response(401, error_body(message)))
            .mount(&self.server)
            .await;
    }

    pub async fn expect_deletion(&self, token: &str, times: u64) {
        Mock::given(method("DELETE"))
            .and(path("/api/auth/user"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", token))
            .respond_with(json_response(
                202,
                json!({ "success": true, "message": "User successfully removed" }),
            ))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    pub async fn serve_ingredients(&self) {
        let data: Vec<Value> = INGREDIENT_IDS
            .iter()
            .enumerate()
            .map(|(i, id)| {
                json!({
                    "_id": id,
                    "name": format!("Ingredient {}", i),
                    "type": if i == 0 { "bun" } else { "main" },
                    "price": 100 * (i + 1)
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path("/api/ingredients"))
            .and(header("Content-Type", "application/json"))
            .respond_with(json_response(200, json!({ "success": true, "data": data })))
            .mount(&self.server)
            .await;
    }

    /// Anything without a token on a protected endpoint gets a 401.
    pub async fn require_authorization(&self, message: &str) {
        for (verb, route) in [
            ("POST", "/api/orders"),
            ("GET", "/api/orders"),
            ("PATCH", "/api/auth/user"),
        ] {
            Mock::given(method(verb))
                .and(path(route))
                .and(header("Content-Type", "application/json"))
                .and(Anonymous)
                .respond_with(json_response(401, error_body(message)))
                .mount(&self.server)
                .await;
        }
    }

    /// `token` of `None` only matches anonymous requests.
    pub async fn respond_to_order(
        &self,
        token: Option<&str>,
        ingredients: Value,
        response: ResponseTemplate,
    ) {
        let builder = Mock::given(method("POST"))
            .and(path("/api/orders"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "ingredients": ingredients })));
        let builder = match token {
            Some(token) => builder.and(header("Authorization", token)),
            None => builder.and(Anonymous),
        };
        builder.respond_with(response).mount(&self.server).await;
    }

    pub async fn accept_order(&self, token: &str, ingredients: &[&str], number: u64) {
        let response = json_response(
            200,
            json!({
                "success": true,
                "name": "Space burger",
                "order": { "number": number }
            }),
        );
        self.respond_to_order(Some(token), json!(ingredients), response)
            .await;
    }

    pub async fn list_orders(&self, token: &str, ingredients: &[&str], number: u64) {
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", token))
            .respond_with(json_response(
                200,
                json!({
                    "success": true,
                    "orders": [{
                        "_id": "6650b1f2e0a1b2c3d4e5f607",
                        "ingredients": ingredients,
                        "status": "done",
                        "number": number,
                        "createdAt": "2024-05-24T10:00:00.000Z",
                        "updatedAt": "2024-05-24T10:00:01.000Z"
                    }],
                    "total": 50000,
                    "totalToday": 120
                }),
            ))
            .mount(&self.server)
            .await;
    }

    pub async fn respond_to_update(&self, token: &str, body: Value, response: ResponseTemplate) {
        Mock::given(method("PATCH"))
            .and(path("/api/auth/user"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", token))
            .and(body_json(body))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    pub async fn accept_update(&self, token: &str, body: Value, email: &str, name: &str) {
        let response = json_response(
            200,
            json!({ "success": true, "user": { "email": email, "name": name } }),
        );
        self.respond_to_update(token, body, response).await;
    }

    pub async fn reject_update(&self, token: &str, body: Value, status: u16, message: &str) {
        self.respond_to_update(token, body, json_response(status, error_body(message)))
            .await;
    }
}
