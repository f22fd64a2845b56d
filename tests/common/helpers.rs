use burger_api_suite::configuration::ApiSettings;
use burger_api_suite::fixture::TestContext;
use burger_api_suite::telemetry::{get_subscriber, init_subscriber};
use std::sync::{LazyLock, Mutex};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

// This holds the guard for the entire lifetime of the test process
static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
pub static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    let loglevel = std::env::var("LOGLEVEL").unwrap_or(default_filter_level);

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, loglevel, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, loglevel, test_writer());
        init_subscriber(subscriber);
    }
});

pub fn test_writer() -> NonBlocking {
    let test_name = std::env::args()
        .skip_while(|arg| arg != "--exact")
        .nth(1)
        .map(|arg| arg.replace("::", "-"))
        .unwrap_or("unlabeled_test".into())
        .replace(' ', "_");

    let _ = std::fs::create_dir_all("tests/logs/nextest");
    let _ = std::fs::create_dir_all("tests/logs/cargo_test");

    let filename = if test_name != "unlabeled_test" {
        format!("tests/logs/nextest/{}.log", test_name)
    } else {
        "tests/logs/cargo_test/cargo_test.log".to_string()
    };

    let file_appender = tracing_appender::rolling::never(".", filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Store the guard to prevent it from being dropped
    *LOG_GUARD.lock().unwrap() = Some(guard);

    non_blocking
}

/// Fixture pointed at the configured backend.
#[allow(dead_code)]
#[tracing::instrument(name = "Spawning test context", skip_all, fields(test_name = %test_name.as_ref()))]
pub fn spawn_context(test_name: impl AsRef<str>) -> TestContext {
    LazyLock::force(&TRACING);
    TestContext::from_configuration().expect("Failed to read configuration.")
}

/// Fixture pointed at an arbitrary backend, typically a `wiremock::MockServer`.
#[allow(dead_code)]
#[tracing::instrument(name = "Spawning test context", skip_all, fields(test_name = %test_name.as_ref()))]
pub fn spawn_context_at(base_url: String, test_name: impl AsRef<str>) -> TestContext {
    LazyLock::force(&TRACING);
    TestContext::new(ApiSettings {
        base_url,
        timeout_milliseconds: Some(2_000),
    })
    .expect("Failed to build the HTTP client.")
}
