/// Failure of a step that expects a specific outcome from the backend.
#[derive(thiserror::Error)]
pub enum StepError {
    #[error("Failed to execute request for step `{step}`")]
    Transport {
        step: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Step `{step}` expected status {expected} but the backend returned {actual}: {body}")]
    UnexpectedStatus {
        step: &'static str,
        expected: u16,
        actual: u16,
        body: String,
    },
    #[error("Failed to decode the response body of step `{step}`")]
    Decode {
        step: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl std::fmt::Debug for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Failure to prepare a test context.
#[derive(thiserror::Error)]
pub enum SetupError {
    #[error("Failed to read the configuration")]
    Configuration(#[from] config::ConfigError),
    #[error("Failed to build the HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

impl std::fmt::Debug for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
