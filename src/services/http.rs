//! HTTP Request Helper
//!
//! Runs one JSON request, racing it against an abort signal.

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::time::Duration;

use crate::error::{Error, ParseSnafu, Result};
use crate::services::abort::AbortSignal;

/// Per-request options (method, headers, body)
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    /// Raw body used when `execute` is called without params
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Append a query string when one is given
pub fn build_url(url: &str, params_url: Option<&str>) -> String {
    match params_url {
        Some(params) if !params.is_empty() => format!("{url}?{params}"),
        _ => url.to_string(),
    }
}

/// JSON-encode `params`, falling back to the configured body
pub fn request_body<P: Serialize>(
    params: Option<&P>,
    options: &RequestOptions,
) -> Result<Option<String>> {
    match params {
        Some(params) => Ok(Some(serde_json::to_string(params)?)),
        None => Ok(options.body.clone()),
    }
}

/// Perform a request and decode its JSON body
///
/// Returns [`Error::Aborted`] as soon as the signal fires, even mid-flight.
pub async fn http_request<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    body: Option<String>,
    options: &RequestOptions,
    signal: &AbortSignal,
) -> Result<T> {
    let mut request = client.request(options.method.clone(), url);
    for (name, value) in &options.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    if let Some(body) = body {
        request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
    }
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }

    tracing::debug!("{} {}", options.method, url);

    let exchange = async {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        let text = response.text().await?;
        serde_json::from_str::<T>(&text).context(ParseSnafu)
    };

    tokio::select! {
        biased;
        _ = signal.aborted() => Err(Error::Aborted),
        result = exchange => {
            if signal.is_aborted() {
                return Err(Error::Aborted);
            }
            result
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PARSE_ERROR_MSG;
    use crate::services::abort::AbortController;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Todo {
        id: u32,
        title: String,
    }

    #[test]
    fn test_build_url() {
        assert_eq!(build_url("http://x/api", None), "http://x/api");
        assert_eq!(build_url("http://x/api", Some("")), "http://x/api");
        assert_eq!(build_url("http://x/api", Some("page=2")), "http://x/api?page=2");
    }

    #[test]
    fn test_request_body_prefers_params() {
        let options = RequestOptions::new(Method::POST).body("{\"raw\":true}");
        let body = request_body(Some(&serde_json::json!({"q": 1})), &options).expect("body");
        assert_eq!(body.as_deref(), Some("{\"q\":1}"));

        let body = request_body::<()>(None, &options).expect("body");
        assert_eq!(body.as_deref(), Some("{\"raw\":true}"));
    }

    #[tokio::test]
    async fn test_success() {
        let url = test_server::serve(200, r#"{"id":1,"title":"done"}"#, Duration::ZERO).await;
        let signal = AbortController::new().signal();
        let todo: Todo = http_request(&Client::new(), &url, None, &RequestOptions::default(), &signal)
            .await
            .expect("todo");
        assert_eq!(todo, Todo { id: 1, title: "done".into() });
    }

    #[tokio::test]
    async fn test_status_error() {
        let url = test_server::serve(401, "{}", Duration::ZERO).await;
        let signal = AbortController::new().signal();
        let err = http_request::<Todo>(&Client::new(), &url, None, &RequestOptions::default(), &signal)
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Status { status: 401 }));
        assert_eq!(err.user_message(), "Unauthorized to access");
    }

    #[tokio::test]
    async fn test_parse_error() {
        let url = test_server::serve(200, "not json", Duration::ZERO).await;
        let signal = AbortController::new().signal();
        let err = http_request::<Todo>(&Client::new(), &url, None, &RequestOptions::default(), &signal)
            .await
            .expect_err("should fail");
        assert_eq!(err.user_message(), PARSE_ERROR_MSG);
    }

    #[tokio::test]
    async fn test_abort_mid_flight() {
        let url = test_server::serve(200, "{}", Duration::from_secs(5)).await;
        let controller = AbortController::new();
        let signal = controller.signal();
        let request = tokio::spawn(async move {
            http_request::<serde_json::Value>(
                &Client::new(),
                &url,
                None,
                &RequestOptions::default(),
                &signal,
            )
            .await
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.abort();
        let result = tokio::time::timeout(Duration::from_secs(1), request)
            .await
            .expect("aborted promptly")
            .expect("join");
        assert!(matches!(result, Err(Error::Aborted)));
    }
}
