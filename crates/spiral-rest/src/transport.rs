//! Request dispatch: resource resolution, parameter placement, auth headers,
//! and the timeout race
//!
//! Every endpoint funnels through [`SpiralRestClient::execute`]. Read-style
//! verbs (GET/DELETE) carry parameters in the query string and sign
//! path+query with an empty body; POST carries them as a JSON body and signs
//! the bare path with that body.

use crate::client::SpiralRestClient;
use crate::error::{RestError, RestResult};
use reqwest::{header, Method, StatusCode};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Expiry window attached to authenticated requests (`api-expires`)
const AUTH_EXPIRY_WINDOW_SECS: u64 = 5;

impl SpiralRestClient {
    /// Issue one HTTP request against the Spiral API and return the raw
    /// response body.
    ///
    /// HTTP 200 and 401 both pass the body through; 401 is not a transport
    /// failure because the embedded envelope carries the real error for the
    /// caller to inspect. Any other status fails with its status text.
    pub(crate) async fn execute(
        &self,
        method: Method,
        resource: &str,
        params: &BTreeMap<String, String>,
        auth_required: bool,
    ) -> RestResult<Vec<u8>> {
        // A resource that already looks like a full URL is used verbatim.
        let mut url = if resource.starts_with("http") {
            resource.to_string()
        } else {
            format!("{}/{}", self.base_url, resource)
        };

        let is_write = method == Method::POST;
        let mut body = String::new();
        if is_write {
            body = serde_json::to_string(params)?;
        } else if !params.is_empty() {
            let query = serde_urlencoded::to_string(params)
                .map_err(|e| RestError::Transport(e.to_string()))?;
            url = format!("{url}?{query}");
        }

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(header::ACCEPT, "application/json");

        if is_write {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        if auth_required {
            let creds = self
                .credentials
                .as_ref()
                .filter(|c| c.is_complete())
                .ok_or(RestError::AuthRequired)?;

            let expires = (unix_now() + AUTH_EXPIRY_WINDOW_SECS).to_string();
            let signature = if is_write {
                creds.sign(method.as_str(), resource, &BTreeMap::new(), &expires, &body)
            } else {
                creds.sign(method.as_str(), resource, params, &expires, "")
            };

            request = request
                .header("api-key", creds.api_key())
                .header("api-expires", &expires)
                .header("api-signature", signature);
        }

        if self.debug {
            debug!(method = %method, url = %url, body = %body, "dispatching request");
        }

        // Race the network call against the timeout. The call runs on its
        // own task, so when the timer fires first the task is abandoned, not
        // cancelled; a late response is simply discarded.
        let in_flight = tokio::spawn(request.send());
        let response = match tokio::time::timeout(self.timeout, in_flight).await {
            Err(_) => return Err(RestError::Timeout(self.timeout)),
            Ok(Err(join_error)) => return Err(RestError::Transport(join_error.to_string())),
            Ok(Ok(sent)) => sent?,
        };

        let status = response.status();
        let bytes = response.bytes().await?;

        if self.debug {
            debug!(
                status = %status,
                body = %String::from_utf8_lossy(&bytes),
                "received response"
            );
        }

        if status != StatusCode::OK && status != StatusCode::UNAUTHORIZED {
            return Err(RestError::Status {
                code: status.as_u16(),
                text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        Ok(bytes.to_vec())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_now_is_plausible() {
        // 2021-01-01 as a sanity floor
        assert!(unix_now() > 1_609_459_200);
    }
}
