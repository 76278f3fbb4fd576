//! GraphQL transport.
//!
//! Every request carries the backend session cookie: in the browser the fetch
//! is made with `credentials: "include"`, natively the client keeps a cookie jar.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::queries::Operation;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V> {
    operation_name: &'a str,
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphQlMessage {
    message: String,
}

/// Raw `{ data, errors }` envelope of a GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlMessage>>,
}

impl GraphQlResponse {
    /// Extract `data.<field>` as `T`. Server errors take precedence over data.
    pub fn field<T: DeserializeOwned>(self, field: &'static str) -> Result<T, ApiError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ApiError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        let mut data = self.data.ok_or(ApiError::MissingData("data"))?;
        let value = data
            .get_mut(field)
            .map(Value::take)
            .ok_or(ApiError::MissingData(field))?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Credential-bearing client for the portal backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn with_credentials(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    /// Run an operation and return `data.<field>`.
    pub async fn execute<V, T>(
        &self,
        operation: &Operation,
        variables: V,
        field: &'static str,
    ) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(operation = operation.name, "Starting request");

        let body = GraphQlRequest {
            operation_name: operation.name,
            query: operation.document,
            variables,
        };
        let request = self
            .with_credentials(self.http.post(&self.config.graphql_endpoint))
            .json(&body);

        let response = request.send().await?;
        let status = response.status();
        // GraphQL servers often report errors with a 4xx and a normal envelope,
        // so only give up on the body when it is not JSON.
        let envelope: GraphQlResponse = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) if !status.is_success() => {
                tracing::debug!(operation = operation.name, "Non-JSON error body: {e}");
                return Err(ApiError::Status(status.as_u16()));
            }
            Err(e) => return Err(e.into()),
        };

        let result = envelope.field(field);
        match &result {
            Ok(_) => tracing::debug!(operation = operation.name, "Response received"),
            Err(e) => tracing::warn!(operation = operation.name, "Request failed: {e}"),
        }
        result
    }

    /// Clear the backend session cookie.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .with_credentials(self.http.get(&self.config.logout_endpoint))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> GraphQlResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_field_extracts_data() {
        let resp = envelope(json!({"data": {"canCreateRecord": true}}));
        let allowed: bool = resp.field("canCreateRecord").unwrap();
        assert!(allowed);
    }

    #[test]
    fn test_errors_win_over_data() {
        let resp = envelope(json!({
            "data": {"me": null},
            "errors": [{"message": "Not authenticated"}, {"message": "Second"}]
        }));
        let err = resp.field::<Option<Value>>("me").unwrap_err();
        match err {
            ApiError::GraphQl(messages) => {
                assert_eq!(messages, vec!["Not authenticated", "Second"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_data() {
        let err = envelope(json!({})).field::<bool>("x").unwrap_err();
        assert!(matches!(err, ApiError::MissingData("data")));

        let err = envelope(json!({"data": {}})).field::<bool>("x").unwrap_err();
        assert!(matches!(err, ApiError::MissingData("x")));
    }

    #[test]
    fn test_null_field_is_none() {
        let me: Option<Value> = envelope(json!({"data": {"me": null}})).field("me").unwrap();
        assert!(me.is_none());
    }

    #[test]
    fn test_empty_errors_are_ignored() {
        let resp = envelope(json!({"data": {"n": 3}, "errors": []}));
        assert_eq!(resp.field::<u32>("n").unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let config = ClientConfig {
            graphql_endpoint: "http://127.0.0.1:9/graphql".to_string(),
            logout_endpoint: "http://127.0.0.1:9/logout".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
            contract_address: None,
        };
        let client = ApiClient::new(config).unwrap();

        let err = client
            .execute::<_, Option<Value>>(&crate::queries::GET_ME, json!({}), "me")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
        assert!(matches!(client.logout().await, Err(ApiError::Http(_))));
    }
}
