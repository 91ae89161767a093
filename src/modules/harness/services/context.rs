use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::core::expect::resource_id;
use crate::core::{HarnessError, Result};
use crate::modules::harness::models::{ResourceKind, ResourceRegistry};

use super::journal::Journal;

/// What a case sees while it runs: the client, the outcome log, and the registry
pub struct CaseContext<'a> {
    pub(crate) client: &'a ApiClient,
    pub(crate) journal: &'a mut Journal,
    pub(crate) registry: &'a mut ResourceRegistry,
    pub(crate) brand_marker: &'a str,
}

/// A POST that creates a resource and echoes one field back
pub struct Creation<'a> {
    pub check: &'a str,
    pub kind: ResourceKind,
    pub path: &'a str,
    /// Used in failure messages, e.g. "Category creation failed with status 500"
    pub action: &'a str,
    pub echo_field: &'a str,
    pub echo_value: &'a str,
    pub success_message: &'a str,
}

/// Identifier and body returned by a successful creation call
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedResource {
    /// Id normalized to a string, as kept in the registry
    pub id: String,
    /// Id exactly as the server sent it; used when the id goes back in a request body
    pub raw_id: Value,
    pub body: Value,
}

impl CreatedResource {
    pub fn new(id: String, body: Value) -> Self {
        let raw_id = body.get("id").cloned().unwrap_or_else(|| Value::String(id.clone()));
        Self { id, raw_id, body }
    }
}

impl<'a> CaseContext<'a> {
    pub fn client(&self) -> &ApiClient {
        self.client
    }

    pub fn brand_marker(&self) -> &str {
        self.brand_marker
    }

    pub fn pass(&mut self, check: &str, message: impl Into<String>, response_data: Option<Value>) {
        self.journal.record(check, true, message, response_data);
    }

    pub fn register(&mut self, kind: ResourceKind, id: impl Into<String>) {
        self.registry.register(kind, id);
    }

    /// Record an assertion failure and let the case carry on.
    ///
    /// Any other error is handed back so the case stops at its boundary.
    pub fn settle<T>(&mut self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(HarnessError::Assertion { check, message }) => {
                self.journal.record(check, false, message, None);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// POST `payload`, expect 201 with an id and the echoed field, then register the id
    pub async fn create<T: Serialize + Sync + ?Sized>(
        &mut self,
        creation: Creation<'_>,
        payload: &T,
    ) -> Result<CreatedResource> {
        let response = self.client.post_json(creation.path, payload).await?;
        let body = response.expect_json(StatusCode::CREATED, creation.check, creation.action)?;

        let echoed = body.get(creation.echo_field).and_then(Value::as_str);
        let id = match (resource_id(&body), echoed) {
            (Some(id), Some(value)) if value == creation.echo_value => id,
            _ => {
                return Err(HarnessError::assertion(
                    creation.check,
                    format!("{} response missing expected fields", creation.action),
                ))
            }
        };

        self.register(creation.kind, id.clone());
        self.pass(creation.check, creation.success_message, Some(body.clone()));

        Ok(CreatedResource::new(id, body))
    }
}
