use crate::client::ApiClient;
use crate::modules::harness::models::{ResourceKind, ResourceRegistry};

/// Kinds the backend can delete, with the collection path for each
const DELETABLE: [(ResourceKind, &str); 2] = [
    (ResourceKind::Order, "orders"),
    (ResourceKind::Product, "products"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeardownReport {
    pub deleted: usize,
    pub failed: usize,
}

/// Issue a DELETE for every registered order and product.
///
/// Orders go first since they reference products. Failures are logged and
/// counted; they never affect the run's outcomes.
pub async fn delete_created_resources(client: &ApiClient, registry: &ResourceRegistry) -> TeardownReport {
    let mut report = TeardownReport::default();

    for (kind, collection) in DELETABLE {
        for id in registry.ids(kind) {
            let path = format!("{}/{}", collection, id);
            match client.delete(&path).await {
                Ok(response) if response.status().is_success() => {
                    tracing::info!(kind = %kind, id = %id, "Deleted created resource");
                    report.deleted += 1;
                }
                Ok(response) => {
                    tracing::warn!(
                        kind = %kind,
                        id = %id,
                        status = %response.status(),
                        "Teardown delete rejected"
                    );
                    report.failed += 1;
                }
                Err(e) => {
                    tracing::warn!(kind = %kind, id = %id, error = %e, "Teardown delete failed");
                    report.failed += 1;
                }
            }
        }
    }

    let skipped = registry.count(ResourceKind::Category) + registry.count(ResourceKind::User);
    if skipped > 0 {
        tracing::info!(skipped, "Categories and users have no delete endpoint; left in place");
    }

    report
}
