use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kinds of server-side resources a run can create.
///
/// Serialized under the same plural label the printed summary uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "categories")]
    Category,
    #[serde(rename = "products")]
    Product,
    #[serde(rename = "users")]
    User,
    #[serde(rename = "orders")]
    Order,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Category,
        ResourceKind::Product,
        ResourceKind::User,
        ResourceKind::Order,
    ];

    /// Plural label used in reports
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Category => "categories",
            ResourceKind::Product => "products",
            ResourceKind::User => "users",
            ResourceKind::Order => "orders",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Identifiers of resources created during the run, in creation order.
///
/// Append-only: nothing is removed while the run is in progress.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ResourceRegistry {
    resources: BTreeMap<ResourceKind, Vec<String>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ResourceKind, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(kind = %kind, id = %id, "Registered created resource");
        self.resources.entry(kind).or_default().push(id);
    }

    pub fn ids(&self, kind: ResourceKind) -> &[String] {
        self.resources.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Earliest identifier registered for `kind`
    pub fn first(&self, kind: ResourceKind) -> Option<&str> {
        self.ids(kind).first().map(String::as_str)
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.ids(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.values().all(Vec::is_empty)
    }

    /// Per-kind counts for every kind that has at least one entry
    pub fn counts(&self) -> Vec<(ResourceKind, usize)> {
        ResourceKind::ALL
            .iter()
            .map(|kind| (*kind, self.count(*kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
