use chrono::{DateTime, Utc};
use fabriq_core::{HasFactory, NamespacePath};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accounting report. Nested one level deeper than the other models; the
/// factory convention still keys off `Accounting` and `Report` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub generated_at: DateTime<Utc>,
}

impl HasFactory for Report {
    fn namespace() -> NamespacePath {
        NamespacePath::parse("Domain::Accounting::Reports::Models::Report")
    }
}
