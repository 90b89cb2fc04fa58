use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::comment::CommentRecord;

/// Result of a catalog-validated SELECT: the rendered rows, the driver's
/// column names, and the exact SQL that was executed (returned to the caller
/// for audit/display).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub executed_sql: String,
}

/// Core metadata fields of a `dataset` graph node. Field names mirror the
/// property names stored in the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetCore {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "datePublished")]
    pub date_published: String,
    #[serde(default, rename = "datasetTimeInterval")]
    pub dataset_time_interval: String,
    #[serde(default)]
    pub citation: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Distribution {
    pub name: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "fileFormat")]
    pub file_format: String,
    #[serde(default, rename = "contentSize")]
    pub content_size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct License {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Combined metadata document for one dataset, assembled from the six
/// per-aspect graph lookups. Absent aspects serialise as `null`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DatasetMetadata {
    pub dataset: DatasetCore,
    pub distribution: Option<Distribution>,
    pub publisher: Option<String>,
    pub license: Option<License>,
    pub provider: Option<String>,
    #[serde(rename = "contactPoint")]
    pub contact_point: Option<String>,
}

/// The comment JSON document as submitted by dashboards and parked in the
/// object store under `underreview/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentDocument {
    pub created: String,
    pub dashboard: String,
    pub table: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CommentDocument {
    /// Build the database record for an approved comment. Timestamps are
    /// truncated to whole seconds (`YYYY-MM-DD HH:MM:SS`); non-public
    /// comments drop name and email.
    pub fn into_record(self, reviewer: Option<String>) -> CommentRecord {
        let approved = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let created: String = self.created.chars().take(19).collect();
        let (name, email) = if self.is_public {
            (self.name, self.email)
        } else {
            (None, None)
        };
        CommentRecord {
            created,
            approved,
            dashboard: self.dashboard,
            table: self.table,
            subject: self.subject,
            message: self.message,
            name,
            email,
            is_public: self.is_public,
            reviewer: reviewer.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
