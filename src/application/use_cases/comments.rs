//! Comment moderation: approved comments are archived to the database and
//! the backing JSON document moves between bucket folders.
//!
//! Folder layout in the comments bucket: new submissions land under
//! `underreview/`, approvals move to `approved/`, denials to `notapproved/`.
//! A move is copy-then-delete; when the copy fails the source stays put.

use std::sync::Arc;

use crate::application::dto::CommentDocument;
use crate::application::errors::CommentUseCaseError;
use crate::application::ports::{ObjectStore, SqlGateway};

const UNDER_REVIEW: &str = "underreview";
const APPROVED: &str = "approved";
const NOT_APPROVED: &str = "notapproved";

/// Use case: approve a comment under review.
pub struct ApproveCommentUseCase {
    store: Arc<dyn ObjectStore>,
    gateway: Arc<dyn SqlGateway>,
    bucket: String,
}

impl ApproveCommentUseCase {
    pub fn new(store: Arc<dyn ObjectStore>, gateway: Arc<dyn SqlGateway>, bucket: String) -> Self {
        Self {
            store,
            gateway,
            bucket,
        }
    }

    pub async fn execute(
        &self,
        comment_id: &str,
        reviewer: Option<String>,
    ) -> Result<(), CommentUseCaseError> {
        let source_key = format!("{UNDER_REVIEW}/{comment_id}");
        let dest_key = format!("{APPROVED}/{comment_id}");

        let raw = self.store.get(&self.bucket, &source_key).await?;
        let document: CommentDocument = serde_json::from_slice(&raw)
            .map_err(|e| CommentUseCaseError::Malformed(e.to_string()))?;

        let record = document.into_record(reviewer);
        self.gateway.insert_comment(&record).await?;

        // Archive the document only after the row is committed; copy before
        // delete so a failed copy leaves the source under review.
        self.store.copy(&self.bucket, &source_key, &dest_key).await?;
        self.store.delete(&self.bucket, &source_key).await?;

        tracing::info!(comment_id, "comment approved");
        Ok(())
    }
}

/// Use case: deny a comment under review. No database row is written; the
/// document simply moves to the `notapproved/` folder.
pub struct DenyCommentUseCase {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl DenyCommentUseCase {
    pub fn new(store: Arc<dyn ObjectStore>, bucket: String) -> Self {
        Self { store, bucket }
    }

    pub async fn execute(&self, comment_id: &str) -> Result<(), CommentUseCaseError> {
        let source_key = format!("{UNDER_REVIEW}/{comment_id}");
        let dest_key = format!("{NOT_APPROVED}/{comment_id}");

        self.store.copy(&self.bucket, &source_key, &dest_key).await?;
        self.store.delete(&self.bucket, &source_key).await?;

        tracing::info!(comment_id, "comment denied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockObjectStore, MockSqlGateway, StoreError};
    use bytes::Bytes;
    use mockall::predicate::eq;

    const COMMENT_JSON: &str = r#"{
        "created": "2024-03-01T10:15:30",
        "dashboard": "population",
        "table": "livestock",
        "subject": "data issue",
        "message": "2019 sheep numbers look off",
        "isPublic": true,
        "name": "Ada",
        "email": "ada@example.org"
    }"#;

    #[tokio::test]
    async fn approve_inserts_row_then_moves_document() {
        let mut store = MockObjectStore::new();
        store
            .expect_get()
            .with(eq("comments"), eq("underreview/c1"))
            .times(1)
            .returning(|_, _| Ok(Bytes::from_static(COMMENT_JSON.as_bytes())));
        store
            .expect_copy()
            .with(eq("comments"), eq("underreview/c1"), eq("approved/c1"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        store
            .expect_delete()
            .with(eq("comments"), eq("underreview/c1"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockSqlGateway::new();
        gateway
            .expect_insert_comment()
            .withf(|record| {
                record.dashboard == "population"
                    && record.reviewer == "deb"
                    && record.name.as_deref() == Some("Ada")
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ApproveCommentUseCase::new(
            Arc::new(store),
            Arc::new(gateway),
            "comments".to_string(),
        );
        use_case
            .execute("c1", Some("deb".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_copy_leaves_the_source_in_place() {
        let mut store = MockObjectStore::new();
        store
            .expect_copy()
            .times(1)
            .returning(|_, _, _| Err(StoreError::Backend("copy failed".to_string())));
        store.expect_delete().times(0);

        let use_case = DenyCommentUseCase::new(Arc::new(store), "comments".to_string());
        assert!(use_case.execute("c1").await.is_err());
    }

    #[tokio::test]
    async fn malformed_document_does_not_touch_the_database() {
        let mut store = MockObjectStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_, _| Ok(Bytes::from_static(b"not json")));
        store.expect_copy().times(0);
        store.expect_delete().times(0);

        let mut gateway = MockSqlGateway::new();
        gateway.expect_insert_comment().times(0);

        let use_case = ApproveCommentUseCase::new(
            Arc::new(store),
            Arc::new(gateway),
            "comments".to_string(),
        );
        assert!(matches!(
            use_case.execute("c1", None).await,
            Err(CommentUseCaseError::Malformed(_))
        ));
    }
}
