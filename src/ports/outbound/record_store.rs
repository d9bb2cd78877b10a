use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A row as returned by the relational store, keyed by column name
pub type Row = serde_json::Map<String, Value>;

/// Text form of a cell used for ids and filter comparison
///
/// Ids may come back as strings (uuid, text) or numbers (serial keys).
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Equality filter on a single column (`column = value`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqFilter {
    pub column: String,
    pub value: String,
}

/// Read query against one table
///
/// Mirrors what the storefront needs from the backend: a column list, at
/// most one equality filter and an optional row limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub table: String,
    /// Empty means every column
    pub columns: Vec<String>,
    pub filter: Option<EqFilter>,
    pub limit: Option<usize>,
}

impl RecordQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filter: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some(EqFilter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Short human readable form used in diagnostics, e.g. `ram?id=eq.7`
    pub fn describe(&self) -> String {
        match &self.filter {
            Some(filter) => format!("{}?{}=eq.{}", self.table, filter.column, filter.value),
            None => self.table.clone(),
        }
    }
}

/// RecordStore port for the backend's relational store
///
/// # Async Support
/// All methods are async so the loader can fan out concurrently.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every row matching the query
    ///
    /// # Errors
    /// Returns an error if the request fails or the backend rejects the query
    async fn fetch_all(&self, query: &RecordQuery) -> Result<Vec<Row>>;

    /// Inserts one row and returns it as stored (including generated ids)
    ///
    /// # Errors
    /// Returns an error if the backend rejects the row
    async fn insert(&self, table: &str, row: Value) -> Result<Row>;

    /// Point lookup with a single-row expectation
    ///
    /// # Returns
    /// `None` if no row matches
    ///
    /// # Errors
    /// Returns an error if the request fails or more than one row matches
    async fn fetch_single(&self, query: &RecordQuery) -> Result<Option<Row>> {
        let mut rows = self.fetch_all(query).await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => anyhow::bail!(
                "Expected a single row from {}, found {}",
                query.describe(),
                n
            ),
        }
    }

    /// First matching row, ignoring any further matches
    async fn fetch_first(&self, query: &RecordQuery) -> Result<Option<Row>> {
        Ok(self.fetch_all(query).await?.into_iter().next())
    }
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    async fn fetch_all(&self, query: &RecordQuery) -> Result<Vec<Row>> {
        (**self).fetch_all(query).await
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Row> {
        (**self).insert(table, row).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedStore {
        rows: Vec<Row>,
    }

    #[async_trait]
    impl RecordStore for FixedStore {
        async fn fetch_all(&self, _query: &RecordQuery) -> Result<Vec<Row>> {
            Ok(self.rows.clone())
        }

        async fn insert(&self, _table: &str, _row: Value) -> Result<Row> {
            anyhow::bail!("read only")
        }
    }

    fn row(id: &str) -> Row {
        json!({ "id": id }).as_object().unwrap().clone()
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("L1")), Some("L1".to_string()));
        assert_eq!(cell_text(&json!(42)), Some("42".to_string()));
        assert_eq!(cell_text(&json!(null)), None);
        assert_eq!(cell_text(&json!({ "id": 1 })), None);
    }

    #[test]
    fn test_query_builder() {
        let query = RecordQuery::table("laptop_ram")
            .select(&["ram_id"])
            .eq("laptop_id", "L1")
            .limit(10);
        assert_eq!(query.columns, vec!["ram_id".to_string()]);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.describe(), "laptop_ram?laptop_id=eq.L1");
    }

    #[tokio::test]
    async fn test_fetch_single_none() {
        let store = FixedStore { rows: vec![] };
        let query = RecordQuery::table("laptop");
        let result = store.fetch_single(&query).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_single_one() {
        let store = FixedStore {
            rows: vec![row("L1")],
        };
        let query = RecordQuery::table("laptop");
        let result = store.fetch_single(&query).await.unwrap();
        assert_eq!(result.unwrap()["id"], "L1");
    }

    #[tokio::test]
    async fn test_fetch_single_many_is_error() {
        let store = FixedStore {
            rows: vec![row("L1"), row("L2")],
        };
        let err = store
            .fetch_single(&RecordQuery::table("laptop").eq("brand", "HP"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[tokio::test]
    async fn test_fetch_first_takes_first() {
        let store = FixedStore {
            rows: vec![row("a"), row("b")],
        };
        let result = store.fetch_first(&RecordQuery::table("ram")).await.unwrap();
        assert_eq!(result.unwrap()["id"], "a");
    }
}
