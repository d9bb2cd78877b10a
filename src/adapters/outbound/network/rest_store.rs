use super::backend_client::{encode_segment, BackendClient};
use crate::ports::outbound::{RecordQuery, RecordStore, Row};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// RestRecordStore adapter for the backend's auto-generated REST API
///
/// Tables are exposed under `/rest/v1/<table>`; filters use the
/// `column=eq.value` query syntax.
pub struct RestRecordStore {
    client: BackendClient,
}

impl RestRecordStore {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Path and query string for a read query
    fn query_path(query: &RecordQuery) -> Result<String> {
        let table = encode_segment(&query.table, "Table name")?;

        let select = if query.columns.is_empty() {
            "*".to_string()
        } else {
            query
                .columns
                .iter()
                .map(|c| urlencoding::encode(c).into_owned())
                .collect::<Vec<_>>()
                .join(",")
        };

        let mut path = format!("/rest/v1/{}?select={}", table, select);
        if let Some(filter) = &query.filter {
            path.push_str(&format!(
                "&{}=eq.{}",
                encode_segment(&filter.column, "Column name")?,
                urlencoding::encode(&filter.value)
            ));
        }
        if let Some(limit) = query.limit {
            path.push_str(&format!("&limit={}", limit));
        }
        Ok(path)
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn fetch_all(&self, query: &RecordQuery) -> Result<Vec<Row>> {
        let request = self.client.request(Method::GET, &Self::query_path(query)?)?;
        let response = self
            .client
            .send(&format!("select from {}", query.describe()), request)
            .await?;

        Ok(response.json::<Vec<Row>>().await?)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Row> {
        let path = format!("/rest/v1/{}", encode_segment(table, "Table name")?);
        let request = self
            .client
            .request(Method::POST, &path)?
            .header("Prefer", "return=representation")
            .json(&row);
        let response = self
            .client
            .send(&format!("insert into {}", table), request)
            .await?;

        response
            .json::<Vec<Row>>()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Insert into {} returned no row", table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_path_with_filter_and_limit() {
        let query = RecordQuery::table("laptop_ram")
            .select(&["ram_id"])
            .eq("laptop_id", "9b2f c1")
            .limit(3);

        assert_eq!(
            RestRecordStore::query_path(&query).unwrap(),
            "/rest/v1/laptop_ram?select=ram_id&laptop_id=eq.9b2f%20c1&limit=3"
        );
    }

    #[test]
    fn test_query_path_selects_all_by_default() {
        let query = RecordQuery::table("laptop");
        assert_eq!(
            RestRecordStore::query_path(&query).unwrap(),
            "/rest/v1/laptop?select=*"
        );
    }

    #[test]
    fn test_query_path_multiple_columns() {
        let query = RecordQuery::table("storage")
            .select(&["capacity", "capacity_unit", "type"])
            .eq("id", "7");
        assert_eq!(
            RestRecordStore::query_path(&query).unwrap(),
            "/rest/v1/storage?select=capacity,capacity_unit,type&id=eq.7"
        );
    }

    #[test]
    fn test_query_path_rejects_injected_table() {
        let query = RecordQuery::table("laptop?select=*&role=eq.Admin");
        assert!(RestRecordStore::query_path(&query).is_err());
    }

    #[test]
    fn test_filter_value_is_encoded() {
        let query = RecordQuery::table("laptop").eq("id", "a&role=eq.Admin");
        let path = RestRecordStore::query_path(&query).unwrap();
        assert!(path.ends_with("id=eq.a%26role%3Deq.Admin"));
    }

    #[tokio::test]
    async fn test_closed_client_fails_before_sending() {
        let client = BackendClient::new(
            "http://127.0.0.1:9",
            "anon",
            std::time::Duration::from_secs(1),
        )
        .unwrap();
        client.close();
        let store = RestRecordStore::new(client);

        let query = RecordQuery::table("laptop");
        let err = store.fetch_all(&query).await.unwrap_err();

        assert!(err.to_string().contains("closed"));
    }
}
