use super::fixture::BackendFixture;
use crate::catalog::domain::{AuthUser, Credentials, Session};
use crate::ports::outbound::{
    cell_text, AuthProvider, ObjectStore, RecordQuery, RecordStore, Row, StoredFile,
};
use crate::shared::error::StoreError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredObject {
    name: String,
    content_type: String,
    size: usize,
}

#[derive(Debug, Clone)]
struct Account {
    user: AuthUser,
    password: String,
}

/// InMemoryBackend adapter standing in for the hosted backend
///
/// Implements the record store, the object store and the auth provider over
/// concurrent maps. Used by the CLI's `--fixture` mode and by tests, which
/// can make individual tables, rows, folders or uploads fail on demand.
pub struct InMemoryBackend {
    public_base_url: String,
    tables: DashMap<String, Vec<Row>>,
    folders: DashMap<String, Vec<StoredObject>>,
    accounts: DashMap<String, Account>,
    sessions: DashMap<String, AuthUser>,
    failing_tables: DashSet<String>,
    failing_rows: DashSet<(String, String)>,
    failing_folders: DashSet<String>,
    failing_uploads: AtomicBool,
}

impl InMemoryBackend {
    /// Empty backend; public URLs are `<public_base_url>/<folder>/<file>`
    pub fn new(public_base_url: &str) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            tables: DashMap::new(),
            folders: DashMap::new(),
            accounts: DashMap::new(),
            sessions: DashMap::new(),
            failing_tables: DashSet::new(),
            failing_rows: DashSet::new(),
            failing_folders: DashSet::new(),
            failing_uploads: AtomicBool::new(false),
        }
    }

    pub fn from_fixture(fixture: BackendFixture, public_base_url: &str) -> Self {
        let backend = Self::new(public_base_url);

        for (table, rows) in fixture.tables {
            backend.tables.insert(table, rows);
        }
        for (folder, names) in fixture.files {
            for name in names {
                backend.seed_file(&folder, &name);
            }
        }
        for user in fixture.users {
            let id = user.id.unwrap_or_else(|| Uuid::new_v4().to_string());
            backend.insert_account(id, &user.email, &user.password);
        }

        backend
    }

    /// Appends a row as-is; non-object values are ignored
    pub fn seed_row(&self, table: &str, row: Value) {
        if let Value::Object(row) = row {
            self.tables.entry(table.to_string()).or_default().push(row);
        }
    }

    pub fn seed_file(&self, folder: &str, name: &str) {
        self.folders
            .entry(folder.to_string())
            .or_default()
            .push(StoredObject {
                name: name.to_string(),
                content_type: "application/octet-stream".to_string(),
                size: 0,
            });
    }

    /// Registers a user and returns the generated user id
    pub fn seed_user(&self, email: &str, password: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.insert_account(id.clone(), email, password);
        id
    }

    fn insert_account(&self, id: String, email: &str, password: &str) {
        self.accounts.insert(
            email.to_string(),
            Account {
                user: AuthUser {
                    id,
                    email: Some(email.to_string()),
                },
                password: password.to_string(),
            },
        );
    }

    /// Every read of and insert into `table` fails from now on
    pub fn fail_table(&self, table: &str) {
        self.failing_tables.insert(table.to_string());
    }

    /// Point lookups of `id` in `table` fail from now on
    pub fn fail_row(&self, table: &str, id: &str) {
        self.failing_rows
            .insert((table.to_string(), id.to_string()));
    }

    /// Listing `folder` fails from now on
    pub fn fail_folder(&self, folder: &str) {
        self.failing_folders.insert(folder.to_string());
    }

    pub fn fail_uploads(&self) {
        self.failing_uploads.store(true, Ordering::SeqCst);
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |rows| rows.len())
    }

    /// Content type and size in bytes of a stored object
    pub fn object_metadata(&self, path: &str) -> Option<(String, usize)> {
        let (folder, name) = path.rsplit_once('/')?;
        self.folders
            .get(folder)?
            .iter()
            .find(|object| object.name == name)
            .map(|object| (object.content_type.clone(), object.size))
    }

    fn project(row: &Row, columns: &[String]) -> Row {
        if columns.is_empty() {
            return row.clone();
        }
        columns
            .iter()
            .filter_map(|column| row.get(column).map(|value| (column.clone(), value.clone())))
            .collect()
    }
}

#[async_trait]
impl RecordStore for InMemoryBackend {
    async fn fetch_all(&self, query: &RecordQuery) -> Result<Vec<Row>> {
        if self.failing_tables.contains(&query.table) {
            anyhow::bail!("Simulated failure reading {}", query.table);
        }
        if let Some(filter) = &query.filter {
            if self
                .failing_rows
                .contains(&(query.table.clone(), filter.value.clone()))
            {
                anyhow::bail!("Simulated failure reading {}", query.describe());
            }
        }

        let Some(rows) = self.tables.get(&query.table) else {
            return Ok(Vec::new());
        };

        Ok(rows
            .iter()
            .filter(|row| match &query.filter {
                Some(filter) => {
                    row.get(&filter.column).and_then(cell_text).as_deref()
                        == Some(filter.value.as_str())
                }
                None => true,
            })
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|row| Self::project(row, &query.columns))
            .collect())
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Row> {
        if self.failing_tables.contains(table) {
            anyhow::bail!("Simulated failure inserting into {}", table);
        }

        let Value::Object(mut row) = row else {
            anyhow::bail!("Insert into {} expects an object", table);
        };
        if !row.contains_key("id") {
            row.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }

        self.tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl ObjectStore for InMemoryBackend {
    async fn list_files(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<StoredFile>> {
        if self.failing_folders.contains(prefix) {
            anyhow::bail!("Simulated failure listing {}", prefix);
        }

        Ok(self
            .folders
            .get(prefix)
            .map(|objects| {
                objects
                    .iter()
                    .take(limit.unwrap_or(usize::MAX))
                    .map(|object| StoredFile::new(object.name.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn public_url(&self, prefix: &str, file_name: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, prefix, file_name)
    }

    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        if self.failing_uploads.load(Ordering::SeqCst) {
            anyhow::bail!("Simulated failure uploading {}", path);
        }

        let Some((folder, name)) = path.rsplit_once('/') else {
            anyhow::bail!("Object path {} has no folder", path);
        };

        let mut objects = self.folders.entry(folder.to_string()).or_default();
        if objects.iter().any(|object| object.name == name) {
            anyhow::bail!("The resource already exists: {}", path);
        }
        objects.push(StoredObject {
            name: name.to_string(),
            content_type: content_type.to_string(),
            size: bytes.len(),
        });

        Ok(path.to_string())
    }
}

#[async_trait]
impl AuthProvider for InMemoryBackend {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session> {
        let user = self
            .accounts
            .get(credentials.email())
            .filter(|account| account.password == credentials.password())
            .map(|account| account.user.clone())
            .ok_or_else(|| StoreError::AuthenticationFailed {
                message: "Invalid login credentials".to_string(),
            })?;

        let access_token = Uuid::new_v4().to_string();
        self.sessions.insert(access_token.clone(), user.clone());

        Ok(Session { access_token, user })
    }

    async fn user_for_token(&self, access_token: &str) -> Result<AuthUser> {
        self.sessions
            .get(access_token)
            .map(|user| user.value().clone())
            .ok_or_else(|| {
                StoreError::AuthenticationFailed {
                    message: "Invalid or expired token".to_string(),
                }
                .into()
            })
    }
}
