use crate::catalog::domain::{AdminSession, AuthUser, Credentials, Role, Session};
use crate::ports::outbound::{cell_text, AuthProvider, ProgressReporter, RecordQuery, RecordStore};
use crate::shared::error::StoreError;
use crate::shared::Result;

/// Default name of the table mapping user ids to roles
pub const DEFAULT_ROLES_TABLE: &str = "roles";

/// AuthorizeAdminUseCase - Gate in front of every admin operation
///
/// A user is an administrator when the roles table holds `Admin` for their
/// id. Any other role, or no role row at all, is refused.
pub struct AuthorizeAdminUseCase<AP, RS, PR> {
    auth_provider: AP,
    record_store: RS,
    progress_reporter: PR,
    roles_table: String,
}

impl<AP, RS, PR> AuthorizeAdminUseCase<AP, RS, PR>
where
    AP: AuthProvider,
    RS: RecordStore,
    PR: ProgressReporter,
{
    pub fn new(auth_provider: AP, record_store: RS, progress_reporter: PR) -> Self {
        Self {
            auth_provider,
            record_store,
            progress_reporter,
            roles_table: DEFAULT_ROLES_TABLE.to_string(),
        }
    }

    pub fn with_roles_table(mut self, roles_table: impl Into<String>) -> Self {
        self.roles_table = roles_table.into();
        self
    }

    /// Signs in without checking the role
    ///
    /// For backends that only expose the roles table to signed-in users:
    /// authenticate here, then [`Self::verify`] with a store acting as the user.
    ///
    /// # Errors
    /// Returns `StoreError::AuthenticationFailed` if the credentials are rejected
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        self.progress_reporter
            .report(&format!("🔐 Signing in as {}...", credentials.email()));

        self.auth_provider.sign_in_with_password(credentials).await
    }

    /// Signs in and checks the administrator role
    ///
    /// # Errors
    /// - `StoreError::AuthenticationFailed` if the credentials are rejected
    /// - `StoreError::Forbidden` if the user is not an administrator
    pub async fn login(&self, credentials: &Credentials) -> Result<AdminSession> {
        let session = self.authenticate(credentials).await?;
        self.require_admin(&session.user).await?;

        self.progress_reporter
            .report_completion(&format!("✅ Signed in as administrator {}", credentials.email()));

        Ok(AdminSession {
            user: session.user,
            access_token: session.access_token,
        })
    }

    /// Re-checks an existing session, as a route guard would on every admin page
    ///
    /// # Errors
    /// Same as [`Self::login`]
    pub async fn verify(&self, access_token: &str) -> Result<AdminSession> {
        let user = self.auth_provider.user_for_token(access_token).await?;
        self.require_admin(&user).await?;

        Ok(AdminSession {
            user,
            access_token: access_token.to_string(),
        })
    }

    async fn require_admin(&self, user: &AuthUser) -> Result<()> {
        let query = RecordQuery::table(&self.roles_table)
            .select(&[Role::COLUMN])
            .eq("id", &user.id);

        let role = match self.record_store.fetch_single(&query).await {
            Ok(row) => row
                .and_then(|row| row.get(Role::COLUMN).and_then(cell_text))
                .map(|value| Role::parse(&value)),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Error checking the role of user {}: {}",
                    user.id, e
                ));
                None
            }
        };

        match role {
            Some(role) if role.is_admin() => Ok(()),
            _ => Err(StoreError::Forbidden {
                message: "You do not have administrator permissions".to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::InMemoryBackend;
    use crate::shared::error::ExitCode;
    use serde_json::json;
    use std::sync::Arc;

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn backend() -> Arc<InMemoryBackend> {
        let backend = InMemoryBackend::new("https://cdn.test/laptops");
        let admin = backend.seed_user("admin@intech.store", "s3cret");
        let clerk = backend.seed_user("clerk@intech.store", "s3cret");
        backend.seed_user("nobody@intech.store", "s3cret");
        backend.seed_row("roles", json!({ "id": admin, "role": "Admin" }));
        backend.seed_row("roles", json!({ "id": clerk, "role": "Customer" }));
        Arc::new(backend)
    }

    fn use_case(
        backend: &Arc<InMemoryBackend>,
    ) -> AuthorizeAdminUseCase<Arc<InMemoryBackend>, Arc<InMemoryBackend>, SilentReporter> {
        AuthorizeAdminUseCase::new(backend.clone(), backend.clone(), SilentReporter)
    }

    fn store_error(err: &anyhow::Error) -> &StoreError {
        err.downcast_ref::<StoreError>().unwrap()
    }

    #[tokio::test]
    async fn test_admin_login() {
        let backend = backend();
        let credentials = Credentials::new("admin@intech.store", "s3cret").unwrap();

        let use_case = use_case(&backend);
        let session = use_case.login(&credentials).await.unwrap();

        assert_eq!(session.user.email.as_deref(), Some("admin@intech.store"));
        let verified = use_case.verify(&session.access_token).await.unwrap();
        assert_eq!(verified.user, session.user);
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let backend = backend();
        let credentials = Credentials::new("clerk@intech.store", "s3cret").unwrap();

        let err = use_case(&backend).login(&credentials).await.unwrap_err();

        assert!(matches!(store_error(&err), StoreError::Forbidden { .. }));
        assert!(err.to_string().contains("administrator permissions"));
        assert_eq!(store_error(&err).exit_code(), ExitCode::AccessDenied);
    }

    #[tokio::test]
    async fn test_missing_role_is_forbidden() {
        let backend = backend();
        let credentials = Credentials::new("nobody@intech.store", "s3cret").unwrap();

        let err = use_case(&backend).login(&credentials).await.unwrap_err();

        assert!(matches!(store_error(&err), StoreError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_wrong_password_fails_authentication() {
        let backend = backend();
        let credentials = Credentials::new("admin@intech.store", "wrong").unwrap();

        let err = use_case(&backend).login(&credentials).await.unwrap_err();

        assert!(matches!(store_error(&err), StoreError::AuthenticationFailed { .. }));
    }

    #[tokio::test]
    async fn test_unreadable_roles_table_is_forbidden() {
        let backend = backend();
        backend.fail_table("roles");
        let credentials = Credentials::new("admin@intech.store", "s3cret").unwrap();

        let err = use_case(&backend).login(&credentials).await.unwrap_err();

        assert!(matches!(store_error(&err), StoreError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_then_verify() {
        let backend = backend();
        let credentials = Credentials::new("clerk@intech.store", "s3cret").unwrap();

        let use_case = use_case(&backend);
        let session = use_case.authenticate(&credentials).await.unwrap();
        let err = use_case.verify(&session.access_token).await.unwrap_err();

        assert!(matches!(store_error(&err), StoreError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_verify_rejects_unknown_token() {
        let backend = backend();

        let err = use_case(&backend).verify("not-a-token").await.unwrap_err();

        assert!(matches!(store_error(&err), StoreError::AuthenticationFailed { .. }));
    }

    #[tokio::test]
    async fn test_custom_roles_table() {
        let backend = backend();
        let credentials = Credentials::new("admin@intech.store", "s3cret").unwrap();

        let err = use_case(&backend)
            .with_roles_table("staff_roles")
            .login(&credentials)
            .await
            .unwrap_err();

        assert!(matches!(store_error(&err), StoreError::Forbidden { .. }));
    }
}
