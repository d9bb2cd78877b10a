use clap::Parser;
use intech_storefront::adapters::outbound::console::StderrProgressReporter;
use intech_storefront::adapters::outbound::filesystem::FileSystemReader;
use intech_storefront::adapters::outbound::memory::{BackendFixture, InMemoryBackend};
use intech_storefront::adapters::outbound::network::{
    AuthClient, BackendClient, RestRecordStore, StorageBucket,
};
use intech_storefront::application::dto::OutputFormat;
use intech_storefront::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use intech_storefront::application::read_models::LaptopConfiguration;
use intech_storefront::application::use_cases::{
    AddLaptopUseCase, AuthorizeAdminUseCase, ListTopPicksUseCase, LoadLaptopUseCase, RootFetchError,
};
use intech_storefront::catalog::domain::{AdminSession, Credentials, LaptopId};
use intech_storefront::cli::{Args, Command};
use intech_storefront::config::{self, CatalogSettings, ConfigFile};
use intech_storefront::ports::outbound::{
    AuthProvider, DraftReader, ObjectStore, OutputPresenter, RecordStore,
};
use intech_storefront::shared::error::{ExitCode, StoreError};
use intech_storefront::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            let heading = "❌ An error occurred:";
            if std::io::stderr().is_terminal() {
                eprintln!("\n{}\n", heading.red().bold());
            } else {
                eprintln!("\n{}\n", heading);
            }
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();

            let code = e
                .downcast_ref::<StoreError>()
                .map_or(ExitCode::ApplicationError, StoreError::exit_code);
            process::exit(code.as_i32());
        }
    }
}

/// Where data comes from: the hosted backend or a local fixture
enum Backend {
    Remote {
        client: BackendClient,
        bucket: String,
    },
    Fixture(Arc<InMemoryBackend>),
}

impl Backend {
    fn connect(args: &Args, config: &ConfigFile, settings: &CatalogSettings) -> Result<Self> {
        if let Some(path) = &args.fixture {
            let fixture = BackendFixture::load(path)?;
            let public_base_url = format!("fixture://{}", settings.bucket);
            return Ok(Backend::Fixture(Arc::new(InMemoryBackend::from_fixture(
                fixture,
                &public_base_url,
            ))));
        }

        let backend_config = config.backend_config(|key| std::env::var(key).ok())?;
        let client = BackendClient::new(
            &backend_config.base_url,
            &backend_config.anon_key,
            backend_config.timeout,
        )?;
        Ok(Backend::Remote {
            client,
            bucket: settings.bucket.clone(),
        })
    }

    fn record_store(&self) -> Arc<dyn RecordStore> {
        match self {
            Backend::Remote { client, .. } => Arc::new(RestRecordStore::new(client.clone())),
            Backend::Fixture(backend) => backend.clone(),
        }
    }

    fn object_store(&self) -> Result<Arc<dyn ObjectStore>> {
        Ok(match self {
            Backend::Remote { client, bucket } => {
                Arc::new(StorageBucket::new(client.clone(), bucket)?)
            }
            Backend::Fixture(backend) => backend.clone(),
        })
    }

    fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        match self {
            Backend::Remote { client, .. } => Arc::new(AuthClient::new(client.clone())),
            Backend::Fixture(backend) => backend.clone(),
        }
    }

    /// Same backend, acting as the signed-in user
    fn as_user(&self, access_token: &str) -> Self {
        match self {
            Backend::Remote { client, bucket } => Backend::Remote {
                client: client.with_access_token(access_token),
                bucket: bucket.clone(),
            },
            Backend::Fixture(backend) => Backend::Fixture(backend.clone()),
        }
    }

    fn close(&self) {
        if let Backend::Remote { client, .. } = self {
            client.close();
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = config.catalog_settings()?;
    let backend = Backend::connect(&args, &config, &settings)?;

    let result = execute(&args, &backend, &settings).await;
    backend.close();
    result
}

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

async fn execute(args: &Args, backend: &Backend, settings: &CatalogSettings) -> Result<ExitCode> {
    match &args.command {
        Command::Laptop {
            id,
            format,
            output,
            configure,
        } => {
            let laptop_id = LaptopId::new(id.as_str())?;
            let use_case = LoadLaptopUseCase::new(
                backend.record_store(),
                backend.object_store()?,
                reporter(args.quiet),
            );

            let aggregate = match use_case.load_detailed(&laptop_id).await {
                Ok(aggregate) => aggregate,
                Err(RootFetchError::NotFound) => return Ok(ExitCode::NotFound),
                Err(RootFetchError::Unavailable(_)) => return Ok(ExitCode::ApplicationError),
            };

            let formatter = FormatterFactory::create(*format);
            report_format(args, *format);
            let rendered = if *configure {
                formatter.format_configuration(&LaptopConfiguration::from_aggregate(aggregate))?
            } else {
                formatter.format_aggregate(&aggregate)?
            };

            present(output.clone(), &rendered)?;
            Ok(ExitCode::Success)
        }

        Command::TopPicks { limit, format } => {
            let use_case = ListTopPicksUseCase::new(
                backend.record_store(),
                backend.object_store()?,
                reporter(args.quiet),
            );
            let cards = use_case
                .execute(limit.unwrap_or(settings.top_picks_limit))
                .await?;

            report_format(args, *format);
            let rendered = FormatterFactory::create(*format).format_top_picks(&cards)?;
            present(None, &rendered)?;
            Ok(ExitCode::Success)
        }

        Command::Login { email, password } => {
            let credentials =
                Credentials::new(email.as_str(), password.clone().unwrap_or_default())?;
            let session = authorize(backend, settings, &credentials, args.quiet).await?;

            let summary = serde_json::json!({
                "userId": session.user.id,
                "email": session.user.email,
                "role": "Admin",
            });
            present(None, &serde_json::to_string_pretty(&summary)?)?;
            Ok(ExitCode::Success)
        }

        Command::AddLaptop {
            draft,
            email,
            password,
        } => {
            // Check the draft before touching the backend
            let reader = FileSystemReader::new();
            let laptop_draft = reader.read_draft(draft)?;
            laptop_draft.validate()?;
            let images = reader.read_images(draft, &laptop_draft)?;

            let credentials =
                Credentials::new(email.as_str(), password.clone().unwrap_or_default())?;
            let session = authorize(backend, settings, &credentials, args.quiet).await?;

            let user_backend = backend.as_user(&session.access_token);
            let use_case = AddLaptopUseCase::new(
                user_backend.record_store(),
                user_backend.object_store()?,
                reporter(args.quiet),
            );
            let added = use_case.execute(&laptop_draft, images).await?;

            present(None, &serde_json::to_string_pretty(&added)?)?;
            Ok(ExitCode::Success)
        }
    }
}

async fn authorize(
    backend: &Backend,
    settings: &CatalogSettings,
    credentials: &Credentials,
    quiet: bool,
) -> Result<AdminSession> {
    let session = AuthorizeAdminUseCase::new(
        backend.auth_provider(),
        backend.record_store(),
        reporter(quiet),
    )
    .authenticate(credentials)
    .await?;

    // Role rows are only visible to the signed-in user under row level security
    let user_backend = backend.as_user(&session.access_token);
    let admin = AuthorizeAdminUseCase::new(
        user_backend.auth_provider(),
        user_backend.record_store(),
        reporter(quiet),
    )
    .with_roles_table(settings.roles_table.as_str())
    .verify(&session.access_token)
    .await?;

    if !quiet {
        eprintln!("✅ Signed in as administrator {}", credentials.email());
    }
    Ok(admin)
}

fn reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

fn report_format(args: &Args, format: OutputFormat) {
    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
}

fn present(output: Option<PathBuf>, content: &str) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> =
        PresenterFactory::create(PresenterType::from_output(output));
    presenter.present(content)
}
