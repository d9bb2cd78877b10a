/// Integration tests for the application layer
mod test_utilities;

use intech_storefront::catalog::domain::{CapacityUnit, StorageType};
use intech_storefront::prelude::*;
use std::sync::Arc;
use test_utilities::mocks::*;
use test_utilities::{catalog_backend, fixtures_path, PUBLIC_BASE_URL};

const ADMIN_EMAIL: &str = "admin@intech.store";
const ADMIN_PASSWORD: &str = "correct-horse";

fn loader(
    backend: &Arc<InMemoryBackend>,
    reporter: MockProgressReporter,
) -> LoadLaptopUseCase<Arc<InMemoryBackend>, Arc<InMemoryBackend>, MockProgressReporter> {
    LoadLaptopUseCase::new(backend.clone(), backend.clone(), reporter)
}

fn laptop_id(id: &str) -> LaptopId {
    LaptopId::new(id).unwrap()
}

#[tokio::test]
async fn test_load_full_laptop_from_fixture() {
    let backend = catalog_backend();
    let use_case = loader(&backend, MockProgressReporter::new());

    let laptop = use_case.load(&laptop_id("zenbook-14")).await.unwrap();

    assert_eq!(laptop.brand, "ASUS");
    assert_eq!(laptop.model, "Zenbook 14");
    assert_eq!(laptop.price, 999.0);
    assert_eq!(
        laptop.graphic_cards.as_slice(),
        &[GraphicCard {
            brand: "Intel".to_string(),
            model: "Iris Xe".to_string(),
        }]
    );
    assert_eq!(laptop.processors.len(), 1);
    // Junction order, not capacity order
    let capacities: Vec<u32> = laptop.rams.as_slice().iter().map(|r| r.capacity).collect();
    assert_eq!(capacities, vec![32, 16]);
    assert_eq!(laptop.screens.as_slice(), &[Screen { size: 14.0 }]);
    assert_eq!(laptop.storages.len(), 2);
    assert_eq!(
        laptop.images,
        Some(vec![
            format!("{}/zenbook-14/front.png", PUBLIC_BASE_URL),
            format!("{}/zenbook-14/side.jpg", PUBLIC_BASE_URL),
        ])
    );
}

#[tokio::test]
async fn test_load_drops_deleted_component_and_parses_string_price() {
    let backend = catalog_backend();
    let reporter = MockProgressReporter::new();
    let use_case = loader(&backend, reporter.clone());

    let laptop = use_case.load(&laptop_id("legion-5")).await.unwrap();

    assert_eq!(laptop.price, 1499.99);
    assert!(laptop.storages.is_empty());
    assert!(!laptop.storages.is_unavailable());
    assert_eq!(laptop.rams.len(), 1);
    assert!(reporter.has_message_containing("st-deleted"));
}

#[tokio::test]
async fn test_load_laptop_without_links_or_images() {
    let backend = catalog_backend();
    let use_case = loader(&backend, MockProgressReporter::new());

    let laptop = use_case.load(&laptop_id("swift-go")).await.unwrap();

    assert_eq!(laptop.price, 649.0);
    assert_eq!(laptop.graphic_cards, VariantSet::Empty);
    assert_eq!(laptop.processors, VariantSet::Empty);
    assert_eq!(laptop.rams, VariantSet::Empty);
    assert_eq!(laptop.screens, VariantSet::Empty);
    assert_eq!(laptop.storages, VariantSet::Empty);
    assert!(laptop.images.is_none());

    let json = serde_json::to_value(&laptop).unwrap();
    assert_eq!(json["graphicCards"], serde_json::json!([]));
    assert!(json["images"].is_null());
}

#[tokio::test]
async fn test_unknown_laptop_reads_only_the_root_table() {
    let backend = catalog_backend();
    let store = Arc::new(CountingRecordStore::new(backend.clone()));
    let use_case =
        LoadLaptopUseCase::new(store.clone(), backend.clone(), MockProgressReporter::new());

    let result = use_case.load_detailed(&laptop_id("no-such-laptop")).await;

    assert_eq!(result.unwrap_err(), RootFetchError::NotFound);
    assert_eq!(store.reads(), vec!["laptop".to_string()]);
}

#[tokio::test]
async fn test_component_reads_are_bounded_by_links() {
    let backend = catalog_backend();
    let store = Arc::new(CountingRecordStore::new(backend.clone()));
    let use_case =
        LoadLaptopUseCase::new(store.clone(), backend.clone(), MockProgressReporter::new());

    use_case.load(&laptop_id("zenbook-14")).await.unwrap();

    assert_eq!(store.reads_of("laptop"), 1);
    assert_eq!(store.reads_of("laptop_ram"), 1);
    assert_eq!(store.reads_of("ram"), 2);
    assert_eq!(store.reads_of("storage"), 2);
    assert_eq!(store.reads_of("graphic_card"), 1);
    assert_eq!(store.reads().len(), 1 + 5 + 7);
}

#[tokio::test]
async fn test_failing_junction_table_degrades_only_that_kind() {
    let backend = catalog_backend();
    backend.fail_table("laptop_screen");
    let reporter = MockProgressReporter::new();
    let use_case = loader(&backend, reporter.clone());

    let laptop = use_case.load(&laptop_id("zenbook-14")).await.unwrap();

    assert!(laptop.screens.is_unavailable());
    assert_eq!(laptop.rams.len(), 2);
    assert!(laptop.images.is_some());

    let json = serde_json::to_value(&laptop).unwrap();
    assert!(json["screens"].is_null());
    assert_eq!(reporter.errors().len(), 1);
    assert!(reporter.errors()[0].contains("screen links"));
}

#[tokio::test]
async fn test_failing_image_folder_keeps_components() {
    let backend = catalog_backend();
    backend.fail_folder("zenbook-14");
    let use_case = loader(&backend, MockProgressReporter::new());

    let laptop = use_case.load(&laptop_id("zenbook-14")).await.unwrap();

    assert!(laptop.images.is_none());
    assert_eq!(laptop.storages.len(), 2);
}

#[tokio::test]
async fn test_unreachable_root_is_unavailable() {
    let backend = catalog_backend();
    backend.fail_table("laptop");
    let use_case = loader(&backend, MockProgressReporter::new());

    let result = use_case.load_detailed(&laptop_id("zenbook-14")).await;

    assert!(matches!(result, Err(RootFetchError::Unavailable(_))));
    assert!(use_case.load(&laptop_id("zenbook-14")).await.is_none());
}

#[tokio::test]
async fn test_configuration_sorts_options_and_preselects_smallest() {
    let backend = catalog_backend();
    let use_case = loader(&backend, MockProgressReporter::new());

    let laptop = use_case.load(&laptop_id("zenbook-14")).await.unwrap();
    let configuration = LaptopConfiguration::from_aggregate(laptop);

    let rams = &configuration.rams.options;
    let capacities: Vec<u32> = rams.iter().map(|r| r.capacity).collect();
    assert_eq!(capacities, vec![16, 32]);
    assert_eq!(
        configuration.selection.storage,
        Some(Storage {
            capacity: 512,
            capacity_unit: CapacityUnit::Gb,
            storage_type: StorageType::Ssd,
        })
    );
    assert_eq!(
        configuration.primary_image.as_deref(),
        Some(format!("{}/zenbook-14/front.png", PUBLIC_BASE_URL).as_str())
    );
}

#[tokio::test]
async fn test_top_picks_with_thumbnails() {
    let backend = catalog_backend();
    let use_case = ListTopPicksUseCase::new(backend.clone(), backend, MockProgressReporter::new());

    let cards = use_case.execute(5).await.unwrap();

    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].id, "zenbook-14");
    assert_eq!(
        cards[0].thumbnail.as_deref(),
        Some(format!("{}/zenbook-14/front.png", PUBLIC_BASE_URL).as_str())
    );
    assert_eq!(cards[1].price, 1499.99);
    assert!(cards[2].thumbnail.is_none());
}

#[tokio::test]
async fn test_top_picks_respects_limit() {
    let backend = catalog_backend();
    let use_case = ListTopPicksUseCase::new(backend.clone(), backend, MockProgressReporter::new());

    let cards = use_case.execute(2).await.unwrap();
    assert_eq!(cards.len(), 2);
}

#[tokio::test]
async fn test_admin_login_from_fixture() {
    let backend = catalog_backend();
    let use_case =
        AuthorizeAdminUseCase::new(backend.clone(), backend, MockProgressReporter::new());

    let credentials = Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    let session = use_case.login(&credentials).await.unwrap();

    assert_eq!(session.user.id, "00000000-0000-4000-8000-000000000001");
    assert_eq!(session.user.email.as_deref(), Some(ADMIN_EMAIL));
}

#[tokio::test]
async fn test_customer_login_is_forbidden() {
    let backend = catalog_backend();
    let use_case =
        AuthorizeAdminUseCase::new(backend.clone(), backend, MockProgressReporter::new());

    let credentials = Credentials::new("shopper@intech.store", "battery-staple").unwrap();
    let err = use_case.login(&credentials).await.unwrap_err();

    let store_error = err.downcast_ref::<StoreError>().unwrap();
    assert_eq!(store_error.exit_code(), ExitCode::AccessDenied);
    assert!(err.to_string().contains("administrator permissions"));
}

#[tokio::test]
async fn test_add_laptop_from_draft_file() {
    let backend = catalog_backend();
    let reader = FileSystemReader::new();
    let draft_path = fixtures_path().join("drafts/laptop.yml");

    let draft = reader.read_draft(&draft_path).unwrap();
    let images = reader.read_images(&draft_path, &draft).unwrap();
    let reporter = MockProgressReporter::new();
    let use_case = AddLaptopUseCase::new(backend.clone(), backend.clone(), reporter.clone());

    let added = use_case.execute(&draft, images).await.unwrap();

    assert_eq!(backend.row_count("laptop"), 4);
    assert_eq!(backend.row_count("laptop_ram"), 3 + 2);
    assert_eq!(added.image_urls.len(), 1);
    assert!(added.image_urls[0].starts_with(&format!(
        "{}/{}/Framework-Laptop-13-",
        PUBLIC_BASE_URL, added.laptop_id
    )));
    assert!(reporter.has_message_containing("Progress: 1/1"));

    // The new laptop loads like any other
    let loaded = loader(&backend, MockProgressReporter::new())
        .load(&laptop_id(&added.laptop_id))
        .await
        .unwrap();
    assert_eq!(loaded.brand, "Framework");
    assert_eq!(loaded.rams.len(), 2);
    assert_eq!(loaded.images.map(|images| images.len()), Some(1));
}

#[tokio::test]
async fn test_invalid_draft_writes_nothing() {
    let backend = catalog_backend();
    let reader = FileSystemReader::new();
    let draft = reader
        .read_draft(&fixtures_path().join("drafts/invalid.yml"))
        .unwrap();

    let reporter = MockProgressReporter::new();
    let use_case = AddLaptopUseCase::new(backend.clone(), backend.clone(), reporter);
    let err = use_case.execute(&draft, Vec::new()).await.unwrap_err();

    assert!(err.to_string().contains("Brand is required"));
    assert!(err.to_string().contains("Invalid category"));
    assert_eq!(backend.row_count("laptop"), 3);
}
