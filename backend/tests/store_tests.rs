//! Journal snapshot store tests
//!
//! Recovery from missing and corrupt snapshots, persistence of every
//! mutation, and compatibility with snapshots written by the browser client.

use barista_log::{error::AppError, JournalStore};
use rust_decimal::Decimal;
use shared::{BrewMethod, CoffeeBean, DiagnosisStatus, RoastLevel};
use tempfile::TempDir;
use uuid::Uuid;

fn sample_bean(name: &str) -> CoffeeBean {
    CoffeeBean {
        id: Uuid::new_v4(),
        name: name.to_string(),
        roaster: "Café Tostado".to_string(),
        origin: "Huila, Colombia".to_string(),
        farm: None,
        altitude: Some("1700".to_string()),
        variety: None,
        process: "Washed".to_string(),
        roast_date: None,
        open_date: None,
        roast_level: RoastLevel::Light,
        notes: None,
        is_archived: false,
        recipes: Vec::new(),
    }
}

/// Snapshot as stored by the original browser client, Spanish enum values included
const LEGACY_SNAPSHOT: &str = r#"[
  {
    "id": "6f1c2a3e-52b4-4c1d-9a27-1f0c6a9d8e11",
    "name": "Gesha Finca Deborah",
    "roaster": "Nomad",
    "origin": "Panamá",
    "farm": "",
    "altitude": "1900",
    "variety": "Gesha",
    "process": "Natural",
    "roastDate": "2024-03-01",
    "openDate": "",
    "roastLevel": "Claro",
    "notes": "",
    "isArchived": false,
    "recipes": [
      {
        "id": "0b7e6d55-2f1a-4e7b-8d1e-3c2a9b8f7a60",
        "date": "2024-03-10T08:30:00.000Z",
        "config": {
          "method": "Prensa Francesa",
          "dripper": "",
          "filterType": "Metal",
          "grinderModel": "Comandante",
          "grinderSetting": "30 clicks",
          "dose": 15,
          "waterAmount": 240,
          "temperature": 93,
          "totalTime": "04:00"
        },
        "technique": { "bloomWater": 45, "bloomTime": 30, "pours": 1, "notes": "" },
        "result": {
          "aroma": 7, "acidity": 5, "sweetness": 5, "bitterness": 8.5,
          "body": 6, "clarity": 4, "balance": 4, "aftertaste": 5,
          "flavorNotes": "cacao", "overallScore": 5, "generalFeeling": "amargo"
        },
        "learning": {
          "diagnosis": "Sobre-extraído",
          "changesForNextTime": "Moler más grueso",
          "changesFromPrevious": ""
        }
      }
    ]
  }
]"#;

#[tokio::test]
async fn test_missing_snapshot_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = JournalStore::open(dir.path().join("barista-beans.json")).await.unwrap();
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_corrupt_snapshot_starts_empty_and_is_kept_aside() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("barista-beans.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JournalStore::open(&path).await.unwrap();
    assert!(store.snapshot().await.is_empty());
    assert!(!path.exists());

    let kept: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
        .collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(std::fs::read_to_string(kept[0].path()).unwrap(), "{ not json");
}

#[tokio::test]
async fn test_mutations_persist_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("barista-beans.json");

    let store = JournalStore::open(&path).await.unwrap();
    let bean = sample_bean("Pink Bourbon");
    let id = bean.id;
    store
        .update(|beans| {
            beans.insert(0, bean);
            Ok(())
        })
        .await
        .unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let reopened = JournalStore::open(&path).await.unwrap();
    let beans = reopened.snapshot().await;
    assert_eq!(beans.len(), 1);
    assert_eq!(beans[0].id, id);
    assert_eq!(beans[0].name, "Pink Bourbon");
}

#[tokio::test]
async fn test_rejected_mutation_leaves_journal_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("barista-beans.json");
    let store = JournalStore::open(&path).await.unwrap();

    let result: Result<(), AppError> = store
        .update(|beans| {
            beans.push(sample_bean("Never saved"));
            Err(AppError::NotFound("Bean".to_string()))
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(store.snapshot().await.is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_read_runs_query_against_collection() {
    let dir = TempDir::new().unwrap();
    let store = JournalStore::open(dir.path().join("barista-beans.json")).await.unwrap();
    store
        .update(|beans| {
            beans.push(sample_bean("A"));
            beans.push(sample_bean("B"));
            Ok(())
        })
        .await
        .unwrap();

    let names: Vec<String> = store.read(|beans| beans.iter().map(|b| b.name.clone()).collect()).await;
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn test_legacy_snapshot_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("barista-beans.json");
    std::fs::write(&path, LEGACY_SNAPSHOT).unwrap();

    let store = JournalStore::open(&path).await.unwrap();
    let beans = store.snapshot().await;
    assert_eq!(beans.len(), 1);

    let bean = &beans[0];
    assert_eq!(bean.roast_level, RoastLevel::Light);
    assert_eq!(bean.farm, None);
    assert_eq!(bean.open_date, None);
    assert!(bean.roast_date.is_some());

    let recipe = &bean.recipes[0];
    assert_eq!(recipe.config.method, BrewMethod::FrenchPress);
    assert_eq!(recipe.config.dripper, None);
    assert_eq!(recipe.learning.diagnosis, DiagnosisStatus::OverExtracted);
    assert_eq!(recipe.config.ratio(), Some(Decimal::from(16)));
}

#[tokio::test]
async fn test_cleared_number_fields_do_not_void_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("barista-beans.json");
    let cleared = LEGACY_SNAPSHOT
        .replace(r#""dose": 15"#, r#""dose": null"#)
        .replace(r#""bloomTime": 30"#, r#""bloomTime": null"#)
        .replace(r#""pours": 1"#, r#""pours": 1.5"#);
    std::fs::write(&path, cleared).unwrap();

    let store = JournalStore::open(&path).await.unwrap();
    let beans = store.snapshot().await;
    assert_eq!(beans.len(), 1);
    assert!(path.exists());

    let recipe = &beans[0].recipes[0];
    assert_eq!(recipe.config.dose, Decimal::ZERO);
    assert_eq!(recipe.config.ratio(), None);
    assert_eq!(recipe.technique.bloom_time, 0);
    assert_eq!(recipe.technique.pours, 2);
    assert_eq!(recipe.config.water_amount, Decimal::from(240));
}

#[tokio::test]
async fn test_unreadable_snapshot_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("barista-beans.json");
    std::fs::create_dir(&path).unwrap();

    let result = JournalStore::open(&path).await;
    assert!(matches!(result, Err(AppError::StorageError(_))));
    assert!(path.is_dir());
}
