use tempfile::TempDir;
use waterchem::domain::ports::CatalogSource;
use waterchem::domain::reagents::ReagentState;
use waterchem::{AppConfig, CatalogLoader, LocalStorage, TypeRegistry, WaterChemError};

const EQUIPMENT_JSON: &str = r#"{
  "equipment": [
    {
      "id": "apera-ph60",
      "type": "ph_meter",
      "display_name": "Apera PH60",
      "measurements": ["ph", "temperature"],
      "temperature_compensated": true,
      "tolerance": { "ph": 0.01, "temperature": 0.5 },
      "calibration": {
        "required": true,
        "solutions": ["pH 4.00", "pH 7.00", "pH 10.00"],
        "valid_days": 30,
        "history": [
          { "timestamp": "2024-05-02T08:00:00Z", "results": { "ph": 7.02 } }
        ]
      },
      "replaceable_parts": {
        "has_replaceable_parts": true,
        "parts": [ { "name": "probe", "vendor": "Apera" } ]
      }
    },
    { "id": "orp-1", "type": "orp_meter", "measurements": ["orp"] }
  ]
}"#;

const REAGENTS_JSON: &str = r#"{
  "reagents": [
    {
      "id": "phosphoric-85",
      "display_name": "Phosphoric acid 85%",
      "state": "liquid",
      "assay_percent": 85.0,
      "density_g_per_ml": 1.685,
      "targets": [ { "max_ph_shift": 0.5 } ],
      "safety": { "flags": ["strong_acid"] }
    },
    { "id": "sodium-bicarbonate", "state": "solid" }
  ]
}"#;

const PLANTS_JSON: &str = r#"{
  "species": [
    {
      "species_id": "lettuce",
      "scientific_name": "Lactuca sativa",
      "cultivars": [
        { "cultivar_id": "butterhead", "name": "Butterhead",
          "instances": [ { "instance_id": "l1", "water_source_id": "ro" } ] }
      ]
    }
  ]
}"#;

fn write_catalogs() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("equipment.json"), EQUIPMENT_JSON).unwrap();
    std::fs::write(dir.path().join("reagents.json"), REAGENTS_JSON).unwrap();
    std::fs::write(dir.path().join("plants.json"), PLANTS_JSON).unwrap();
    dir
}

#[tokio::test]
async fn test_unregistered_equipment_type_fails_with_defaults() {
    let dir = write_catalogs();
    let loader = CatalogLoader::new(LocalStorage::new(dir.path()), TypeRegistry::with_defaults());

    let err = loader.load_equipment("equipment.json").await.unwrap_err();
    match err {
        WaterChemError::UnknownIdentifier { kind, value, context } => {
            assert_eq!(kind, "equipment type");
            assert_eq!(value, "orp_meter");
            assert!(context.contains("orp-1"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_config_registry_extends_defaults() {
    let dir = write_catalogs();
    let toml = format!(
        r#"
[catalog]
base_dir = "{}"
equipment_path = "equipment.json"

[registry]
equipment_types = ["orp_meter"]
measurements = ["orp"]
"#,
        dir.path().display()
    );
    let config = AppConfig::from_toml_str(&toml).unwrap();
    let loader = CatalogLoader::new(LocalStorage::new(config.base_dir()), config.type_registry());

    let set = loader.load_equipment("equipment.json").await.unwrap();
    assert_eq!(set.equipment.len(), 2);

    let ph = &set.equipment[0];
    assert!(ph.temperature_compensated);
    assert_eq!(ph.calibration.valid_days, Some(30));
    assert_eq!(ph.calibration.valid_reading_count, None);
    assert_eq!(ph.calibration.history[0].results.get("ph"), Some(&7.02));
    assert_eq!(ph.replaceable_parts.parts[0].vendor.as_deref(), Some("Apera"));
    assert_eq!(ph.replaceable_parts.parts[0].purchase_link, None);

    let orp = &set.equipment[1];
    assert!(orp.tolerance.is_empty());
    assert!(orp.tolerance_default_allowed);
}

#[tokio::test]
async fn test_load_reagents_and_plants() {
    let dir = write_catalogs();
    let loader = CatalogLoader::new(LocalStorage::new(dir.path()), TypeRegistry::with_defaults());

    let reagents = loader.load_reagents("reagents.json").await.unwrap();
    assert_eq!(reagents.reagents.len(), 2);
    assert_eq!(reagents.reagents[0].state, ReagentState::Liquid);
    assert_eq!(reagents.reagents[0].targets[0].max_ph_shift, Some(0.5));
    assert_eq!(reagents.reagents[0].targets[0].max_delta_mg_per_l, None);
    assert_eq!(reagents.reagents[1].assay_percent, None);

    let plants = loader.load_plants("plants.json").await.unwrap();
    assert_eq!(plants.species[0].cultivars[0].instances[0].water_source_id, "ro");
    assert_eq!(plants.instance_count(), 1);
}

#[tokio::test]
async fn test_duplicate_reagent_ids_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("reagents.json"),
        r#"{ "reagents": [ { "id": "a" }, { "id": "b" }, { "id": "a" } ] }"#,
    )
    .unwrap();
    let loader = CatalogLoader::new(LocalStorage::new(dir.path()), TypeRegistry::with_defaults());

    let err = loader.load_reagents("reagents.json").await.unwrap_err();
    assert!(matches!(err, WaterChemError::DuplicateId { kind: "reagent", ref id } if id == "a"));
}

#[tokio::test]
async fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let loader = CatalogLoader::new(LocalStorage::new(dir.path()), TypeRegistry::with_defaults());

    let err = loader.load_plants("plants.json").await.unwrap_err();
    assert!(matches!(err, WaterChemError::IoError(_)));
}
