use crate::core::registry::TypeRegistry;
use crate::core::{CatalogSource, Storage};
use crate::domain::equipment::EquipmentSet;
use crate::domain::plants::PlantCatalog;
use crate::domain::reagents::ReagentSet;
use crate::utils::error::{Result, WaterChemError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Reads JSON catalogs through a [`Storage`] backend.
pub struct CatalogLoader<S: Storage> {
    storage: S,
    registry: TypeRegistry,
}

impl<S: Storage> CatalogLoader<S> {
    pub fn new(storage: S, registry: TypeRegistry) -> Self {
        Self { storage, registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.storage.read_file(path).await?;
        let parsed = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

fn ensure_unique<'a>(kind: &'static str, ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(WaterChemError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl<S: Storage> CatalogSource for CatalogLoader<S> {
    async fn load_equipment(&self, path: &str) -> Result<EquipmentSet> {
        let set: EquipmentSet = self.read_json(path).await?;

        for equipment in &set.equipment {
            self.registry.check_equipment(equipment)?;
        }
        ensure_unique("equipment", set.equipment.iter().map(|e| e.id.as_str()))?;

        tracing::info!("Loaded {} equipment entries from {}", set.equipment.len(), path);
        Ok(set)
    }

    async fn load_reagents(&self, path: &str) -> Result<ReagentSet> {
        let set: ReagentSet = self.read_json(path).await?;

        ensure_unique("reagent", set.reagents.iter().map(|r| r.id.as_str()))?;

        tracing::info!("Loaded {} reagents from {}", set.reagents.len(), path);
        Ok(set)
    }

    async fn load_plants(&self, path: &str) -> Result<PlantCatalog> {
        let catalog: PlantCatalog = self.read_json(path).await?;

        ensure_unique(
            "species",
            catalog.species.iter().map(|s| s.species_id.as_str()),
        )?;

        tracing::info!(
            "Loaded {} species ({} plant instances) from {}",
            catalog.species.len(),
            catalog.instance_count(),
            path
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MemoryStorage {
        files: HashMap<String, String>,
    }

    impl MemoryStorage {
        fn with(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.to_string());
            Self { files }
        }
    }

    impl Storage for MemoryStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .map(|s| s.as_bytes().to_vec())
                .ok_or_else(|| {
                    WaterChemError::IoError(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        path.to_string(),
                    ))
                })
        }
    }

    fn loader(path: &str, content: &str) -> CatalogLoader<MemoryStorage> {
        CatalogLoader::new(MemoryStorage::with(path, content), TypeRegistry::with_defaults())
    }

    #[tokio::test]
    async fn test_load_equipment() {
        let json = r#"{ "equipment": [
            { "id": "ph-1", "type": "ph_meter", "measurements": ["ph", "temperature"],
              "tolerance": { "ph": 0.01 } },
            { "id": "ec-1", "type": "ec_meter", "measurements": ["ec"] }
        ]}"#;
        let set = loader("equipment.json", json)
            .load_equipment("equipment.json")
            .await
            .unwrap();

        assert_eq!(set.equipment.len(), 2);
        assert_eq!(set.equipment[0].tolerance.get("ph"), Some(&0.01));
    }

    #[tokio::test]
    async fn test_duplicate_equipment_rejected() {
        let json = r#"{ "equipment": [
            { "id": "ph-1", "type": "ph_meter" },
            { "id": "ph-1", "type": "thermometer" }
        ]}"#;
        let err = loader("e.json", json).load_equipment("e.json").await.unwrap_err();
        assert!(matches!(err, WaterChemError::DuplicateId { kind: "equipment", .. }));
    }

    #[tokio::test]
    async fn test_unknown_type_rejected() {
        let json = r#"{ "equipment": [ { "id": "orp-1", "type": "orp_meter" } ] }"#;
        let err = loader("e.json", json).load_equipment("e.json").await.unwrap_err();
        assert!(matches!(err, WaterChemError::UnknownIdentifier { .. }));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = loader("a.json", "{}").load_reagents("b.json").await.unwrap_err();
        assert!(matches!(err, WaterChemError::IoError(_)));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let err = loader("r.json", "{ not json").load_reagents("r.json").await.unwrap_err();
        assert!(matches!(err, WaterChemError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_empty_catalog_defaults() {
        let plants = loader("p.json", "{}").load_plants("p.json").await.unwrap();
        assert!(plants.species.is_empty());
    }
}
