use crate::domain::equipment::EquipmentSet;
use crate::domain::plants::PlantCatalog;
use crate::domain::reagents::ReagentSet;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn equipment_path(&self) -> Option<&str>;
    fn reagents_path(&self) -> Option<&str>;
    fn plants_path(&self) -> Option<&str>;
    fn decimal_places(&self) -> usize;
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_equipment(&self, path: &str) -> Result<EquipmentSet>;
    async fn load_reagents(&self, path: &str) -> Result<ReagentSet>;
    async fn load_plants(&self, path: &str) -> Result<PlantCatalog>;
}
