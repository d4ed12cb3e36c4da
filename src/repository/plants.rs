use crate::localizer::Localizer;
use crate::model::PlantProfile;
use crate::mt::MtResult;
use crate::repository::api::HortinaApi;
use std::sync::Arc;

/// Plant catalogue lookups, localized for display
#[derive(Clone)]
pub struct PlantRepository {
    api: Arc<dyn HortinaApi>,
    localizer: Localizer,
}

impl PlantRepository {
    pub fn new(api: Arc<dyn HortinaApi>, localizer: Localizer) -> Self {
        Self { api, localizer }
    }

    /// Search the catalogue; `query` is sent as typed, only results are localized
    pub async fn search_plants(&self, query: &str, ui_lang: &str) -> MtResult<Vec<PlantProfile>> {
        let plants = self.api.search_plants(query).await?;
        Ok(self.localizer.localize_all(&plants, ui_lang).await)
    }

    pub async fn plant(&self, external_id: i32, ui_lang: &str) -> MtResult<PlantProfile> {
        let plant = self.api.plant(external_id).await?;
        Ok(self.localizer.localize(&plant, ui_lang).await)
    }
}
