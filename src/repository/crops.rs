use crate::localizer::Localizer;
use crate::model::{Crop, CropDetail};
use crate::mt::MtResult;
use crate::repository::api::HortinaApi;
use std::sync::Arc;
use tracing::debug;

/// Crops of the signed-in user, localized for display
#[derive(Clone)]
pub struct CropRepository {
    api: Arc<dyn HortinaApi>,
    localizer: Localizer,
}

impl CropRepository {
    pub fn new(api: Arc<dyn HortinaApi>, localizer: Localizer) -> Self {
        Self { api, localizer }
    }

    pub async fn crops(&self, ui_lang: &str) -> MtResult<Vec<Crop>> {
        let crops = self.api.crops().await?;
        debug!(count = crops.len(), ui_lang, "localizing crops");
        Ok(self.localizer.localize_all(&crops, ui_lang).await)
    }

    pub async fn crop(&self, id: i32, ui_lang: &str) -> MtResult<Crop> {
        let crop = self.api.crop(id).await?;
        Ok(self.localizer.localize(&crop, ui_lang).await)
    }

    /// Crop with its tasks and plant care sheet, all localized
    pub async fn crop_detail(&self, id: i32, ui_lang: &str) -> MtResult<CropDetail> {
        let detail = self.api.crop_detail(id).await?;
        Ok(self.localizer.localize(&detail, ui_lang).await)
    }
}
