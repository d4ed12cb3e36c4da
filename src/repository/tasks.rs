use crate::localizer::Localizer;
use crate::model::Task;
use crate::mt::MtResult;
use crate::repository::api::HortinaApi;
use std::sync::Arc;

/// Garden tasks, localized for display
#[derive(Clone)]
pub struct TaskRepository {
    api: Arc<dyn HortinaApi>,
    localizer: Localizer,
}

impl TaskRepository {
    pub fn new(api: Arc<dyn HortinaApi>, localizer: Localizer) -> Self {
        Self { api, localizer }
    }

    pub async fn tasks(&self, ui_lang: &str) -> MtResult<Vec<Task>> {
        let tasks = self.api.tasks().await?;
        Ok(self.localizer.localize_all(&tasks, ui_lang).await)
    }

    pub async fn tasks_for_crop(&self, crop_id: i32, ui_lang: &str) -> MtResult<Vec<Task>> {
        let tasks = self.api.tasks_for_crop(crop_id).await?;
        Ok(self.localizer.localize_all(&tasks, ui_lang).await)
    }
}
