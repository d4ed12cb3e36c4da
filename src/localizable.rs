//! Per-entity translation field lists
//!
//! Each backend record names, once and explicitly, which of its text fields
//! are shown to users and therefore translated. Localizing rebuilds the
//! record field by field: listed fields go through
//! [`Localizer::translate_auto`] one at a time, everything else (ids, dates,
//! flags, numbers, image URLs, scientific names) is copied unchanged. The
//! source record is never modified.

use crate::localizer::Localizer;
use crate::model::{Crop, CropDetail, PlantProfile, Task};
use async_trait::async_trait;

#[async_trait]
pub trait Localizable: Sized + Send + Sync {
    /// Fields [`localized`](Self::localized) rewrites, by Rust field name.
    /// A nested record listed here is localized with its own field list.
    const TRANSLATABLE_FIELDS: &'static [&'static str];

    /// A copy of `self` with its translatable fields in `target_lang`
    async fn localized(&self, localizer: &Localizer, target_lang: &str) -> Self;
}

#[async_trait]
impl Localizable for Crop {
    const TRANSLATABLE_FIELDS: &'static [&'static str] = &["name", "kind", "status"];

    async fn localized(&self, localizer: &Localizer, target_lang: &str) -> Self {
        Crop {
            name: localizer.translate_opt(self.name.as_deref(), target_lang).await,
            kind: localizer.translate_opt(self.kind.as_deref(), target_lang).await,
            status: localizer.translate_opt(self.status.as_deref(), target_lang).await,
            ..self.clone()
        }
    }
}

#[async_trait]
impl Localizable for Task {
    const TRANSLATABLE_FIELDS: &'static [&'static str] = &["name", "description", "origin", "crop"];

    async fn localized(&self, localizer: &Localizer, target_lang: &str) -> Self {
        let crop = match &self.crop {
            Some(crop) => Some(crop.localized(localizer, target_lang).await),
            None => None,
        };

        Task {
            name: localizer.translate_opt(self.name.as_deref(), target_lang).await,
            description: localizer
                .translate_opt(self.description.as_deref(), target_lang)
                .await,
            origin: localizer.translate_opt(self.origin.as_deref(), target_lang).await,
            crop,
            ..self.clone()
        }
    }
}

#[async_trait]
impl Localizable for PlantProfile {
    const TRANSLATABLE_FIELDS: &'static [&'static str] = &[
        "common_name",
        "watering",
        "sunlight",
        "care_level",
        "life_cycle",
        "edible_parts",
    ];

    async fn localized(&self, localizer: &Localizer, target_lang: &str) -> Self {
        PlantProfile {
            common_name: localizer
                .translate_opt(self.common_name.as_deref(), target_lang)
                .await,
            watering: localizer
                .translate_opt(self.watering.as_deref(), target_lang)
                .await,
            sunlight: localizer
                .translate_opt(self.sunlight.as_deref(), target_lang)
                .await,
            care_level: localizer
                .translate_opt(self.care_level.as_deref(), target_lang)
                .await,
            life_cycle: localizer
                .translate_opt(self.life_cycle.as_deref(), target_lang)
                .await,
            edible_parts: localizer
                .translate_opt(self.edible_parts.as_deref(), target_lang)
                .await,
            ..self.clone()
        }
    }
}

#[async_trait]
impl Localizable for CropDetail {
    const TRANSLATABLE_FIELDS: &'static [&'static str] = &["crop", "tasks", "plant_profile"];

    async fn localized(&self, localizer: &Localizer, target_lang: &str) -> Self {
        let plant_profile = match &self.plant_profile {
            Some(profile) => Some(profile.localized(localizer, target_lang).await),
            None => None,
        };

        CropDetail {
            crop: self.crop.localized(localizer, target_lang).await,
            tasks: localizer.localize_all(&self.tasks, target_lang).await,
            plant_profile,
        }
    }
}
