//! Cached machine translation and field localization for Hortina
//!
//! Backend records (crops, tasks, plant care sheets) arrive in whatever
//! language their author typed. This crate translates their user-facing
//! text into the reader's UI language through DeepL, memoizes every result
//! for the session, and hands back localized copies of the records.
//!
//! ```ignore
//! use hortina_l10n::{Config, CropRepository, Localizer};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let localizer = Localizer::new(
//!         Arc::new(config.deepl_provider()?),
//!         Arc::new(hortina_l10n::TranslationCache::new()),
//!     );
//!     let crops = CropRepository::new(Arc::new(config.backend()?), localizer);
//!     for crop in crops.crops(&config.ui_lang).await? {
//!         println!("{:?}", crop.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod localizable;
pub mod localizer;
pub mod model;
pub mod mt;
pub mod repository;


pub use config::Config;
pub use localizable::Localizable;
pub use localizer::Localizer;
pub use model::{Crop, CropDetail, PlantProfile, Task, TaskRule};
pub use mt::{
    DeepLProvider, MachineTranslator, MockMode, MockTranslator, MtError, MtResult,
    TranslationCache, TranslationResult,
};
pub use repository::{CropRepository, HortinaApi, HttpHortinaApi, PlantRepository, TaskRepository};
