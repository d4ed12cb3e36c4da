//! Repositories: fetch backend records, hand them back localized
//!
//! Every repository shares one [`Localizer`](crate::Localizer), and through
//! it one translation cache, so a string translated for the crop list is not
//! requested again for the dashboard. Backend failures propagate as
//! [`MtError::ApiError`](crate::MtError::ApiError) or
//! [`MtError::NetworkError`](crate::MtError::NetworkError); translation
//! failures never do.

pub mod api;
pub mod crops;
pub mod plants;
pub mod tasks;

pub use api::{HortinaApi, HttpHortinaApi};
pub use crops::CropRepository;
pub use plants::PlantRepository;
pub use tasks::TaskRepository;
