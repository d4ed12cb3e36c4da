//! Records returned by the Hortina backend
//!
//! Field names follow Rust conventions; the backend's mixed snake/camel case
//! wire names are kept through `serde(rename)`. Every field is optional
//! because the backend omits or nulls fields freely.

use serde::{Deserialize, Serialize};

/// A crop planted by a user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Crop {
    #[serde(rename = "idCultivo", default)]
    pub id: Option<i32>,
    #[serde(rename = "id_usuario", default)]
    pub user_id: Option<i32>,
    #[serde(rename = "plantExternalId", default)]
    pub plant_external_id: Option<i32>,
    #[serde(rename = "id_ubicacion", default)]
    pub location_id: Option<i32>,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    /// Crop category, e.g. "hortaliza"
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    #[serde(rename = "fecha_plantacion", default)]
    pub planted_on: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "fecha_estimada_cosecha", default)]
    pub estimated_harvest: Option<String>,
}

/// Rule that generated an automatic task
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskRule {
    #[serde(rename = "id_regla", default)]
    pub id: Option<i32>,
    #[serde(rename = "tipo_cultivo", default)]
    pub crop_kind: Option<String>,
    #[serde(rename = "accion", default)]
    pub action: Option<String>,
    #[serde(rename = "frecuencia_dias", default)]
    pub frequency_days: Option<i32>,
    #[serde(rename = "condicion_meteo", default)]
    pub weather_condition: Option<String>,
    #[serde(rename = "activo", default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "id_tarea", default)]
    pub id: Option<i32>,
    #[serde(rename = "cultivo", default)]
    pub crop: Option<Crop>,
    #[serde(rename = "regla", default)]
    pub rule: Option<TaskRule>,
    #[serde(rename = "nombre_tarea", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "fechaSugerida", default)]
    pub suggested_date: Option<String>,
    #[serde(rename = "completada", default)]
    pub completed: Option<bool>,
    /// How the task was created: "manual" or by a rule
    #[serde(rename = "tipo_origen", default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Care sheet of a plant species from the external plant catalogue
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProfile {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub external_id: Option<i32>,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub watering: Option<String>,
    #[serde(default)]
    pub sunlight: Option<String>,
    #[serde(default)]
    pub care_level: Option<String>,
    #[serde(default)]
    pub life_cycle: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub edible_parts: Option<String>,
}

/// A crop together with its tasks and plant care sheet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CropDetail {
    #[serde(rename = "cultivo")]
    pub crop: Crop,
    #[serde(rename = "tareas", default)]
    pub tasks: Vec<Task>,
    #[serde(rename = "plantProfile", default)]
    pub plant_profile: Option<PlantProfile>,
}
