use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Masjid, RankedMasjid};

/// Body of `addmasjid` and each element of `bulk`.
///
/// `location` may be replaced by the `lat`/`lng` text pair from the add form.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMasjidRequest {
    /// Bulk items may pin their own number; `addmasjid` always assigns one.
    pub masjid_id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "masjidName is required"))]
    pub masjid_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "masjidArea is required"))]
    pub masjid_area: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "masjidTime is required"))]
    pub masjid_time: String,

    pub location: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub photos: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMasjidRequest {
    #[validate(length(min = 1, message = "masjidName cannot be empty"))]
    pub masjid_name: Option<String>,
    #[validate(length(min = 1, message = "masjidArea cannot be empty"))]
    pub masjid_area: Option<String>,
    #[validate(length(min = 1, message = "masjidTime cannot be empty"))]
    pub masjid_time: Option<String>,
    #[validate(length(min = 1, message = "location cannot be empty"))]
    pub location: Option<String>,
    /// Absent keeps the stored photos, `null` clears them.
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>)]
    pub photos: Option<Option<String>>,
}

// Wraps any present value, `null` included, so it is distinguishable from a missing key.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Listing query. A user position needs both `lat` and `lng`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MasjidListQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasjidResponse {
    pub id: Uuid,
    pub masjid_id: i64,
    pub masjid_name: String,
    pub masjid_area: String,
    pub masjid_time: String,
    pub location: String,
    pub photos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<Masjid> for MasjidResponse {
    fn from(masjid: Masjid) -> Self {
        Self {
            id: masjid.id,
            masjid_id: masjid.masjid_id,
            masjid_name: masjid.masjid_name,
            masjid_area: masjid.masjid_area,
            masjid_time: masjid.masjid_time,
            location: masjid.location,
            photos: masjid.photos,
            distance_km: None,
        }
    }
}

impl From<RankedMasjid> for MasjidResponse {
    fn from(ranked: RankedMasjid) -> Self {
        Self {
            distance_km: ranked.distance_km,
            ..Self::from(ranked.masjid)
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MasjidCreatedResponse {
    pub msg: String,
    pub data: MasjidResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkMasjidsCreatedResponse {
    pub msg: String,
    pub masjids: Vec<MasjidResponse>,
}
