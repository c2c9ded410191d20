use crate::api::dtos::{CreateMasjidRequest, MasjidListQuery, UpdateMasjidRequest};
use crate::domain::{maps_link, Coordinates, MasjidChanges, NewMasjid};
use crate::error::{AppError, AppResult, ValidationIssue};

/// Picks the stored map link: an explicit `location` wins, otherwise the
/// `lat`/`lng` pair is turned into a link as typed.
pub fn resolve_location(
    location: Option<&str>,
    lat: Option<&str>,
    lng: Option<&str>,
) -> Option<String> {
    if let Some(location) = location.filter(|value| !value.is_empty()) {
        return Some(location.to_string());
    }

    match (lat, lng) {
        (Some(lat), Some(lng)) if !lat.is_empty() && !lng.is_empty() => Some(maps_link(lat, lng)),
        _ => None,
    }
}

pub fn map_new_masjid(request: CreateMasjidRequest) -> AppResult<NewMasjid> {
    let location = resolve_location(
        request.location.as_deref(),
        request.lat.as_deref(),
        request.lng.as_deref(),
    )
    .ok_or_else(location_required)?;

    Ok(NewMasjid {
        requested_masjid_id: request.masjid_id,
        masjid_name: request.masjid_name,
        masjid_area: request.masjid_area,
        masjid_time: request.masjid_time,
        location,
        photos: request.photos,
    })
}

pub fn map_changes(request: UpdateMasjidRequest) -> MasjidChanges {
    MasjidChanges {
        masjid_name: request.masjid_name,
        masjid_area: request.masjid_area,
        masjid_time: request.masjid_time,
        location: request.location,
        photos: request.photos,
    }
}

/// Position the listing is ranked from. `NaN` and infinities parse as `f64`
/// but count as no position.
pub fn user_position(query: &MasjidListQuery) -> Option<Coordinates> {
    query
        .lat
        .zip(query.lng)
        .filter(|(latitude, longitude)| latitude.is_finite() && longitude.is_finite())
        .map(|(latitude, longitude)| Coordinates::new(latitude, longitude))
}

fn location_required() -> AppError {
    let message = "location or lat/lng is required".to_string();
    AppError::ValidationError {
        message: message.clone(),
        issues: vec![ValidationIssue {
            field: "location".to_string(),
            message,
            code: "required".to_string(),
        }],
    }
}
