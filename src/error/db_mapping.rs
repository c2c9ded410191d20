use super::app_error::AppError;

pub(super) fn map_database_error(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> Option<AppError> {
    match code {
        Some("23505") => Some(AppError::Conflict(
            conflict_message_from_constraint(constraint).to_string(),
        )),
        Some("23502") => Some(AppError::validation_error(
            required_field_message_from_db(message)
                .unwrap_or_else(|| "required field is missing".to_string()),
        )),
        Some("23514") => Some(AppError::validation_error(
            check_violation_message(constraint)
                .unwrap_or("request violates validation rules")
                .to_string(),
        )),
        Some("22P02") => Some(AppError::validation_error("invalid input format")),
        Some("08001") | Some("08006") => Some(AppError::database_unavailable(
            "Unable to connect to database. Please try again later.",
        )),
        Some("53300") => Some(AppError::database_unavailable(
            "Service temporarily unavailable. Please try again later.",
        )),
        Some("55P03") => Some(AppError::Conflict(
            "Resource is currently locked. Please try again.".to_string(),
        )),
        _ => None,
    }
}

pub(super) fn conflict_message_from_constraint(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("masjids_masjid_id_key") => "masjid id already assigned",
        Some("masjids_pkey") => "masjid already exists",
        _ => "resource already exists",
    }
}

pub(super) fn check_violation_message(constraint: Option<&str>) -> Option<&'static str> {
    match constraint {
        Some("masjids_masjid_name_check") => Some("masjidName is required"),
        Some("masjids_masjid_area_check") => Some("masjidArea is required"),
        Some("masjids_masjid_time_check") => Some("masjidTime is required"),
        Some("masjids_location_check") => Some("location is required"),
        _ => None,
    }
}

pub(super) fn required_field_message_from_db(message: &str) -> Option<String> {
    let marker = "column \"";
    let start = message.find(marker)?;
    let rest = &message[start + marker.len()..];
    let end = rest.find('"')?;
    Some(format!("{} is required", &rest[..end]))
}
