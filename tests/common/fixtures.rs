use masjid_directory::api::dtos::CreateMasjidRequest;
use masjid_directory::domain::Masjid;
use uuid::Uuid;

pub fn masjid(masjid_id: i64, name: &str, area: &str, location: &str) -> Masjid {
    Masjid {
        id: Uuid::new_v4(),
        masjid_id,
        masjid_name: name.to_string(),
        masjid_area: area.to_string(),
        masjid_time: "1:30 PM".to_string(),
        location: location.to_string(),
        photos: None,
    }
}

/// Charminar sits on the user position used by the listing tests, Makkah
/// Masjid is about a kilometre away, Vizag is hundreds of kilometres out and
/// Old City Jama has no usable link.
pub fn hyderabad_directory() -> Vec<Masjid> {
    vec![
        masjid(
            1,
            "Vizag Jama Masjid",
            "Visakhapatnam",
            "https://maps.google.com/?q=17.686815,83.218483",
        ),
        masjid(2, "Old City Jama", "Old City", "Near the clock tower"),
        masjid(
            3,
            "Makkah Masjid",
            "Charminar",
            "https://maps.google.com/?q=17.360600,78.473500",
        ),
        masjid(
            4,
            "Charminar Masjid",
            "Charminar",
            "https://www.google.com/maps?q=17.361600,78.474700",
        ),
    ]
}

pub const USER_LAT: f64 = 17.3616;
pub const USER_LNG: f64 = 78.4747;

pub fn create_request(name: &str) -> CreateMasjidRequest {
    CreateMasjidRequest {
        masjid_id: None,
        masjid_name: name.to_string(),
        masjid_area: "Tolichowki".to_string(),
        masjid_time: "1:15 PM".to_string(),
        location: Some("https://maps.google.com/?q=17.400000,78.420000".to_string()),
        lat: None,
        lng: None,
        photos: None,
    }
}
