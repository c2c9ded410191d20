pub mod geo;
pub mod masjid;
pub mod ranking;

pub use geo::{extract_coordinates, haversine_km, maps_link, Coordinates, EARTH_RADIUS_KM};
pub use masjid::{bulk_masjid_ids, next_masjid_id, Masjid, MasjidChanges, NewMasjid};
pub use ranking::{filter_by_text, rank_by_distance, RankedMasjid};
