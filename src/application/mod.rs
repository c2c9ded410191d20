mod masjid;

pub use masjid::mapper::{map_changes, map_new_masjid, resolve_location, user_position};
pub use masjid::MasjidService;
