use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted directory entry.
///
/// `id` is the storage identifier used by the `{id}` routes, `masjid_id` is the
/// sequential number shown to people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Masjid {
    pub id: Uuid,
    pub masjid_id: i64,
    pub masjid_name: String,
    pub masjid_area: String,
    pub masjid_time: String,
    pub location: String,
    pub photos: Option<String>,
}

/// Fields of a masjid that is about to be inserted; its `masjid_id` is assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMasjid {
    /// Caller-chosen number. Only bulk insertion honours it, in place of the computed one.
    pub requested_masjid_id: Option<i64>,
    pub masjid_name: String,
    pub masjid_area: String,
    pub masjid_time: String,
    pub location: String,
    pub photos: Option<String>,
}

impl NewMasjid {
    pub fn into_masjid(self, masjid_id: i64) -> Masjid {
        Masjid {
            id: Uuid::new_v4(),
            masjid_id,
            masjid_name: self.masjid_name,
            masjid_area: self.masjid_area,
            masjid_time: self.masjid_time,
            location: self.location,
            photos: self.photos,
        }
    }

    /// Like [`NewMasjid::into_masjid`], but a requested number wins over `computed_id`.
    pub fn into_bulk_masjid(self, computed_id: i64) -> Masjid {
        let masjid_id = self.requested_masjid_id.unwrap_or(computed_id);
        self.into_masjid(masjid_id)
    }
}

/// Partial update. `None` leaves the stored value untouched; `photos: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasjidChanges {
    pub masjid_name: Option<String>,
    pub masjid_area: Option<String>,
    pub masjid_time: Option<String>,
    pub location: Option<String>,
    pub photos: Option<Option<String>>,
}

impl MasjidChanges {
    pub fn is_empty(&self) -> bool {
        self.masjid_name.is_none()
            && self.masjid_area.is_none()
            && self.masjid_time.is_none()
            && self.location.is_none()
            && self.photos.is_none()
    }

    pub fn apply_to(&self, masjid: &mut Masjid) {
        if let Some(name) = &self.masjid_name {
            masjid.masjid_name.clone_from(name);
        }
        if let Some(area) = &self.masjid_area {
            masjid.masjid_area.clone_from(area);
        }
        if let Some(time) = &self.masjid_time {
            masjid.masjid_time.clone_from(time);
        }
        if let Some(location) = &self.location {
            masjid.location.clone_from(location);
        }
        if let Some(photos) = &self.photos {
            masjid.photos.clone_from(photos);
        }
    }
}

/// Sequence number for a single insert: one past the current maximum, or 1 for an empty directory.
pub fn next_masjid_id(current_max: Option<i64>) -> i64 {
    current_max.map_or(1, |max| max.saturating_add(1))
}

/// Sequence numbers for a bulk insert, counted from the number of existing rows
/// and following the position in the batch.
pub fn bulk_masjid_ids(existing_count: i64, batch_len: usize) -> impl Iterator<Item = i64> {
    (1..=batch_len as i64).map(move |offset| existing_count.saturating_add(offset))
}
