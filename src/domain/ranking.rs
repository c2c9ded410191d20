use std::cmp::Ordering;

use super::geo::{extract_coordinates, haversine_km, Coordinates};
use super::masjid::Masjid;

/// A masjid annotated with its distance from the user.
///
/// `distance_km` is `None` when there is no user position or the record's
/// `location` carries no usable coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMasjid {
    pub masjid: Masjid,
    pub distance_km: Option<f64>,
}

impl RankedMasjid {
    fn unranked(masjid: Masjid) -> Self {
        Self {
            masjid,
            distance_km: None,
        }
    }

    fn matches_text(&self, needle: &str) -> bool {
        self.masjid.masjid_name.to_lowercase().contains(needle)
            || self.masjid.masjid_area.to_lowercase().contains(needle)
    }
}

/// Orders `records` by ascending distance from `user`.
///
/// Without a position the records come back in their original order. Records
/// whose location cannot be parsed sort after every measured one. The sort is
/// stable, so ties keep their input order. `records` is left untouched.
pub fn rank_by_distance(records: &[Masjid], user: Option<Coordinates>) -> Vec<RankedMasjid> {
    let Some(user) = user else {
        return records.iter().cloned().map(RankedMasjid::unranked).collect();
    };

    let mut ranked: Vec<RankedMasjid> = records
        .iter()
        .map(|masjid| RankedMasjid {
            distance_km: extract_coordinates(&masjid.location)
                .map(|coords| haversine_km(user, coords)),
            masjid: masjid.clone(),
        })
        .collect();

    ranked.sort_by(|left, right| compare_distance(left.distance_km, right.distance_km));
    ranked
}

/// Keeps entries whose name or area contains `search`, ignoring case.
pub fn filter_by_text(ranked: Vec<RankedMasjid>, search: &str) -> Vec<RankedMasjid> {
    if search.is_empty() {
        return ranked;
    }

    let needle = search.to_lowercase();
    ranked
        .into_iter()
        .filter(|entry| entry.matches_text(&needle))
        .collect()
}

// Absent distances compare greater than any measured one.
fn compare_distance(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
