use crate::domain::{Masjid, MasjidChanges, NewMasjid};
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait MasjidRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Masjid>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Masjid>>;

    /// Inserts one record with `masjid_id = max + 1`, reading the maximum and
    /// writing the row without another insert in between.
    async fn create(&self, masjid: &NewMasjid) -> AppResult<Masjid>;

    /// Inserts a batch with `masjid_id = count + position + 1`, all or nothing.
    async fn create_many(&self, masjids: &[NewMasjid]) -> AppResult<Vec<Masjid>>;

    /// Returns the number of rows touched, zero when `id` does not exist.
    async fn update(&self, id: Uuid, changes: &MasjidChanges) -> AppResult<u64>;
    async fn delete(&self, id: Uuid) -> AppResult<u64>;
    async fn delete_all(&self) -> AppResult<u64>;
}
