use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::domain::{bulk_masjid_ids, next_masjid_id, Masjid, MasjidChanges, NewMasjid};
use crate::error::AppResult;

use super::traits::MasjidRepository;

// Key for pg_advisory_xact_lock; serializes masjid_id assignment across connections.
const MASJID_ID_LOCK_KEY: i64 = 0x6d61_736a_6964;

// Postgres accepts at most 65535 bind parameters per statement; each row binds 7.
const BULK_INSERT_CHUNK_ROWS: usize = 65535 / 7;

const SELECT_COLUMNS: &str =
    "SELECT id, masjid_id, masjid_name, masjid_area, masjid_time, location, photos FROM masjids";

pub struct MasjidRepositoryImpl {
    pool: PgPool,
}

impl MasjidRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin_id_assignment(&self) -> AppResult<Transaction<'static, Postgres>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(MASJID_ID_LOCK_KEY)
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }
}

#[async_trait]
impl MasjidRepository for MasjidRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Masjid>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY masjid_id ASC");
        let masjids = sqlx::query_as::<_, Masjid>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(masjids)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Masjid>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");
        let masjid = sqlx::query_as::<_, Masjid>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(masjid)
    }

    async fn create(&self, masjid: &NewMasjid) -> AppResult<Masjid> {
        let mut tx = self.begin_id_assignment().await?;

        let current_max =
            sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(masjid_id) FROM masjids")
                .fetch_one(&mut *tx)
                .await?;
        let record = masjid.clone().into_masjid(next_masjid_id(current_max));

        let created = sqlx::query_as::<_, Masjid>(
            r#"
            INSERT INTO masjids (id, masjid_id, masjid_name, masjid_area, masjid_time, location, photos)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, masjid_id, masjid_name, masjid_area, masjid_time, location, photos
            "#,
        )
        .bind(record.id)
        .bind(record.masjid_id)
        .bind(&record.masjid_name)
        .bind(&record.masjid_area)
        .bind(&record.masjid_time)
        .bind(&record.location)
        .bind(&record.photos)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn create_many(&self, masjids: &[NewMasjid]) -> AppResult<Vec<Masjid>> {
        if masjids.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.begin_id_assignment().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM masjids")
            .fetch_one(&mut *tx)
            .await?;
        let records: Vec<Masjid> = masjids
            .iter()
            .cloned()
            .zip(bulk_masjid_ids(existing, masjids.len()))
            .map(|(masjid, masjid_id)| masjid.into_bulk_masjid(masjid_id))
            .collect();

        let mut inserted = 0;
        for chunk in records.chunks(BULK_INSERT_CHUNK_ROWS) {
            let mut builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO masjids (id, masjid_id, masjid_name, masjid_area, masjid_time, location, photos) ",
            );
            builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.id)
                    .push_bind(record.masjid_id)
                    .push_bind(record.masjid_name.clone())
                    .push_bind(record.masjid_area.clone())
                    .push_bind(record.masjid_time.clone())
                    .push_bind(record.location.clone())
                    .push_bind(record.photos.clone());
            });
            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        if inserted != records.len() as u64 {
            return Err(anyhow!(
                "bulk insert wrote {inserted} of {} masjids",
                records.len()
            )
            .into());
        }

        tx.commit().await?;
        Ok(records)
    }

    async fn update(&self, id: Uuid, changes: &MasjidChanges) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE masjids
            SET masjid_name = COALESCE($2, masjid_name),
                masjid_area = COALESCE($3, masjid_area),
                masjid_time = COALESCE($4, masjid_time),
                location = COALESCE($5, location),
                photos = CASE WHEN $6 THEN $7 ELSE photos END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.masjid_name)
        .bind(&changes.masjid_area)
        .bind(&changes.masjid_time)
        .bind(&changes.location)
        .bind(changes.photos.is_some())
        .bind(changes.photos.clone().flatten())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM masjids WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM masjids")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
