use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{CreateMasjidRequest, MasjidListQuery, MasjidResponse, UpdateMasjidRequest};
use crate::domain::{filter_by_text, rank_by_distance};
use crate::error::{AppError, AppResult, ValidationIssue};
use crate::infrastructure::repositories::MasjidRepository;

pub mod mapper;

#[derive(Clone)]
pub struct MasjidService {
    masjid_repo: Arc<dyn MasjidRepository>,
}

impl MasjidService {
    pub fn new(masjid_repo: Arc<dyn MasjidRepository>) -> Self {
        Self { masjid_repo }
    }

    /// Lists the directory, nearest first when the query carries a position,
    /// narrowed by the optional search text.
    pub async fn list(&self, query: MasjidListQuery) -> AppResult<Vec<MasjidResponse>> {
        let records = self.masjid_repo.find_all().await?;
        let ranked = rank_by_distance(&records, mapper::user_position(&query));
        let visible = filter_by_text(ranked, query.search.as_deref().unwrap_or_default());

        Ok(visible.into_iter().map(MasjidResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<MasjidResponse>> {
        let masjid = self.masjid_repo.find_by_id(id).await?;
        Ok(masjid.map(MasjidResponse::from))
    }

    pub async fn create(&self, request: CreateMasjidRequest) -> AppResult<MasjidResponse> {
        request.validate()?;
        let new_masjid = mapper::map_new_masjid(request)?;

        let created = self.masjid_repo.create(&new_masjid).await?;
        info!(
            action = "masjid.create",
            target = %created.id,
            masjid_id = created.masjid_id
        );
        Ok(MasjidResponse::from(created))
    }

    pub async fn create_many(
        &self,
        requests: Vec<CreateMasjidRequest>,
    ) -> AppResult<Vec<MasjidResponse>> {
        validate_batch(&requests)?;
        let new_masjids = requests
            .into_iter()
            .map(mapper::map_new_masjid)
            .collect::<AppResult<Vec<_>>>()?;

        let created = self.masjid_repo.create_many(&new_masjids).await?;
        info!(action = "masjid.bulk_create", count = created.len());
        Ok(created.into_iter().map(MasjidResponse::from).collect())
    }

    pub async fn update(&self, id: Uuid, request: UpdateMasjidRequest) -> AppResult<()> {
        request.validate()?;
        let changes = mapper::map_changes(request);
        if changes.is_empty() {
            return Ok(());
        }

        let touched = self.masjid_repo.update(id, &changes).await?;
        if touched == 0 {
            warn!(action = "masjid.update", target = %id, "no masjid matched");
        } else {
            info!(action = "masjid.update", target = %id);
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.masjid_repo.delete(id).await?;
        if removed == 0 {
            warn!(action = "masjid.delete", target = %id, "no masjid matched");
        } else {
            info!(action = "masjid.delete", target = %id);
        }
        Ok(())
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.masjid_repo.delete_all().await?;
        info!(action = "masjid.delete_all", count = removed);
        Ok(removed)
    }
}

// Field paths are prefixed with the batch position, e.g. `[2].masjid_name`.
fn validate_batch(requests: &[CreateMasjidRequest]) -> AppResult<()> {
    let mut issues = Vec::new();
    for (index, request) in requests.iter().enumerate() {
        if let Err(errors) = request.validate() {
            if let AppError::ValidationError {
                issues: item_issues,
                ..
            } = AppError::from(errors)
            {
                issues.extend(item_issues.into_iter().map(|issue| ValidationIssue {
                    field: format!("[{index}].{}", issue.field),
                    ..issue
                }));
            }
        }
    }

    if issues.is_empty() {
        return Ok(());
    }

    let message = match issues.as_slice() {
        [issue] => issue.message.clone(),
        _ => "Request validation failed".to_string(),
    };
    Err(AppError::ValidationError { message, issues })
}
