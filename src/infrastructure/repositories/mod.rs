mod masjid_repository;
mod traits;

pub use masjid_repository::MasjidRepositoryImpl;
pub use traits::MasjidRepository;
