pub mod common;
pub mod masjid_dto;

pub use common::*;
pub use masjid_dto::*;
