use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub mod forms;
pub mod health;
pub mod leads;
pub mod reference;
pub mod submissions;

#[derive(Clone, Deserialize, Serialize, Debug, IntoParams)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
