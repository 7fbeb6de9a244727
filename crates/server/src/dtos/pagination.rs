use serde::Deserialize;
use utoipa::IntoParams;

/// `skip`/`limit` query parameters shared by every list endpoint.
///
/// `limit` has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of rows to skip
    #[serde(default)]
    #[param(default = 0)]
    pub skip: u64,

    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    #[param(default = 100)]
    pub limit: u64,
}

pub(crate) fn default_limit() -> u64 {
    100
}
