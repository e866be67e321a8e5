use crate::models::analysis::details::{PerformanceDetails, SecurityDetails, SeoDetails};
use crate::models::analysis::de::null_as_default;
use serde::{Deserialize, Serialize};

/// One record of the analysis service's response.
///
/// Every field defaults when missing or `null` so a sparse record still renders
/// (with empty parts) instead of failing the whole batch. Any `total` the
/// service sends is ignored; it is recomputed on our side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnalysisResult {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub performance: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub security: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub seo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub backend: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protocols: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response_time: String,
    pub performance_details: Option<PerformanceDetails>,
    pub security_details: Option<SecurityDetails>,
    pub seo_details: Option<SeoDetails>,
}
