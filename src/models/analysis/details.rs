use crate::models::analysis::de::null_as_default;
use serde::{Deserialize, Serialize};

// pub struct for the performance breakdown of one site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub latency_ms: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub latency_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub compression: String,
    pub cache_control: Option<String>, // absent when the header was not sent
    #[serde(deserialize_with = "null_as_default")]
    pub content_length_kb: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub broken_links: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_links: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_score: f64,
}

impl PerformanceDetails {
    /// The header value, treating an empty string the same as a missing one.
    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

// pub struct for the security header checks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub https: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hsts: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub csp: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub x_content_type_options: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub x_frame_options: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub referrer_policy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_score: f64,
}

// pub struct for the SEO checks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub has_page_title: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_meta_description: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_meta_tags: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_heading_structure: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub mobile_friendly: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_canonical_tag: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_robots_txt: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_sitemap_xml: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub image_alt_text_percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub overall_score: f64,
}
