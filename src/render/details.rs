//! Typed templates for the sections of a detail panel.
//!
//! Each template destructures its struct without `..`, so adding a field to a
//! detail type fails to compile until the field is rendered here.

use crate::models::analysis::{PerformanceDetails, RawAnalysisResult, SecurityDetails, SeoDetails};
use crate::models::view::{DetailItem, DetailSection};

pub const NOT_SET: &str = "Not set";

pub trait DetailTemplate {
    const TITLE: &'static str;

    fn items(&self) -> Vec<DetailItem>;
}

/// Renders one section; a category the service left out becomes a single
/// "missing" item instead of aborting the row.
pub fn section<T: DetailTemplate>(details: Option<&T>) -> DetailSection {
    let items = match details {
        Some(details) => details.items(),
        None => vec![DetailItem::missing("Details")],
    };
    DetailSection {
        title: T::TITLE,
        items,
    }
}

/// The pass-through descriptive fields of a record.
pub struct BackendInfo<'a> {
    pub backend: &'a str,
    pub protocols: &'a str,
    pub response_time: &'a str,
}

impl<'a> BackendInfo<'a> {
    pub fn of(result: &'a RawAnalysisResult) -> Self {
        BackendInfo {
            backend: &result.backend,
            protocols: &result.protocols,
            response_time: &result.response_time,
        }
    }
}

impl DetailTemplate for BackendInfo<'_> {
    const TITLE: &'static str = "Backend & Protocol";

    fn items(&self) -> Vec<DetailItem> {
        let BackendInfo {
            backend,
            protocols,
            response_time,
        } = self;
        vec![
            DetailItem::text("Backend", *backend),
            DetailItem::text("Protocols", *protocols),
            DetailItem::text("Response Time", *response_time),
        ]
    }
}

impl DetailTemplate for PerformanceDetails {
    const TITLE: &'static str = "Performance Details";

    fn items(&self) -> Vec<DetailItem> {
        let PerformanceDetails {
            latency_ms,
            latency_score,
            compression,
            cache_control: _,
            content_length_kb,
            broken_links,
            total_links,
            overall_score,
        } = self;
        vec![
            DetailItem::text(
                "Latency",
                format!("{:.0} ms (Score: {})", latency_ms.round(), latency_score),
            ),
            DetailItem::text("Compression", compression.as_str()),
            DetailItem::text("Cache-Control", self.cache_control().unwrap_or(NOT_SET)),
            DetailItem::text("Content Size", format!("{} KB", content_length_kb)),
            DetailItem::text("Broken Links", format!("{} / {}", broken_links, total_links)),
            DetailItem::text("Overall Score", overall_score.to_string()),
        ]
    }
}

impl DetailTemplate for SecurityDetails {
    const TITLE: &'static str = "Security Headers";

    fn items(&self) -> Vec<DetailItem> {
        let SecurityDetails {
            https,
            hsts,
            csp,
            x_content_type_options,
            x_frame_options,
            referrer_policy,
            overall_score,
        } = self;
        vec![
            DetailItem::flag("HTTPS", *https),
            DetailItem::flag("HSTS", *hsts),
            DetailItem::flag("CSP", *csp),
            DetailItem::flag("X-Content-Type-Options", *x_content_type_options),
            DetailItem::flag("X-Frame-Options", *x_frame_options),
            DetailItem::flag("Referrer-Policy", *referrer_policy),
            DetailItem::text("Overall Score", overall_score.to_string()),
        ]
    }
}

impl DetailTemplate for SeoDetails {
    const TITLE: &'static str = "SEO Details";

    fn items(&self) -> Vec<DetailItem> {
        let SeoDetails {
            has_page_title,
            has_meta_description,
            has_meta_tags,
            has_heading_structure,
            mobile_friendly,
            has_canonical_tag,
            has_robots_txt,
            has_sitemap_xml,
            image_alt_text_percentage,
            overall_score,
        } = self;
        vec![
            DetailItem::flag("Page Title", *has_page_title),
            DetailItem::flag("Meta Description", *has_meta_description),
            DetailItem::flag("Meta Tags", *has_meta_tags),
            DetailItem::flag("Heading Structure", *has_heading_structure),
            DetailItem::flag("Mobile-Friendly", *mobile_friendly),
            DetailItem::flag("Canonical Tag", *has_canonical_tag),
            DetailItem::flag("Robots.txt", *has_robots_txt),
            DetailItem::flag("Sitemap.xml", *has_sitemap_xml),
            DetailItem::text("Image Alt Text", format!("{}%", image_alt_text_percentage)),
            DetailItem::text("Overall Score", overall_score.to_string()),
        ]
    }
}
