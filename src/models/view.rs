use serde::Serialize;
use std::fmt;

/// Stable key of a ranked row and its detail panel, derived from the row's
/// 0-based position in the ranked sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowId(pub usize);

impl RowId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "details-{}", self.0)
    }
}

// Label of the row's toggle control: the next action available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleLabel {
    Show,
    Hide,
}

impl fmt::Display for ToggleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToggleLabel::Show => "Show",
            ToggleLabel::Hide => "Hide",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailValue {
    Flag(bool),
    Text(String),
    /// The service omitted this part of the record.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: DetailValue,
}

impl DetailItem {
    pub fn flag(label: &'static str, present: bool) -> Self {
        DetailItem {
            label,
            value: DetailValue::Flag(present),
        }
    }

    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        DetailItem {
            label,
            value: DetailValue::Text(value.into()),
        }
    }

    pub fn missing(label: &'static str) -> Self {
        DetailItem {
            label,
            value: DetailValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub items: Vec<DetailItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub id: RowId,
    pub hidden: bool,
    pub sections: Vec<DetailSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub id: RowId,
    pub rank: usize,
    pub url: String,
    pub performance: i64,
    pub security: i64,
    pub seo: i64,
    pub total: i64,
    pub toggle_label: ToggleLabel,
    pub detail: DetailPanel,
}

/// Everything the results table shows for one run, best site first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    pub rows: Vec<SummaryRow>,
}

impl ViewModel {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
