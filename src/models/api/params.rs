use serde::{Deserialize, Serialize};

// Form body of the viewer's analyze trigger
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeParams {
    #[serde(default)]
    pub urls: String,
}

// JSON body sent to the analysis service
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub urls: &'a [String],
}
