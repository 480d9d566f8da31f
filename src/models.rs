use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub date: String,
    pub duration: i64,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    pub total_minutes: u64,
    pub sessions: Vec<SessionRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RippleToken {
    pub id: u64,
    pub color_a: String,
    pub color_b: String,
}

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_minutes: u64,
    pub major: String,
    pub label: String,
    pub undo_available: bool,
    pub last_delta: i64,
    pub reset_pending: bool,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub applied_delta: i64,
    pub ripple: Option<RippleToken>,
    pub summary: SummaryResponse,
}

#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionRecord>,
}

#[derive(Debug, Serialize)]
pub struct RipplesResponse {
    pub ripples: Vec<RippleToken>,
}
