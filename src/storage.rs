use crate::errors::AppError;
use crate::models::StoredState;
use serde_json::Value;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/zen_accumulator_v1.json"))
}

pub async fn load_state(path: &Path) -> StoredState {
    match fs::read(path).await {
        Ok(bytes) => match decode_state(&bytes) {
            Ok(state) => state,
            Err(err) => {
                error!("failed to parse data file: {err}");
                StoredState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredState::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoredState::default()
        }
    }
}

// Older data files may lack the sessions list, and a hand-edited file may
// carry a bogus total; each field degrades to its default on its own.
pub fn decode_state(bytes: &[u8]) -> Result<StoredState, serde_json::Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    let total_minutes = value
        .get("totalMinutes")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let sessions = value
        .get("sessions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok(StoredState {
        total_minutes,
        sessions,
    })
}

pub async fn persist_state(path: &Path, state: &StoredState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(state).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let bytes = br#"{
            "totalMinutes": 95,
            "sessions": [
                { "id": 1700000000000, "date": "2026-01-05T09:30:00.000Z", "duration": 95 }
            ]
        }"#;
        let state = decode_state(bytes).unwrap();
        assert_eq!(state.total_minutes, 95);
        assert_eq!(state.sessions.len(), 1);
        assert_eq!(state.sessions[0].duration, 95);
    }

    #[test]
    fn missing_sessions_defaults_to_empty() {
        let state = decode_state(br#"{ "totalMinutes": 12 }"#).unwrap();
        assert_eq!(state.total_minutes, 12);
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn non_numeric_total_defaults_to_zero() {
        let state = decode_state(br#"{ "totalMinutes": "lots", "sessions": [] }"#).unwrap();
        assert_eq!(state.total_minutes, 0);
    }

    #[test]
    fn negative_total_defaults_to_zero() {
        let state = decode_state(br#"{ "totalMinutes": -30 }"#).unwrap();
        assert_eq!(state.total_minutes, 0);
    }

    #[test]
    fn malformed_session_entries_are_skipped() {
        let bytes = br#"{
            "totalMinutes": 10,
            "sessions": [
                { "id": 1, "date": "2026-01-05T09:30:00.000Z", "duration": 10 },
                { "id": "nope" },
                42
            ]
        }"#;
        let state = decode_state(bytes).unwrap();
        assert_eq!(state.sessions.len(), 1);
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        assert!(decode_state(b"not json at all").is_err());
    }

    #[test]
    fn stored_state_serializes_camel_case() {
        let state = StoredState {
            total_minutes: 5,
            sessions: Vec::new(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("totalMinutes").is_some());
        assert!(json.get("sessions").is_some());
    }
}
