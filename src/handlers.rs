use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Local;

use crate::logic::parse_var;
use crate::models::IngestQuery;
use crate::state::AppState;

/// Fixed acknowledgement body. The sensor firmware ignores the response, so
/// every outcome acks identically.
pub const ACK: &str = "Data received";

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

pub async fn ingest(
    State(state): State<AppState>,
    Query(query): Query<IngestQuery>,
) -> &'static str {
    let var = match query.var.as_deref() {
        Some(var) if !var.is_empty() => var,
        _ => return ACK,
    };

    tracing::info!(var, "reading received");

    let reading = match parse_var(var) {
        Ok(reading) => reading,
        Err(err) => {
            tracing::warn!(var, reason = err.as_str(), "malformed reading dropped");
            return ACK;
        }
    };

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    match state.log.append(&timestamp, &reading.light, &reading.motion) {
        Ok(()) => {
            tracing::info!(
                %timestamp,
                light = %reading.light,
                motion = %reading.motion,
                "reading logged"
            );
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                path = %state.log.path().display(),
                "append to log file failed"
            );
        }
    }

    ACK
}

#[cfg(test)]
mod tests {
    use super::{ingest, ACK};
    use crate::logfile::{LogFile, HEADER};
    use crate::models::IngestQuery;
    use crate::state::AppState;
    use axum::extract::{Query, State};
    use std::fs;

    fn fixture() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = LogFile::new(dir.path().join("data_log.csv"));
        log.ensure_header().expect("ensure");
        (dir, AppState::new(log))
    }

    fn row_count(state: &AppState) -> usize {
        fs::read_to_string(state.log.path())
            .expect("read")
            .lines()
            .count()
    }

    #[tokio::test]
    async fn well_formed_reading_appends_one_row() {
        let (_dir, state) = fixture();
        let query = IngestQuery {
            var: Some("light:250-motion:1".to_string()),
        };

        let body = ingest(State(state.clone()), Query(query)).await;

        assert_eq!(body, ACK);
        let contents = fs::read_to_string(state.log.path()).expect("read");
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER);
        let fields: Vec<&str> = rows[1].splitn(3, ',').collect();
        assert_eq!(fields[1], "250");
        assert_eq!(fields[2], "1");
        // Timestamp shape: "YYYY-MM-DD HH:MM:SS".
        assert_eq!(fields[0].len(), 19);
        assert_eq!(&fields[0][4..5], "-");
        assert_eq!(&fields[0][10..11], " ");
    }

    #[tokio::test]
    async fn missing_parameter_writes_nothing() {
        let (_dir, state) = fixture();
        let body = ingest(State(state.clone()), Query(IngestQuery { var: None })).await;

        assert_eq!(body, ACK);
        assert_eq!(row_count(&state), 1);
    }

    #[tokio::test]
    async fn empty_parameter_writes_nothing() {
        let (_dir, state) = fixture();
        let query = IngestQuery {
            var: Some(String::new()),
        };
        let body = ingest(State(state.clone()), Query(query)).await;

        assert_eq!(body, ACK);
        assert_eq!(row_count(&state), 1);
    }

    #[tokio::test]
    async fn malformed_parameter_still_acks() {
        let (_dir, state) = fixture();

        for bad in ["garbage", "light250-motion:1"] {
            let query = IngestQuery {
                var: Some(bad.to_string()),
            };
            let body = ingest(State(state.clone()), Query(query)).await;
            assert_eq!(body, ACK);
        }

        // No partial rows for either failure mode.
        assert_eq!(row_count(&state), 1);
    }

    #[tokio::test]
    async fn sequential_requests_append_in_order() {
        let (_dir, state) = fixture();

        for n in 0..4 {
            let query = IngestQuery {
                var: Some(format!("light:{n}-motion:1")),
            };
            ingest(State(state.clone()), Query(query)).await;
        }

        let contents = fs::read_to_string(state.log.path()).expect("read");
        let lights: Vec<&str> = contents
            .lines()
            .skip(1)
            .map(|row| row.split(',').nth(1).expect("light field"))
            .collect();
        assert_eq!(lights, ["0", "1", "2", "3"]);
    }
}
