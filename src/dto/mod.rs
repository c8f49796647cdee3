use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Game request and response bodies.
pub mod game;
/// Health probe payload.
pub mod health;

fn format_timestamp(time: OffsetDateTime) -> String {
    time.format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
