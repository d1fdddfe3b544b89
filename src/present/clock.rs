use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Formats remote RFC 3339 timestamps in a fixed display offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    offset: UtcOffset,
}

impl Clock {
    pub fn utc() -> Self {
        Self::with_offset(UtcOffset::UTC)
    }

    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Local offset of the process. Must be called before any other thread is
    /// spawned; falls back to UTC when the offset cannot be determined.
    pub fn local() -> Self {
        match UtcOffset::current_local_offset() {
            Ok(offset) => Self::with_offset(offset),
            Err(err) => {
                tracing::debug!(error = %err, "local offset unavailable; using UTC");
                Self::utc()
            }
        }
    }

    /// Unparseable input is returned unchanged.
    pub fn format_timestamp(&self, ts: &str) -> String {
        OffsetDateTime::parse(ts, &Rfc3339)
            .ok()
            .and_then(|dt| {
                dt.to_offset(self.offset)
                    .format(format_description!(
                        "[year]-[month]-[day] [hour]:[minute]:[second]"
                    ))
                    .ok()
            })
            .unwrap_or_else(|| ts.to_string())
    }

    pub fn timezone(&self) -> String {
        let (h, m, _) = self.offset.as_hms();
        let sign = if self.offset.is_negative() { '-' } else { '+' };
        format!("UTC{}{:02}:{:02}", sign, h.unsigned_abs(), m.unsigned_abs())
    }
}
