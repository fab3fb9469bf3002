/// Milliseconds since the UNIX epoch, or `0` for a clock set before it.
pub fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
