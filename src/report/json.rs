use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    tool_version: &'static str,
    generated_at: String,
    report: &'a T,
}

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope {
        tool_version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        report,
    })
}
