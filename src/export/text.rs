//! Plain-text transcript

use crate::types::Message;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Clock time as shown next to each message.
pub fn format_time<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%-I:%M:%S %p").to_string()
}

/// `[time] ROLE:` header for one message.
pub fn message_header<Tz>(message: &Message, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "[{}] {}:",
        format_time(&message.timestamp, tz),
        message.role.transcript_label()
    )
}

/// Render messages as clipboard text, one block per message separated by a blank line.
pub fn render_plain_text<Tz>(messages: &[Message], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    messages
        .iter()
        .map(|m| format!("{}\n{}\n", message_header(m, tz), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}
