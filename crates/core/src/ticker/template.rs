//! Alert template token substitution.
//!
//! Recognized tokens, applied in this fixed order: `$$DAY$$`, `$$MONTH$$`,
//! `$$DATE$$`, `$$YEAR$$`, `$$TIME$$`. Each is optional; text without tokens
//! passes through verbatim.

use chrono::{Datelike, NaiveDateTime};

/// The live-clock token.
pub const TIME_TOKEN: &str = "$$TIME$$";

/// True when the template contains the time token in any letter case.
///
/// Detection is case-insensitive while substitution matches the exact token,
/// so `$$time$$` puts the ticker in live-clock mode but stays literal text.
pub fn has_time_token(template: &str) -> bool {
    template.to_ascii_uppercase().contains(TIME_TOKEN)
}

/// Substitute all recognized tokens with values taken from `now`.
pub fn render(template: &str, now: NaiveDateTime) -> String {
    let text = template.replace("$$DAY$$", &now.format("%A").to_string());
    let text = text.replace("$$MONTH$$", &now.format("%B").to_string());
    let text = text.replace("$$DATE$$", &now.day().to_string());
    let text = text.replace("$$YEAR$$", &now.year().to_string());
    text.replace(TIME_TOKEN, &format_time(now))
}

/// 12-hour `hh:mm:ss AM/PM` clock string.
fn format_time(now: NaiveDateTime) -> String {
    now.format("%I:%M:%S %p").to_string()
}
