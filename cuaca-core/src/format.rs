use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Render an observation timestamp as the Indonesian weekday name plus
/// the 24-hour time, e.g. `"Rabu, 14:30"`.
pub fn format_observation_time(at: NaiveDateTime) -> String {
    format!("{}, {:02}:{:02}", weekday_id(at.weekday()), at.hour(), at.minute())
}

fn weekday_id(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}
