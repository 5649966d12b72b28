//! pt-BR labels for agenda cards.
//!
//! Times are shown in the offset the document wrote them with, so a visitor
//! in another timezone still sees the local time of the event.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::Event;

const WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLabels {
    /// e.g. `terça-feira, 21 de outubro`
    pub date: String,
    /// e.g. `19:00 – 21:00`; empty when the start is unreadable.
    pub time: String,
    pub mode: &'static str,
}

pub fn event_labels(event: &Event) -> EventLabels {
    let mode = if event.is_online() { "Online" } else { "Presencial" };
    let Some(start) = parse_event_time(&event.date) else {
        return EventLabels {
            date: event.date.clone(),
            time: String::new(),
            mode,
        };
    };

    let mut time = clock_label(start);
    if let Some(end) = event.end.as_deref().and_then(parse_event_time) {
        time.push_str(" – ");
        time.push_str(&clock_label(end));
    }

    EventLabels {
        date: long_date_label(start),
        time,
        mode,
    }
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS]`, or a bare date.
pub fn parse_event_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn long_date_label(dt: NaiveDateTime) -> String {
    format!(
        "{}, {:02} de {}",
        weekday_name(dt.weekday()),
        dt.day(),
        MONTHS[dt.month0() as usize]
    )
}

pub fn clock_label(dt: NaiveDateTime) -> String {
    format!("{:02}:{:02}", dt.hour(), dt.minute())
}

fn weekday_name(w: Weekday) -> &'static str {
    WEEKDAYS[w.num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(date: &str, end: Option<&str>, mode: Option<&str>) -> Event {
        Event {
            title: "Oficina de compostagem".into(),
            date: date.into(),
            end: end.map(str::to_string),
            mode: mode.map(str::to_string),
            summary: None,
            location: None,
            cta: None,
        }
    }

    #[test]
    fn labels_with_offset_and_end() {
        let labels = event_labels(&event(
            "2025-10-21T19:00:00-03:00",
            Some("2025-10-21T21:30:00-03:00"),
            Some("online"),
        ));
        assert_eq!(
            labels,
            EventLabels {
                date: "terça-feira, 21 de outubro".into(),
                time: "19:00 – 21:30".into(),
                mode: "Online",
            }
        );
    }

    #[test]
    fn naive_start_without_end_is_presencial() {
        let labels = event_labels(&event("2025-03-05T08:15", None, None));
        assert_eq!(labels.date, "quarta-feira, 05 de março");
        assert_eq!(labels.time, "08:15");
        assert_eq!(labels.mode, "Presencial");
    }

    #[test]
    fn unreadable_date_keeps_raw_text() {
        let labels = event_labels(&event("em breve", None, Some("presencial")));
        assert_eq!(labels.date, "em breve");
        assert!(labels.time.is_empty());
    }
}
