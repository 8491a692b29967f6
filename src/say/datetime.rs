//! Date and time field selection.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use tracing::debug;

use crate::say::constants::{RECENT_DAYS, TODAY, YESTERDAY};
use crate::say::error::SayError;
use crate::say::number::render_numeral;
use crate::say::types::{SayCategory, SayGender, SayMethod, Token, TokenSequence};

/// Calendar fields of an instant, already converted to the caller's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    /// 0 = January.
    pub month: u32,
    /// 1-based day of the month.
    pub day: u32,
    /// 0 = Sunday.
    pub weekday: u32,
    /// 0-based day of the year.
    pub day_of_year: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarFields {
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self {
            year: value.year(),
            month: value.month0(),
            day: value.day(),
            weekday: value.weekday().num_days_from_sunday(),
            day_of_year: value.ordinal0(),
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

/// Which parts of a date/time get spoken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFields {
    pub date: bool,
    pub time: bool,
    pub year: bool,
    pub month: bool,
    pub dow: bool,
    pub day: bool,
    pub yesterday: bool,
    pub today: bool,
}

impl DateFields {
    /// Decides the spoken fields for `category`, comparing `target` with `now`
    /// for short date/times.
    pub fn select(
        category: SayCategory,
        target: &CalendarFields,
        now: &CalendarFields,
    ) -> Result<Self, SayError> {
        let mut fields = DateFields::default();
        match category {
            SayCategory::CurrentDateTime => {
                fields.date = true;
                fields.time = true;
            }
            SayCategory::CurrentDate => fields.date = true,
            SayCategory::CurrentTime => fields.time = true,
            SayCategory::ShortDateTime => {
                fields.time = true;
                fields.refine_short(target, now);
            }
            other => return Err(SayError::UnsupportedCategory(other.to_string())),
        }
        Ok(fields.normalized())
    }

    /// First match wins. Day-of-year arithmetic does not wrap across years.
    fn refine_short(&mut self, target: &CalendarFields, now: &CalendarFields) {
        let target_day = i64::from(target.day_of_year);
        let now_day = i64::from(now.day_of_year);

        if target.year != now.year {
            self.date = true;
        } else if target_day == now_day {
            self.today = true;
        } else if target_day == now_day - 1 {
            self.yesterday = true;
        } else if target_day >= now_day - i64::from(RECENT_DAYS) {
            self.dow = true;
        } else {
            self.dow = true;
            self.day = true;
            self.month = true;
        }
    }

    /// A full date supersedes the relative-day shortcuts.
    fn normalized(mut self) -> Self {
        if self.date {
            self.year = true;
            self.month = true;
            self.day = true;
            self.dow = true;
            self.today = false;
            self.yesterday = false;
        }
        self
    }
}

/// Emits the selected fields of `target` in speaking order.
pub fn render_fields(
    fields: &DateFields,
    target: &CalendarFields,
    gender: SayGender,
) -> Result<TokenSequence, SayError> {
    let mut out = TokenSequence::new();

    if fields.today {
        out.push(Token::time(TODAY));
    }
    if fields.yesterday {
        out.push(Token::time(YESTERDAY));
    }
    if fields.dow {
        out.push(Token::time(format!("day-{}", target.weekday)));
    }
    if fields.day {
        out.append(render_numeral(
            &target.day.to_string(),
            SayMethod::Counted,
            gender,
        )?);
    }
    if fields.month {
        out.push(Token::time(format!("mon-{}", target.month)));
    }
    if fields.year {
        out.append(render_numeral(
            &target.year.to_string(),
            SayMethod::PronouncedYear,
            gender,
        )?);
    }

    // 24-hour clock; single digits are read with a leading "null"
    if fields.time {
        render_clock_part(&mut out, target.hour, gender)?;
        render_clock_part(&mut out, target.minute, gender)?;
    }

    Ok(out)
}

fn render_clock_part(
    out: &mut TokenSequence,
    value: u32,
    gender: SayGender,
) -> Result<(), SayError> {
    match value {
        0 => {}
        1..=9 => {
            out.push(Token::digits("0"));
            out.append(render_numeral(&value.to_string(), SayMethod::Cardinal, gender)?);
        }
        _ => out.append(render_numeral(&value.to_string(), SayMethod::Cardinal, gender)?),
    }
    Ok(())
}

/// The instant a date/time request talks about: a positive Unix timestamp in
/// seconds, or `now` for anything else.
pub fn target_instant(raw: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let parsed = raw
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|seconds| *seconds > 0)
        .and_then(|seconds| Utc.timestamp_opt(seconds, 0).single());

    match parsed {
        Some(target) => target,
        None => {
            debug!(target: "say_datetime", raw, "no timestamp given, using now");
            now
        }
    }
}
