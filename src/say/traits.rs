use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Local, Utc};
use tracing::{debug, warn};

use crate::say::config::SayConfig;
use crate::say::datetime::CalendarFields;
use crate::say::error::SayError;
use crate::say::types::TokenSequence;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Converts an instant into calendar fields for the caller's zone.
pub trait ZoneResolver: Send + Sync {
    fn resolve(&self, instant: DateTime<Utc>, timezone: Option<&str>) -> CalendarFields;
}

/// Understands `UTC`/`Z` and numeric offsets in seconds east of UTC, strictly
/// inside one day (`-86399..=86399`). Larger offsets and any other zone name
/// fall back to the local zone.
#[derive(Debug, Default)]
pub struct OffsetZoneResolver;

impl ZoneResolver for OffsetZoneResolver {
    fn resolve(&self, instant: DateTime<Utc>, timezone: Option<&str>) -> CalendarFields {
        let Some(zone) = timezone.map(str::trim).filter(|zone| !zone.is_empty()) else {
            return CalendarFields::from_datetime(&instant.with_timezone(&Local));
        };

        debug!(target: "say_datetime", timezone = zone, "timezone is set");

        if zone.eq_ignore_ascii_case("utc") || zone == "Z" {
            return CalendarFields::from_datetime(&instant);
        }

        if let Ok(seconds) = zone.parse::<i32>() {
            if let Some(offset) = FixedOffset::east_opt(seconds) {
                return CalendarFields::from_datetime(&instant.with_timezone(&offset));
            }
        }

        warn!(
            target: "say_datetime",
            timezone = zone,
            "unable to resolve timezone, using local time"
        );
        CalendarFields::from_datetime(&instant.with_timezone(&Local))
    }
}

/// Turns a token sequence into one playable path.
pub trait SegmentResolver: Send + Sync {
    fn resolve(&self, tokens: &TokenSequence) -> Result<String, SayError>;
}

/// Builds `family/selector[.ext]` segment paths and chains several of them
/// into a `file_string://` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStringResolver {
    sound_prefix: Option<String>,
    extension: Option<String>,
}

impl FileStringResolver {
    pub fn new(sound_prefix: Option<String>, extension: Option<String>) -> Self {
        Self {
            sound_prefix,
            extension,
        }
    }

    pub fn from_config(config: &SayConfig) -> Self {
        Self::new(config.sound_prefix.clone(), config.extension.clone())
    }

    fn segment_path(&self, template: &str, selector: &str) -> String {
        let mut path = match &self.sound_prefix {
            Some(prefix) => format!("{}/{template}/{selector}", prefix.trim_end_matches('/')),
            None => format!("{template}/{selector}"),
        };
        if let Some(ext) = &self.extension {
            path.push('.');
            path.push_str(ext.trim_start_matches('.'));
        }
        path
    }
}

impl SegmentResolver for FileStringResolver {
    fn resolve(&self, tokens: &TokenSequence) -> Result<String, SayError> {
        let segments: Vec<String> = tokens
            .iter()
            .map(|token| self.segment_path(&token.template, &token.selector))
            .collect();

        match segments.as_slice() {
            [] => Err(SayError::NothingToSay),
            [single] => Ok(single.clone()),
            _ => Ok(format!("file_string://{}", segments.join("!"))),
        }
    }
}

#[async_trait]
pub trait PlaybackSink: Send + Sync {
    async fn play(&self, path: &str) -> Result<(), SayError>;
}

/// Accepts every path without playing it, for callers that only want
/// `say_string`.
#[derive(Debug, Default)]
pub struct NoPlayback;

#[async_trait]
impl PlaybackSink for NoPlayback {
    async fn play(&self, path: &str) -> Result<(), SayError> {
        debug!(target: "say_engine", path, "no playback attached");
        Ok(())
    }
}
