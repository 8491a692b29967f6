//! Norwegian Bokmål say engine: numerals, dates/times and spelled names to
//! audio segment tokens.

mod constants;

pub mod config;
pub mod datetime;
pub mod engine;
pub mod error;
pub mod number;
pub mod spell;
pub mod traits;
pub mod types;

pub use config::SayConfig;
pub use datetime::{CalendarFields, DateFields};
pub use engine::{Renderer, SayEngine, SayEnv, Speaker};
pub use error::SayError;
pub use number::{render_group, render_numeral, DigitGroups, Group, GroupForm};
pub use spell::Alphabet;
pub use traits::{
    Clock, FileStringResolver, NoPlayback, OffsetZoneResolver, PlaybackSink, SegmentResolver,
    SystemClock, ZoneResolver,
};
pub use types::{SayCategory, SayGender, SayMethod, SayRequest, Token, TokenSequence};
