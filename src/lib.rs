//! Norwegian Bokmål "say" library
//!
//! Turns numerals, dates/times and names into ordered audio segment tokens
//! that a playback layer resolves and plays back-to-back.

pub mod say;
pub mod telemetry;

pub use say::{
    SayCategory, SayConfig, SayEngine, SayError, SayGender, SayMethod, SayRequest, Speaker, Token,
    TokenSequence,
};
