use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::say::{SayCategory, SayError, SayMethod};

pub(crate) const TARGET: &str = "telemetry::say";
pub(crate) const EVENT_RENDER: &str = "say_render";
pub(crate) const EVENT_RENDER_FAILED: &str = "say_render_failed";

#[derive(Debug, Serialize)]
pub struct RenderEvent {
    pub category: &'static str,
    pub method: &'static str,
    pub tokens: usize,
    pub elapsed_us: u64,
}

#[derive(Debug, Serialize)]
pub struct RenderFailureEvent {
    pub category: &'static str,
    pub method: &'static str,
    pub error: &'static str,
    pub message: String,
}

pub fn record_render(category: SayCategory, method: SayMethod, tokens: usize, elapsed: Duration) {
    let event = RenderEvent {
        category: category.as_str(),
        method: method.as_str(),
        tokens,
        elapsed_us: duration_to_us(elapsed),
    };

    match serde_json::to_string(&event) {
        Ok(payload) => info!(
            target: TARGET,
            event = EVENT_RENDER,
            category = event.category,
            method = event.method,
            tokens = event.tokens,
            elapsed_us = event.elapsed_us,
            payload = %payload
        ),
        Err(err) => warn!(
            target: TARGET,
            event = EVENT_RENDER,
            %err,
            "failed to encode say render event"
        ),
    }
}

pub fn record_render_failure(category: SayCategory, method: SayMethod, error: &SayError) {
    let event = RenderFailureEvent {
        category: category.as_str(),
        method: method.as_str(),
        error: error.kind(),
        message: error.to_string(),
    };

    match serde_json::to_string(&event) {
        Ok(payload) => warn!(
            target: TARGET,
            event = EVENT_RENDER_FAILED,
            category = event.category,
            method = event.method,
            error = event.error,
            payload = %payload
        ),
        Err(err) => warn!(
            target: TARGET,
            event = EVENT_RENDER_FAILED,
            %err,
            "failed to encode say failure event"
        ),
    }
}

fn duration_to_us(duration: Duration) -> u64 {
    duration.as_micros().min(u64::MAX as u128) as u64
}
