use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error};

use crate::say::config::SayConfig;
use crate::say::constants::TIMEZONE_VARIABLE;
use crate::say::datetime::{render_fields, target_instant, DateFields};
use crate::say::error::SayError;
use crate::say::number::render_numeral;
use crate::say::spell::{spell, Alphabet};
use crate::say::traits::{
    Clock, OffsetZoneResolver, PlaybackSink, SegmentResolver, SystemClock, ZoneResolver,
};
use crate::say::types::{SayCategory, SayRequest, TokenSequence};
use crate::telemetry::events::{record_render, record_render_failure};

/// Caller-supplied variables, e.g. the channel's `timezone`.
pub type SayEnv = HashMap<String, String>;

/// The renderer a category is handled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Numeral,
    DateTime,
    Spelling,
}

impl Renderer {
    pub fn for_category(category: SayCategory) -> Result<Self, SayError> {
        match category {
            SayCategory::Number | SayCategory::Items | SayCategory::Messages => {
                Ok(Renderer::Numeral)
            }
            SayCategory::CurrentDate
            | SayCategory::CurrentTime
            | SayCategory::CurrentDateTime
            | SayCategory::ShortDateTime => Ok(Renderer::DateTime),
            SayCategory::NameSpelled | SayCategory::NamePhonetic => Ok(Renderer::Spelling),
            other => {
                error!(target: "say_engine", category = other.as_str(), "unknown say type");
                Err(SayError::UnsupportedCategory(other.to_string()))
            }
        }
    }
}

/// Dispatches a request to its renderer. Holds no per-request state, so one
/// engine can serve any number of concurrent callers.
pub struct SayEngine {
    config: SayConfig,
    clock: Arc<dyn Clock>,
    zones: Arc<dyn ZoneResolver>,
}

impl std::fmt::Debug for SayEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SayEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for SayEngine {
    fn default() -> Self {
        Self::new(SayConfig::default())
    }
}

impl SayEngine {
    pub fn new(config: SayConfig) -> Self {
        Self::with_components(
            config,
            Arc::new(SystemClock::default()),
            Arc::new(OffsetZoneResolver::default()),
        )
    }

    pub fn with_components(
        config: SayConfig,
        clock: Arc<dyn Clock>,
        zones: Arc<dyn ZoneResolver>,
    ) -> Self {
        Self {
            config,
            clock,
            zones,
        }
    }

    pub fn config(&self) -> &SayConfig {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    pub fn render(&self, request: &SayRequest) -> Result<TokenSequence, SayError> {
        self.render_with_env(request, &SayEnv::new())
    }

    /// Renders `request` into tokens. Nothing is returned on failure.
    pub fn render_with_env(
        &self,
        request: &SayRequest,
        env: &SayEnv,
    ) -> Result<TokenSequence, SayError> {
        let started = Instant::now();
        let result = Renderer::for_category(request.category).and_then(|renderer| {
            match renderer {
                Renderer::Numeral => {
                    render_numeral(&request.raw_text, request.method, request.gender)
                }
                Renderer::DateTime => self.render_date_time(request, env),
                Renderer::Spelling => Alphabet::for_category(request.category)
                    .map(|alphabet| spell(&request.raw_text, alphabet)),
            }
        });

        match &result {
            Ok(tokens) => record_render(
                request.category,
                request.method,
                tokens.len(),
                started.elapsed(),
            ),
            Err(err) => record_render_failure(request.category, request.method, err),
        }
        result
    }

    fn render_date_time(
        &self,
        request: &SayRequest,
        env: &SayEnv,
    ) -> Result<TokenSequence, SayError> {
        let timezone = self.timezone_for(request, env);
        let now = self.clock.now();
        let target = target_instant(&request.raw_text, now);

        let target_fields = self.zones.resolve(target, timezone);
        let now_fields = self.zones.resolve(now, timezone);

        let fields = DateFields::select(request.category, &target_fields, &now_fields)?;
        debug!(target: "say_datetime", ?fields, "selected date fields");
        render_fields(&fields, &target_fields, request.gender)
    }

    /// Request, then channel variable, then config. Blank values count as unset.
    fn timezone_for<'a>(&'a self, request: &'a SayRequest, env: &'a SayEnv) -> Option<&'a str> {
        let is_set = |zone: &&str| !zone.trim().is_empty();
        request
            .timezone
            .as_deref()
            .filter(is_set)
            .or_else(|| env.get(TIMEZONE_VARIABLE).map(String::as_str).filter(is_set))
            .or_else(|| self.config.default_timezone.as_deref().filter(is_set))
    }
}

/// Renders, resolves and plays: the engine plus its path and playback
/// collaborators.
pub struct Speaker {
    engine: SayEngine,
    resolver: Arc<dyn SegmentResolver>,
    playback: Arc<dyn PlaybackSink>,
}

impl std::fmt::Debug for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speaker")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl Speaker {
    pub fn new(
        engine: SayEngine,
        resolver: Arc<dyn SegmentResolver>,
        playback: Arc<dyn PlaybackSink>,
    ) -> Self {
        Self {
            engine,
            resolver,
            playback,
        }
    }

    pub fn engine(&self) -> &SayEngine {
        &self.engine
    }

    /// Resolved playback path for `request`, without playing it.
    pub fn say_string(&self, request: &SayRequest, env: &SayEnv) -> Result<String, SayError> {
        let tokens = self.engine.render_with_env(request, env)?;
        self.resolver.resolve(&tokens)
    }

    /// Renders `request` and hands the resolved path to playback. Playback is
    /// never attempted when rendering or resolution fails.
    pub async fn say(&self, request: &SayRequest, env: &SayEnv) -> Result<(), SayError> {
        let path = self.say_string(request, env)?;
        debug!(target: "say_engine", %path, "playing");
        self.playback.play(&path).await
    }
}
