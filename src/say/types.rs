use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::say::constants::{FAMILY_ALPHABET, FAMILY_DIGITS, FAMILY_PHONETIC, FAMILY_TIME};
use crate::say::error::SayError;

/// Kind of value the host asks to have spoken.
///
/// Mirrors the host's full list of say types; only a subset has a Bokmål
/// renderer and the rest are rejected by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SayCategory {
    Number,
    Items,
    Persons,
    Messages,
    Currency,
    TimeMeasurement,
    CurrentDate,
    CurrentTime,
    CurrentDateTime,
    TelephoneNumber,
    TelephoneExtension,
    Url,
    IpAddress,
    EmailAddress,
    PostalAddress,
    AccountNumber,
    NameSpelled,
    NamePhonetic,
    ShortDateTime,
}

impl SayCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SayCategory::Number => "number",
            SayCategory::Items => "items",
            SayCategory::Persons => "persons",
            SayCategory::Messages => "messages",
            SayCategory::Currency => "currency",
            SayCategory::TimeMeasurement => "time_measurement",
            SayCategory::CurrentDate => "current_date",
            SayCategory::CurrentTime => "current_time",
            SayCategory::CurrentDateTime => "current_date_time",
            SayCategory::TelephoneNumber => "telephone_number",
            SayCategory::TelephoneExtension => "telephone_extension",
            SayCategory::Url => "url",
            SayCategory::IpAddress => "ip_address",
            SayCategory::EmailAddress => "email_address",
            SayCategory::PostalAddress => "postal_address",
            SayCategory::AccountNumber => "account_number",
            SayCategory::NameSpelled => "name_spelled",
            SayCategory::NamePhonetic => "name_phonetic",
            SayCategory::ShortDateTime => "short_date_time",
        }
    }
}

impl fmt::Display for SayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SayCategory {
    type Err = SayError;

    /// Accepts the host's upper-case names (`CURRENT_DATE_TIME`) as well as
    /// the snake case form used in serialized requests.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let category = match value.trim().to_ascii_lowercase().as_str() {
            "number" => SayCategory::Number,
            "items" => SayCategory::Items,
            "persons" => SayCategory::Persons,
            "messages" => SayCategory::Messages,
            "currency" => SayCategory::Currency,
            "time_measurement" => SayCategory::TimeMeasurement,
            "current_date" => SayCategory::CurrentDate,
            "current_time" => SayCategory::CurrentTime,
            "current_date_time" => SayCategory::CurrentDateTime,
            "telephone_number" => SayCategory::TelephoneNumber,
            "telephone_extension" => SayCategory::TelephoneExtension,
            "url" => SayCategory::Url,
            "ip_address" => SayCategory::IpAddress,
            "email_address" => SayCategory::EmailAddress,
            "postal_address" => SayCategory::PostalAddress,
            "account_number" => SayCategory::AccountNumber,
            "name_spelled" => SayCategory::NameSpelled,
            "name_phonetic" => SayCategory::NamePhonetic,
            "short_date_time" => SayCategory::ShortDateTime,
            _ => return Err(SayError::UnsupportedCategory(value.to_string())),
        };
        Ok(category)
    }
}

impl TryFrom<String> for SayCategory {
    type Error = SayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SayCategory> for String {
    fn from(category: SayCategory) -> Self {
        category.as_str().to_string()
    }
}

/// Grammatical rendering of a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SayMethod {
    /// Plain cardinal reading ("pronounced" on the host side).
    #[default]
    Cardinal,
    /// Ordinal / counting form.
    Counted,
    /// A year looked up as a single idiomatic segment.
    PronouncedYear,
    /// Digit by digit.
    Iterated,
}

impl SayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SayMethod::Cardinal => "cardinal",
            SayMethod::Counted => "counted",
            SayMethod::PronouncedYear => "pronounced_year",
            SayMethod::Iterated => "iterated",
        }
    }
}

impl fmt::Display for SayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SayMethod {
    type Err = SayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cardinal" | "pronounced" => Ok(SayMethod::Cardinal),
            "counted" => Ok(SayMethod::Counted),
            "pronounced_year" => Ok(SayMethod::PronouncedYear),
            "iterated" => Ok(SayMethod::Iterated),
            _ => Err(SayError::unknown_argument("method", value)),
        }
    }
}

impl TryFrom<String> for SayMethod {
    type Error = SayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SayMethod> for String {
    fn from(method: SayMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Gender of the counted noun. Only the word for "one" inflects:
/// common gender takes "en", neuter takes "ett".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SayGender {
    /// "utrum" on the host side.
    Common,
    /// "neutrum" on the host side.
    #[default]
    Neuter,
}

impl SayGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            SayGender::Common => "common",
            SayGender::Neuter => "neuter",
        }
    }
}

impl FromStr for SayGender {
    type Err = SayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "common" | "utrum" => Ok(SayGender::Common),
            "neuter" | "neutrum" => Ok(SayGender::Neuter),
            _ => Err(SayError::unknown_argument("gender", value)),
        }
    }
}

impl TryFrom<String> for SayGender {
    type Error = SayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SayGender> for String {
    fn from(gender: SayGender) -> Self {
        gender.as_str().to_string()
    }
}

/// One rendering call's input. Immutable while it is being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SayRequest {
    pub category: SayCategory,
    #[serde(default)]
    pub method: SayMethod,
    #[serde(default)]
    pub gender: SayGender,
    pub raw_text: String,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl SayRequest {
    pub fn new<S: Into<String>>(category: SayCategory, raw_text: S) -> Self {
        Self {
            category,
            method: SayMethod::default(),
            gender: SayGender::default(),
            raw_text: raw_text.into(),
            timezone: None,
        }
    }

    pub fn with_method(mut self, method: SayMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_gender(mut self, gender: SayGender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_timezone<S: Into<String>>(mut self, timezone: S) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Parses one host request. Category, method and gender go through their
    /// `FromStr` impls, so their errors reach the caller unchanged.
    pub fn from_json(raw: &str) -> Result<Self, SayError> {
        let wire: WireRequest = serde_json::from_str(raw)
            .map_err(|err| SayError::MalformedRequest(err.to_string()))?;

        Ok(Self {
            category: wire.category.parse::<SayCategory>()?,
            method: wire
                .method
                .as_deref()
                .map(str::parse::<SayMethod>)
                .transpose()?
                .unwrap_or_default(),
            gender: wire
                .gender
                .as_deref()
                .map(str::parse::<SayGender>)
                .transpose()?
                .unwrap_or_default(),
            raw_text: wire.raw_text,
            timezone: wire.timezone,
        })
    }
}

#[derive(Deserialize)]
struct WireRequest {
    category: String,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    raw_text: String,
    #[serde(default)]
    timezone: Option<String>,
}

/// Opaque reference to one spoken audio segment: a family of recordings
/// (`template`) and the variant inside it (`selector`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub template: String,
    pub selector: String,
}

impl Token {
    pub fn new<T: Into<String>, S: Into<String>>(template: T, selector: S) -> Self {
        Self {
            template: template.into(),
            selector: selector.into(),
        }
    }

    pub fn digits<S: Into<String>>(selector: S) -> Self {
        Self::new(FAMILY_DIGITS, selector)
    }

    pub fn time<S: Into<String>>(selector: S) -> Self {
        Self::new(FAMILY_TIME, selector)
    }

    pub fn alphabet(code: u32) -> Self {
        Self::new(FAMILY_ALPHABET, code.to_string())
    }

    pub fn phonetic(code: u32) -> Self {
        Self::new(FAMILY_PHONETIC, code.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.template, self.selector)
    }
}

/// Ordered, append-only list of tokens. Playback order is list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn append(&mut self, other: TokenSequence) {
        self.tokens.extend(other.tokens);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// `family/selector` strings, handy for logs and assertions.
    pub fn names(&self) -> Vec<String> {
        self.tokens.iter().map(Token::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}
