//! Numeral decomposition and Bokmål number grammar.

use tracing::error;

use crate::say::constants::{
    COUNTED_PREFIX, HUNDRED, MAX_ITERATED_DIGITS, MAX_NUMERAL_DIGITS, MILLION, MILLIONS,
    ONE_COMMON, ONE_NEUTER, THOUSAND,
};
use crate::say::error::SayError;
use crate::say::types::{SayGender, SayMethod, Token, TokenSequence};

const PLACES: usize = 9;

/// Decimal digit slots of a numeral, index 0 = units, index 8 = hundred-millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitGroups {
    places: [u8; PLACES],
}

impl DigitGroups {
    /// Splits `value` into digit slots, walking the powers of ten from 10^8 down.
    ///
    /// Values above 999 999 999 keep only their low nine digits.
    pub fn from_value(value: u32) -> Self {
        let mut remaining = value % 1_000_000_000;
        let mut places = [0u8; PLACES];
        for place in (0..PLACES).rev() {
            let power = 10u32.pow(place as u32);
            let digit = remaining / power;
            places[place] = digit as u8;
            remaining -= digit * power;
        }
        Self { places }
    }

    /// Parses an already cleaned numeral of at most nine ASCII digits.
    pub fn parse(cleaned: &str) -> Result<Self, SayError> {
        if cleaned.len() > MAX_NUMERAL_DIGITS {
            return Err(parse_error(cleaned, "more than nine digits"));
        }
        if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error(cleaned, "not a numeral"));
        }

        let value = cleaned
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        Ok(Self::from_value(value))
    }

    pub fn digit(&self, place: usize) -> u8 {
        self.places.get(place).copied().unwrap_or(0)
    }

    pub fn value(&self) -> u32 {
        self.places
            .iter()
            .enumerate()
            .map(|(place, digit)| u32::from(*digit) * 10u32.pow(place as u32))
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.places.iter().all(|digit| *digit == 0)
    }

    /// The three-digit group whose units digit sits at `low_place`.
    pub fn group(&self, low_place: usize) -> Group {
        Group::new(
            self.digit(low_place + 2),
            self.digit(low_place + 1),
            self.digit(low_place),
        )
    }

    pub fn millions(&self) -> Group {
        self.group(6)
    }

    pub fn thousands(&self) -> Group {
        self.group(3)
    }

    pub fn units(&self) -> Group {
        self.group(0)
    }
}

/// Hundreds, tens and units of one three-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Group {
    pub hundreds: u8,
    pub tens: u8,
    pub units: u8,
}

impl Group {
    pub fn new(hundreds: u8, tens: u8, units: u8) -> Self {
        Self {
            hundreds,
            tens,
            units,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hundreds == 0 && self.tens == 0 && self.units == 0
    }
}

/// Grammatical form of a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupForm {
    Pronounced,
    Counted,
}

/// Renders one group in reading order: hundreds, tens, units, then `marker`.
///
/// `marker` names the unit the group counts ("tusen", "millioner"); it is only
/// spoken when the group is nonzero and forces the neuter "ett" for a trailing
/// one.
pub fn render_group(
    out: &mut TokenSequence,
    group: Group,
    form: GroupForm,
    gender: SayGender,
    marker: Option<Token>,
) {
    let Group {
        hundreds,
        tens,
        mut units,
    } = group;

    if hundreds != 0 {
        match form {
            GroupForm::Counted => {
                // [2-9]00 keeps its multiplier, otherwise only "hundrede" is said
                if hundreds > 1 && tens == 0 && units == 0 {
                    out.push(Token::digits(hundreds.to_string()));
                }
                out.push(counted(HUNDRED));
            }
            GroupForm::Pronounced => {
                let multiplier = match hundreds {
                    1 => Token::digits(ONE_NEUTER),
                    n => Token::digits(n.to_string()),
                };
                out.push(multiplier);
                out.push(Token::digits(HUNDRED));
            }
        }
    }

    match tens {
        0 => {}
        1 => {
            let teen = format!("1{units}");
            out.push(match form {
                GroupForm::Counted => counted(&teen),
                GroupForm::Pronounced => Token::digits(teen),
            });
            units = 0;
        }
        n => {
            let round = format!("{n}0");
            out.push(match (form, units) {
                (GroupForm::Counted, 0) => counted(&round),
                _ => Token::digits(round),
            });
        }
    }

    if units != 0 {
        out.push(unit_token(units, form, gender, marker.is_some()));
    }

    if let Some(marker) = marker {
        if !group.is_zero() {
            out.push(marker);
        }
    }
}

fn unit_token(units: u8, form: GroupForm, gender: SayGender, marked: bool) -> Token {
    match (units, marked, form, gender) {
        (1, true, _, _) => Token::digits(ONE_NEUTER),
        (1, false, GroupForm::Counted, _) => counted("1"),
        (1, false, GroupForm::Pronounced, SayGender::Common) => Token::digits(ONE_COMMON),
        (1, false, GroupForm::Pronounced, SayGender::Neuter) => Token::digits(ONE_NEUTER),
        (n, false, GroupForm::Counted, _) => counted(&n.to_string()),
        (n, _, _, _) => Token::digits(n.to_string()),
    }
}

fn counted(selector: &str) -> Token {
    Token::digits(format!("{COUNTED_PREFIX}{selector}"))
}

/// Renders the millions, thousands and units groups of `groups`.
///
/// The millions and thousands groups are always read as cardinals; `form`
/// applies to the terminal units group, which also carries `terminal` when the
/// caller supplies one.
pub fn compose(
    groups: &DigitGroups,
    form: GroupForm,
    gender: SayGender,
    terminal: Option<Token>,
) -> TokenSequence {
    let mut out = TokenSequence::new();
    if groups.is_zero() {
        out.push(Token::digits("0"));
        return out;
    }

    let millions = groups.millions();
    let million_marker = if millions == Group::new(0, 0, 1) {
        MILLION
    } else {
        MILLIONS
    };

    render_group(
        &mut out,
        millions,
        GroupForm::Pronounced,
        gender,
        Some(Token::digits(million_marker)),
    );
    render_group(
        &mut out,
        groups.thousands(),
        GroupForm::Pronounced,
        gender,
        Some(Token::digits(THOUSAND)),
    );
    render_group(&mut out, groups.units(), form, gender, terminal);
    out
}

/// Renders a raw numeral (grouping separators allowed) with `method`.
pub fn render_numeral(
    raw: &str,
    method: SayMethod,
    gender: SayGender,
) -> Result<TokenSequence, SayError> {
    let cleaned = strip_separators(raw)?;

    if method == SayMethod::Iterated {
        if cleaned.len() > MAX_ITERATED_DIGITS {
            return Err(parse_error(raw, "too many digits to iterate"));
        }
        return Ok(cleaned
            .chars()
            .map(|digit| Token::digits(digit.to_string()))
            .collect::<Vec<_>>()
            .into());
    }

    if cleaned.len() > MAX_NUMERAL_DIGITS {
        return Err(parse_error(raw, "more than nine digits"));
    }
    let groups = DigitGroups::parse(&cleaned)?;

    if groups.is_zero() {
        return Ok(vec![Token::digits("0")].into());
    }

    let tokens = match method {
        SayMethod::PronouncedYear => vec![Token::time(cleaned)].into(),
        SayMethod::Counted => compose(&groups, GroupForm::Counted, gender, None),
        SayMethod::Cardinal | SayMethod::Iterated => {
            compose(&groups, GroupForm::Pronounced, gender, None)
        }
    };
    Ok(tokens)
}

/// Drops grouping separators and rejects anything that is not a digit.
pub fn strip_separators(raw: &str) -> Result<String, SayError> {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '0'..='9' => cleaned.push(ch),
            ',' | ' ' | '\u{a0}' => {}
            _ => return Err(parse_error(raw, "not a numeral")),
        }
    }
    Ok(cleaned)
}

fn parse_error(input: &str, reason: &'static str) -> SayError {
    error!(target: "say_engine", input, reason, "parse error");
    SayError::parse(input, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tokens: &TokenSequence) -> Vec<String> {
        tokens.names()
    }

    fn say(raw: &str, method: SayMethod, gender: SayGender) -> Vec<String> {
        names(&render_numeral(raw, method, gender).expect("numeral renders"))
    }

    fn group(
        hundreds: u8,
        tens: u8,
        units: u8,
        form: GroupForm,
        marker: Option<&str>,
    ) -> Vec<String> {
        let mut out = TokenSequence::new();
        render_group(
            &mut out,
            Group::new(hundreds, tens, units),
            form,
            SayGender::Common,
            marker.map(Token::digits),
        );
        names(&out)
    }

    #[test]
    fn decomposition_fills_places_from_the_tail() {
        let groups = DigitGroups::parse("84371").unwrap();
        let low: Vec<u8> = (0..5).map(|place| groups.digit(place)).collect();
        assert_eq!(low, vec![1, 7, 3, 4, 8]);
        assert_eq!(groups.digit(5), 0);
        assert_eq!(groups.thousands(), Group::new(0, 8, 4));
        assert_eq!(groups.units(), Group::new(3, 7, 1));
    }

    #[test]
    fn decomposition_reconstructs_the_value() {
        for value in (0..=999_999_999u32).step_by(7_919).chain([999_999_999, 100_000_000]) {
            let groups = DigitGroups::from_value(value);
            assert_eq!(groups.value(), value);
            assert_eq!(groups.is_zero(), value == 0);
        }
    }

    #[test]
    fn counted_hundreds_keep_multiplier_only_when_round() {
        assert_eq!(group(2, 0, 0, GroupForm::Counted, None), vec!["digits/2", "digits/r-100"]);
        assert_eq!(group(1, 0, 0, GroupForm::Counted, None), vec!["digits/r-100"]);
        assert_eq!(
            group(2, 4, 5, GroupForm::Counted, None),
            vec!["digits/r-100", "digits/40", "digits/r-5"]
        );
    }

    #[test]
    fn pronounced_hundred_uses_neuter_one() {
        assert_eq!(
            group(1, 0, 0, GroupForm::Pronounced, None),
            vec!["digits/n-1", "digits/100"]
        );
        assert_eq!(
            group(7, 0, 2, GroupForm::Pronounced, None),
            vec!["digits/7", "digits/100", "digits/2"]
        );
    }

    #[test]
    fn teens_absorb_the_units_digit() {
        assert_eq!(group(0, 1, 3, GroupForm::Pronounced, None), vec!["digits/13"]);
        assert_eq!(group(0, 1, 1, GroupForm::Counted, None), vec!["digits/r-11"]);
        assert_eq!(group(0, 1, 0, GroupForm::Pronounced, None), vec!["digits/10"]);
    }

    #[test]
    fn counted_round_tens_take_the_ordinal_form() {
        assert_eq!(group(0, 3, 0, GroupForm::Counted, None), vec!["digits/r-30"]);
        assert_eq!(
            group(0, 2, 1, GroupForm::Counted, None),
            vec!["digits/20", "digits/r-1"]
        );
    }

    #[test]
    fn one_agrees_with_gender_marker_and_form() {
        let mut out = TokenSequence::new();
        render_group(&mut out, Group::new(0, 0, 1), GroupForm::Pronounced, SayGender::Neuter, None);
        assert_eq!(names(&out), vec!["digits/n-1"]);

        assert_eq!(group(0, 0, 1, GroupForm::Pronounced, None), vec!["digits/u-1"]);
        assert_eq!(group(0, 0, 1, GroupForm::Counted, None), vec!["digits/r-1"]);
        assert_eq!(
            group(0, 0, 1, GroupForm::Pronounced, Some("1000")),
            vec!["digits/n-1", "digits/1000"]
        );
    }

    #[test]
    fn marked_units_stay_cardinal() {
        assert_eq!(
            group(0, 0, 4, GroupForm::Counted, Some("1000")),
            vec!["digits/4", "digits/1000"]
        );
    }

    #[test]
    fn marker_is_skipped_for_an_empty_group() {
        assert!(group(0, 0, 0, GroupForm::Pronounced, Some("1000")).is_empty());
    }

    #[test]
    fn zero_is_a_single_token_for_every_method() {
        for method in [
            SayMethod::Cardinal,
            SayMethod::Counted,
            SayMethod::PronouncedYear,
            SayMethod::Iterated,
        ] {
            for gender in [SayGender::Common, SayGender::Neuter] {
                assert_eq!(say("0", method, gender), vec!["digits/0"]);
            }
        }
        assert_eq!(say("000", SayMethod::Cardinal, SayGender::Neuter), vec!["digits/0"]);
    }

    #[test]
    fn one_thousand_one_hundred() {
        assert_eq!(
            say("1100", SayMethod::Cardinal, SayGender::Common),
            vec!["digits/n-1", "digits/1000", "digits/n-1", "digits/100"]
        );
    }

    #[test]
    fn five_digit_numeral_splits_into_thousands_and_units() {
        assert_eq!(
            say("84371", SayMethod::Cardinal, SayGender::Common),
            vec![
                "digits/80",
                "digits/4",
                "digits/1000",
                "digits/3",
                "digits/100",
                "digits/70",
                "digits/u-1",
            ]
        );
    }

    #[test]
    fn separators_are_stripped() {
        assert_eq!(
            say("1,234", SayMethod::Cardinal, SayGender::Neuter),
            vec![
                "digits/n-1",
                "digits/1000",
                "digits/2",
                "digits/100",
                "digits/30",
                "digits/4",
            ]
        );
        assert_eq!(
            say("12 000", SayMethod::Cardinal, SayGender::Neuter),
            vec!["digits/12", "digits/1000"]
        );
    }

    #[test]
    fn million_marker_agrees_with_the_group() {
        assert_eq!(
            say("1000000", SayMethod::Cardinal, SayGender::Neuter),
            vec!["digits/n-1", "digits/miljon"]
        );
        assert_eq!(
            say("2000000", SayMethod::Cardinal, SayGender::Neuter),
            vec!["digits/2", "digits/miljoner"]
        );
        assert_eq!(
            say("101000000", SayMethod::Cardinal, SayGender::Neuter),
            vec!["digits/n-1", "digits/100", "digits/n-1", "digits/miljoner"]
        );
        assert_eq!(
            say("11000000", SayMethod::Cardinal, SayGender::Neuter),
            vec!["digits/11", "digits/miljoner"]
        );
    }

    #[test]
    fn counted_only_changes_the_last_group() {
        assert_eq!(
            say("2003", SayMethod::Counted, SayGender::Neuter),
            vec!["digits/2", "digits/1000", "digits/r-3"]
        );
        assert_eq!(
            say("300", SayMethod::Counted, SayGender::Neuter),
            vec!["digits/3", "digits/r-100"]
        );
    }

    #[test]
    fn year_is_a_single_lookup() {
        assert_eq!(
            say("2026", SayMethod::PronouncedYear, SayGender::Neuter),
            vec!["time/2026"]
        );
    }

    #[test]
    fn iterated_reads_each_digit() {
        assert_eq!(
            say("4,07", SayMethod::Iterated, SayGender::Common),
            vec!["digits/4", "digits/0", "digits/7"]
        );
        assert_eq!(
            say("1234567890", SayMethod::Iterated, SayGender::Common).len(),
            10
        );
        assert!(render_numeral("12a", SayMethod::Iterated, SayGender::Common).is_err());
    }

    #[test]
    fn iterated_is_capped_at_127_digits() {
        let longest = "7".repeat(127);
        let tokens = render_numeral(&longest, SayMethod::Iterated, SayGender::Common).unwrap();
        assert_eq!(tokens.len(), 127);
        assert!(tokens.iter().all(|token| token.to_string() == "digits/7"));

        let too_long = "7".repeat(128);
        assert!(matches!(
            render_numeral(&too_long, SayMethod::Iterated, SayGender::Common),
            Err(SayError::Parse { .. })
        ));
    }

    #[test]
    fn no_break_space_is_a_separator() {
        assert_eq!(
            say("12\u{a0}000", SayMethod::Cardinal, SayGender::Neuter),
            vec!["digits/12", "digits/1000"]
        );
        assert_eq!(strip_separators("1\u{a0}234").unwrap(), "1234");
    }

    #[test]
    fn malformed_numerals_fail_to_parse() {
        assert!(matches!(
            render_numeral("12a3", SayMethod::Cardinal, SayGender::Common),
            Err(SayError::Parse { .. })
        ));
        assert!(matches!(
            render_numeral("1234567890", SayMethod::Cardinal, SayGender::Common),
            Err(SayError::Parse { .. })
        ));
        assert!(matches!(
            render_numeral("-5", SayMethod::Counted, SayGender::Common),
            Err(SayError::Parse { .. })
        ));
    }

    #[test]
    fn empty_numeral_reads_as_zero() {
        assert_eq!(say("", SayMethod::Cardinal, SayGender::Common), vec!["digits/0"]);
    }

    #[test]
    fn largest_numeral() {
        assert_eq!(
            say("999999999", SayMethod::Cardinal, SayGender::Common),
            vec![
                "digits/9",
                "digits/100",
                "digits/90",
                "digits/9",
                "digits/miljoner",
                "digits/9",
                "digits/100",
                "digits/90",
                "digits/9",
                "digits/1000",
                "digits/9",
                "digits/100",
                "digits/90",
                "digits/9",
            ]
        );
    }
}
