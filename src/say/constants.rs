pub(crate) const FAMILY_DIGITS: &str = "digits";
pub(crate) const FAMILY_TIME: &str = "time";
pub(crate) const FAMILY_ALPHABET: &str = "ascii";
pub(crate) const FAMILY_PHONETIC: &str = "phonetic-ascii";

/// Largest numeral the composer decomposes: 999 999 999.
pub(crate) const MAX_NUMERAL_DIGITS: usize = 9;
pub(crate) const MAX_ITERATED_DIGITS: usize = 127;

/// Counted (ordinal) selectors carry this prefix, e.g. `r-3` for "tredje".
pub(crate) const COUNTED_PREFIX: &str = "r-";

pub(crate) const ONE_NEUTER: &str = "n-1";
pub(crate) const ONE_COMMON: &str = "u-1";
pub(crate) const HUNDRED: &str = "100";
pub(crate) const THOUSAND: &str = "1000";
pub(crate) const MILLION: &str = "miljon";
pub(crate) const MILLIONS: &str = "miljoner";

pub(crate) const TODAY: &str = "idag";
pub(crate) const YESTERDAY: &str = "igar";

/// A short date within this many days before now is read as a weekday only.
pub(crate) const RECENT_DAYS: u32 = 5;

/// Environment key the host uses for the caller's timezone.
pub(crate) const TIMEZONE_VARIABLE: &str = "timezone";
