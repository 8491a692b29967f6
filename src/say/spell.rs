use crate::say::error::SayError;
use crate::say::types::{SayCategory, Token, TokenSequence};

/// Which alphabet recordings letters are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Plain,
    Phonetic,
}

impl Alphabet {
    pub fn for_category(category: SayCategory) -> Result<Self, SayError> {
        match category {
            SayCategory::NameSpelled => Ok(Alphabet::Plain),
            SayCategory::NamePhonetic => Ok(Alphabet::Phonetic),
            other => Err(SayError::UnsupportedCategory(other.to_string())),
        }
    }
}

/// One token per character: digits from the digit recordings, everything
/// else from `alphabet` keyed by the lowercased character code.
pub fn spell(text: &str, alphabet: Alphabet) -> TokenSequence {
    let mut out = TokenSequence::new();
    for ch in text.chars() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        let token = match (lower, alphabet) {
            ('0'..='9', _) => Token::digits(lower.to_string()),
            (_, Alphabet::Plain) => Token::alphabet(u32::from(lower)),
            (_, Alphabet::Phonetic) => Token::phonetic(u32::from(lower)),
        };
        out.push(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert_eq!(
            spell("A1", Alphabet::Plain).names(),
            vec!["ascii/97", "digits/1"]
        );
    }

    #[test]
    fn phonetic_alphabet() {
        assert_eq!(
            spell("Ola", Alphabet::Phonetic).names(),
            vec!["phonetic-ascii/111", "phonetic-ascii/108", "phonetic-ascii/97"]
        );
    }

    #[test]
    fn one_token_per_character() {
        let text = "Bjørn-7";
        assert_eq!(spell(text, Alphabet::Plain).len(), text.chars().count());
        assert_eq!(
            spell("Ø", Alphabet::Plain).names(),
            vec![format!("ascii/{}", u32::from('ø'))]
        );
    }

    #[test]
    fn empty_text_spells_nothing() {
        assert!(spell("", Alphabet::Plain).is_empty());
    }

    #[test]
    fn only_name_categories_have_an_alphabet() {
        assert_eq!(
            Alphabet::for_category(SayCategory::NameSpelled).unwrap(),
            Alphabet::Plain
        );
        assert!(Alphabet::for_category(SayCategory::Url).is_err());
    }
}
