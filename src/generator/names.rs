//! Surname and given-name codes.

use crate::core::{NameField, TaxIdError};

const CODE_LEN: usize = 3;
const PADDING: char = 'X';

/// Uppercase, fold accented letters to their base letter and drop anything
/// outside `A`-`Z`.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_uppercase)
        .filter_map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> Option<char> {
    let folded = match c {
        'A'..='Z' => c,
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' | 'Č' | 'Ć' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Š' => 'S',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Ž' => 'Z',
        _ => return None,
    };
    Some(folded)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn split(normalized: &str) -> (Vec<char>, Vec<char>) {
    normalized.chars().partition(|&c| !is_vowel(c))
}

fn fill(consonants: Vec<char>, vowels: Vec<char>) -> String {
    consonants
        .into_iter()
        .chain(vowels)
        .chain(std::iter::repeat(PADDING))
        .take(CODE_LEN)
        .collect()
}

fn normalized_or_err(value: &str, field: NameField) -> Result<String, TaxIdError> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        return Err(TaxIdError::InvalidName {
            field,
            value: value.into(),
        });
    }
    Ok(normalized)
}

/// Three-letter code for a surname.
///
/// Consonants in order, then vowels, then `X` padding.
pub fn surname_code(last_name: &str) -> Result<String, TaxIdError> {
    let normalized = normalized_or_err(last_name, NameField::LastName)?;
    let (consonants, vowels) = split(&normalized);
    Ok(fill(consonants, vowels))
}

/// Three-letter code for a given name.
///
/// With four or more consonants the 1st, 3rd and 4th are used; otherwise
/// the surname rule applies.
pub fn name_code(first_name: &str) -> Result<String, TaxIdError> {
    let normalized = normalized_or_err(first_name, NameField::FirstName)?;
    let (consonants, vowels) = split(&normalized);
    if let &[first, _, third, fourth, ..] = consonants.as_slice() {
        return Ok([first, third, fourth].iter().collect());
    }
    Ok(fill(consonants, vowels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_consonants_only() {
        assert_eq!(surname_code("Rossi").unwrap(), "RSS");
        assert_eq!(surname_code("Bianchi").unwrap(), "BNC");
    }

    #[test]
    fn surname_vowel_fallback() {
        assert_eq!(surname_code("Fo").unwrap(), "FOX");
        assert_eq!(surname_code("Rea").unwrap(), "REA");
        assert_eq!(surname_code("Neri").unwrap(), "NRE");
    }

    #[test]
    fn surname_padding() {
        assert_eq!(surname_code("O").unwrap(), "OXX");
        assert_eq!(surname_code("Ai").unwrap(), "AIX");
    }

    #[test]
    fn surname_apostrophes_and_spaces_ignored() {
        assert_eq!(surname_code("D'Angelo").unwrap(), "DNG");
        assert_eq!(surname_code("De Luca").unwrap(), "DLC");
    }

    #[test]
    fn accents_folded() {
        assert_eq!(normalize("Niccolò"), "NICCOLO");
        assert_eq!(surname_code("Pietà").unwrap(), "PTI");
        assert_eq!(name_code("Nicolò").unwrap(), "NCL");
    }

    #[test]
    fn name_with_four_consonants_skips_second() {
        assert_eq!(name_code("Gianfranco").unwrap(), "GFR");
        assert_eq!(name_code("Francesco").unwrap(), "FNC");
    }

    #[test]
    fn name_with_three_consonants() {
        assert_eq!(name_code("Mario").unwrap(), "MRA");
        assert_eq!(name_code("Giulia").unwrap(), "GLI");
        assert_eq!(name_code("Marco").unwrap(), "MRC");
    }

    #[test]
    fn name_padding() {
        assert_eq!(name_code("Ugo").unwrap(), "GUO");
        assert_eq!(name_code("Al").unwrap(), "LAX");
    }

    #[test]
    fn no_letters_rejected() {
        assert_eq!(
            surname_code("123 '-").unwrap_err(),
            TaxIdError::InvalidName {
                field: NameField::LastName,
                value: "123 '-".into(),
            }
        );
        assert!(matches!(
            name_code(""),
            Err(TaxIdError::InvalidName { field: NameField::FirstName, .. })
        ));
    }
}
