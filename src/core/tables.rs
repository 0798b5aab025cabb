//! Lookup tables of the Codice Fiscale scheme (DM 23/12/1976).

/// Month letters, January first.
pub(crate) static MONTH_LETTERS: [u8; 12] = *b"ABCDEHLMPRST";

/// Omocodia substitution letters, indexed by the digit they replace.
pub(crate) static OMOCODE_LETTERS: [u8; 10] = *b"LMNPQRSTUV";

/// Values of `0`-`9` at odd (1-indexed) positions.
static ODD_DIGIT_VALUES: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

/// Values of `A`-`Z` at odd (1-indexed) positions.
static ODD_LETTER_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Month letter for a 1-based month.
#[cfg_attr(not(feature = "generator"), allow(dead_code))]
pub(crate) fn month_letter(month: u32) -> Option<u8> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_LETTERS.get(idx).copied()
}

/// 1-based month for a month letter.
pub(crate) fn month_from_letter(letter: u8) -> Option<u32> {
    let idx = MONTH_LETTERS.iter().position(|&l| l == letter)?;
    u32::try_from(idx + 1).ok()
}

/// Omocodia letter standing in for an ASCII digit.
#[cfg_attr(not(feature = "generator"), allow(dead_code))]
pub(crate) fn omocode_letter(digit: u8) -> Option<u8> {
    OMOCODE_LETTERS.get(usize::from(digit.checked_sub(b'0')?)).copied()
}

/// ASCII digit an omocodia letter stands for.
pub(crate) fn omocode_digit(letter: u8) -> Option<u8> {
    let idx = OMOCODE_LETTERS.iter().position(|&l| l == letter)?;
    Some(b'0' + u8::try_from(idx).ok()?)
}

/// Digit value of a character that may be an omocodia letter.
pub(crate) fn numeric_value(c: u8) -> Option<u8> {
    if c.is_ascii_digit() {
        Some(c - b'0')
    } else {
        omocode_digit(c).map(|d| d - b'0')
    }
}

fn odd_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => ODD_DIGIT_VALUES.get(usize::from(c - b'0')).copied(),
        b'A'..=b'Z' => ODD_LETTER_VALUES.get(usize::from(c - b'A')).copied(),
        _ => None,
    }
}

fn even_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'Z' => Some(u32::from(c - b'A')),
        _ => None,
    }
}

/// Check letter over a 15-byte body of uppercase ASCII alphanumerics.
///
/// Position parity is 1-indexed: the first character uses the odd table.
pub(crate) fn check_letter(body: &[u8]) -> Option<u8> {
    if body.len() != 15 {
        return None;
    }
    let mut sum = 0u32;
    for (i, &c) in body.iter().enumerate() {
        sum += if i % 2 == 0 { odd_value(c)? } else { even_value(c)? };
    }
    Some(b'A' + u8::try_from(sum % 26).ok()?)
}
