use tagjson_encoding::tag::{digit_tag, exponent_tag, int_tag};

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Largest mantissa value the accumulation loops below will fold a digit
/// into; past this, an integer digit is dropped and its place value is
/// recorded as an extra exponent increment instead. Matches
/// `original_source/json_read.c`'s `9223372036854775797LL` threshold, which
/// is also named directly in spec.md §8's boundary case.
const MANTISSA_THRESHOLD: i64 = 9_223_372_036_854_775_797;

/// Parses a JSON number and emits it as a Digit, Int or Exponent-wrapped Int.
///
/// Mirrors the original reader's mantissa/exponent decomposition: digits
/// before and after the decimal point are folded into a single `i64`
/// mantissa, the decimal point contributes a negative exponent, trailing
/// zeros are folded back into the exponent to keep the mantissa narrow, and
/// an explicit `e`/`E` suffix adds to that exponent. `e` and `E` are both
/// accepted, unlike the C reader this was ported from.
///
/// A number with more integer digits than the mantissa can hold doesn't
/// error: once `mantissa` would reach [`MANTISSA_THRESHOLD`], further
/// integer digits are consumed from the input but not folded in, and the
/// exponent is bumped by one per dropped digit instead, exactly like the
/// original's `else nExponent++` branch.
///
/// A leading `.` is accepted with no integer digits before it (`.5`), since
/// the digits-collected check only cares about the total across both
/// halves. A `.` with no digits on either side, or a bare `-`, is rejected.
pub(crate) fn parse_number(cursor: &mut Cursor) -> Result<(), ParseError> {
    let start = cursor.pos();
    let negative = if cursor.peek() == b'-' {
        cursor.bump();
        true
    } else {
        false
    };

    let mut mantissa: i64 = 0;
    let mut exponent: i32 = 0;
    let mut int_digits = 0u32;
    while cursor.peek().is_ascii_digit() {
        let digit = i64::from(cursor.bump() - b'0');
        if mantissa < MANTISSA_THRESHOLD {
            mantissa = mantissa.wrapping_mul(10).wrapping_add(digit);
        } else {
            exponent += 1;
        }
        int_digits += 1;
    }

    let mut frac_digits = 0u32;
    if cursor.peek() == b'.' {
        cursor.bump();
        while cursor.peek().is_ascii_digit() {
            let digit = i64::from(cursor.bump() - b'0');
            if mantissa < MANTISSA_THRESHOLD {
                mantissa = mantissa.wrapping_mul(10).wrapping_add(digit);
                exponent -= 1;
            }
            frac_digits += 1;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return Err(ParseError::NumberMissingLeadingDigit { at: cursor.pos() });
    }

    // Fold trailing zeros back into the exponent so the mantissa stays as
    // narrow as possible; this can only move the exponent towards zero.
    while mantissa != 0 && mantissa % 10 == 0 && exponent < 0 {
        mantissa /= 10;
        exponent += 1;
    }

    if matches!(cursor.peek(), b'e' | b'E') {
        cursor.bump();
        let exp_negative = match cursor.peek() {
            b'-' => {
                cursor.bump();
                true
            }
            b'+' => {
                cursor.bump();
                false
            }
            _ => false,
        };
        if !cursor.peek().is_ascii_digit() {
            return Err(ParseError::NumberMissingExponentDigit { at: cursor.pos() });
        }
        let mut suffix: i32 = 0;
        while cursor.peek().is_ascii_digit() {
            let digit = i32::from(cursor.bump() - b'0');
            suffix = suffix
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .filter(|&v| v <= 1000)
                .ok_or(ParseError::ExponentOutOfRange { at: start })?;
        }
        exponent += if exp_negative { -suffix } else { suffix };
    }

    if !(-16..=15).contains(&exponent) {
        return Err(ParseError::ExponentOutOfRange { at: start });
    }

    // `mantissa` never exceeds `MANTISSA_THRESHOLD`, so negating it never
    // overflows `i64`.
    let mantissa = if negative { -mantissa } else { mantissa };

    emit_number(cursor, mantissa, exponent as i8);
    Ok(())
}

fn emit_number(cursor: &mut Cursor, mantissa: i64, exponent: i8) {
    if exponent != 0 {
        cursor.emit(exponent_tag(exponent));
    }
    if (0..=9).contains(&mantissa) {
        cursor.emit(digit_tag(mantissa as u8));
        return;
    }
    let width = int_width_for(mantissa);
    cursor.emit(int_tag(width));
    cursor.emit_slice(&mantissa.to_le_bytes()[..width]);
}

fn int_width_for(mantissa: i64) -> usize {
    if i8::try_from(mantissa).is_ok() {
        1
    } else if i16::try_from(mantissa).is_ok() {
        2
    } else if i32::try_from(mantissa).is_ok() {
        4
    } else {
        8
    }
}
