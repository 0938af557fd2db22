//! Pattern-driven formatting and exact parsing.
//!
//! A pattern is a sequence of tokens:
//!
//! | Token  | Field            | Text                                |
//! |--------|------------------|-------------------------------------|
//! | `yyyy` | year             | 4 digits, `-` prefix when negative  |
//! | `MM`   | month of year    | 2 digits                            |
//! | `dd`   | day of month     | 2 digits                            |
//! | `HH`   | hour of day      | 2 digits                            |
//! | `mm`   | minute of hour   | 2 digits                            |
//! | `ss`   | second of minute | 2 digits                            |
//! | `'..'` | literal text     | as written, `''` for a single quote |
//!
//! Any other character is a literal matched exactly. Any other ASCII letter
//! is reserved and rejected at compile time.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::field::Field;

/// ISO calendar date, `yyyy-MM-dd`.
pub(crate) const ISO_DATE: &str = "yyyy-MM-dd";

/// A value that can be rendered through, and rebuilt from, a [`Pattern`].
pub trait Temporal: Sized {
    /// Type name reported in errors.
    const KIND: &'static str;

    /// Returns the value of `field`, or [`CalendarError::UnsupportedField`].
    fn field(&self, field: Field) -> Result<i64, CalendarError>;

    /// Builds a value from the fields a parse produced.
    fn from_fields(fields: &ParsedFields) -> Result<Self, CalendarError>;
}

/// Field values collected while parsing text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    values: [Option<i64>; Field::ALL.len()],
}

impl ParsedFields {
    /// Returns the parsed value of `field`, if the pattern contained it.
    pub fn get(&self, field: Field) -> Option<i64> {
        self.values[field as usize]
    }

    /// Returns the values of all `fields`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::IncompleteFields`] listing every field that
    /// was not parsed.
    pub fn require<const N: usize>(
        &self,
        target: &'static str,
        fields: [Field; N],
    ) -> Result<[i64; N], CalendarError> {
        let missing: Vec<Field> = fields
            .iter()
            .copied()
            .filter(|&f| self.get(f).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CalendarError::IncompleteFields { target, missing });
        }
        Ok(fields.map(|f| self.get(f).unwrap_or_default()))
    }

    /// Records a value; returns the earlier value if it differs.
    fn set(&mut self, field: Field, value: i64) -> Result<(), i64> {
        match self.values[field as usize] {
            Some(previous) if previous != value => Err(previous),
            _ => {
                self.values[field as usize] = Some(value);
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number { field: Field, width: usize },
    Literal(char),
}

/// A compiled formatting pattern such as `dd MM yyyy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Tokenizes `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPattern`] for an unterminated quote or
    /// an unsupported letter run such as `yy` or `EEE`.
    pub fn compile(pattern: &str) -> Result<Self, CalendarError> {
        let invalid = |reason: String| CalendarError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };
        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.next_if_eq(&'\'').is_some() {
                    tokens.push(Token::Literal('\''));
                    continue;
                }
                let mut closed = false;
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        tokens.push(Token::Literal(q));
                    } else if chars.next_if_eq(&'\'').is_some() {
                        tokens.push(Token::Literal('\''));
                    } else {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(invalid("unterminated quoted literal".to_string()));
                }
            } else if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.next_if_eq(&c).is_some() {
                    width += 1;
                }
                let field = match (c, width) {
                    ('y', 4) => Field::Year,
                    ('M', 2) => Field::MonthOfYear,
                    ('d', 2) => Field::DayOfMonth,
                    ('H', 2) => Field::HourOfDay,
                    ('m', 2) => Field::MinuteOfHour,
                    ('s', 2) => Field::SecondOfMinute,
                    _ => {
                        let run: String = std::iter::repeat_n(c, width).collect();
                        return Err(invalid(format!("unsupported token {run:?}")));
                    }
                };
                tokens.push(Token::Number { field, width });
            } else {
                tokens.push(Token::Literal(c));
            }
        }
        Ok(Self {
            source: pattern.to_string(),
            tokens,
        })
    }

    /// Returns the pattern text as given to [`Pattern::compile`].
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the fields the pattern renders, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.tokens.iter().filter_map(|t| match *t {
            Token::Number { field, .. } => Some(field),
            Token::Literal(_) => None,
        })
    }

    /// Renders `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedField`] if the pattern names a
    /// field `value` does not carry.
    pub fn format<T: Temporal>(&self, value: &T) -> Result<String, CalendarError> {
        let mut out = String::with_capacity(self.source.len() + 4);
        for token in &self.tokens {
            match *token {
                Token::Literal(c) => out.push(c),
                Token::Number { field, width } => {
                    let v = value.field(field)?;
                    if v < 0 {
                        out.push('-');
                    }
                    out.push_str(&format!("{:0width$}", v.unsigned_abs()));
                }
            }
        }
        Ok(out)
    }

    /// Parses `text`, which must match the pattern exactly, into a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::FormatMismatch`] if a literal or digit run
    /// is missing, a field appears twice with different values, or text is
    /// left over; [`CalendarError::IncompleteFields`] if the pattern does not
    /// provide what `T` needs; and the target's own validation errors.
    pub fn parse<T: Temporal>(&self, text: &str) -> Result<T, CalendarError> {
        let mut fields = ParsedFields::default();
        let mut rest = text;
        for token in &self.tokens {
            let position = text.len() - rest.len();
            let mismatch = |reason: String| CalendarError::FormatMismatch {
                text: text.to_string(),
                position,
                reason,
            };
            match *token {
                Token::Literal(c) => {
                    rest = rest
                        .strip_prefix(c)
                        .ok_or_else(|| mismatch(format!("expected {c:?}")))?;
                }
                Token::Number { field, width } => {
                    let negative = field == Field::Year && rest.starts_with('-');
                    let unsigned = if negative { &rest[1..] } else { rest };
                    let digits = unsigned
                        .get(..width)
                        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
                        .ok_or_else(|| mismatch(format!("expected {width} digits for {field}")))?;
                    let magnitude: i64 = digits
                        .parse()
                        .map_err(|_| mismatch(format!("expected {width} digits for {field}")))?;
                    if negative && magnitude == 0 {
                        return Err(mismatch(format!("negative zero for {field}")));
                    }
                    let value = if negative { -magnitude } else { magnitude };
                    fields.set(field, value).map_err(|previous| {
                        mismatch(format!("conflicting values for {field}: {previous} and {value}"))
                    })?;
                    rest = &unsigned[width..];
                }
            }
        }
        if !rest.is_empty() {
            return Err(CalendarError::FormatMismatch {
                text: text.to_string(),
                position: text.len() - rest.len(),
                reason: "unparsed trailing text".to_string(),
            });
        }
        T::from_fields(&fields)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

/// Renders `value` with a pattern given as text.
///
/// # Errors
///
/// See [`Pattern::compile`] and [`Pattern::format`].
pub fn format<T: Temporal>(value: &T, pattern: &str) -> Result<String, CalendarError> {
    Pattern::compile(pattern)?.format(value)
}

/// Parses `text` into a `T` with a pattern given as text.
///
/// # Errors
///
/// See [`Pattern::compile`] and [`Pattern::parse`].
pub fn parse<T: Temporal>(text: &str, pattern: &str) -> Result<T, CalendarError> {
    Pattern::compile(pattern)?.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;
    use crate::time::ClockTime;
    use crate::timestamp::Timestamp;

    fn birthday() -> CalendarDate {
        CalendarDate::of(1984, 8, 18).unwrap()
    }

    #[test]
    fn compile_tokens() {
        let p = Pattern::compile("dd MM yyyy").unwrap();
        assert_eq!(
            p.fields().collect::<Vec<_>>(),
            vec![Field::DayOfMonth, Field::MonthOfYear, Field::Year]
        );
        assert_eq!(p.as_str(), "dd MM yyyy");
        assert_eq!(p.to_string(), "dd MM yyyy");
    }

    #[test]
    fn compile_rejects_unknown_letters() {
        for bad in ["yy", "yyyyy", "M", "EEE", "dd/MM/yyyy hh", "S"] {
            assert!(
                matches!(Pattern::compile(bad), Err(CalendarError::InvalidPattern { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn quoted_literals() {
        let p = Pattern::compile("yyyy-MM-dd'T'HH:mm").unwrap();
        let ts = Timestamp::of(2024, 12, 25, 12, 10).unwrap();
        assert_eq!(p.format(&ts).unwrap(), "2024-12-25T12:10");
        let q = Pattern::compile("'day' dd, 'o''clock' HH''").unwrap();
        let ts = Timestamp::of(2024, 1, 5, 9, 0).unwrap();
        assert_eq!(q.format(&ts).unwrap(), "day 05, o'clock 09'");
        assert!(Pattern::compile("'open").is_err());
    }

    #[test]
    fn format_date() {
        let p = Pattern::compile("dd MM yyyy").unwrap();
        assert_eq!(p.format(&birthday()).unwrap(), "18 08 1984");
        assert_eq!(format(&birthday(), "yyyy/MM/dd").unwrap(), "1984/08/18");
    }

    #[test]
    fn format_negative_year() {
        let d = CalendarDate::of(-44, 3, 15).unwrap();
        assert_eq!(format(&d, "dd.MM.yyyy").unwrap(), "15.03.-0044");
    }

    #[test]
    fn format_date_with_time_token_fails() {
        assert_eq!(
            format(&birthday(), "yyyy HH").unwrap_err(),
            CalendarError::UnsupportedField {
                field: Field::HourOfDay,
                target: "CalendarDate",
            }
        );
    }

    #[test]
    fn parse_date() {
        let d: CalendarDate = parse("18 08 1984", "dd MM yyyy").unwrap();
        assert_eq!(d, birthday());
    }

    #[test]
    fn parse_rejects_wrong_separator() {
        let err = parse::<CalendarDate>("18-08-1984", "dd MM yyyy").unwrap_err();
        assert_eq!(
            err,
            CalendarError::FormatMismatch {
                text: "18-08-1984".to_string(),
                position: 2,
                reason: "expected ' '".to_string(),
            }
        );
    }

    #[test]
    fn parse_rejects_short_digits() {
        let err = parse::<CalendarDate>("18 8 1984", "dd MM yyyy").unwrap_err();
        assert!(matches!(err, CalendarError::FormatMismatch { position: 3, .. }));
    }

    #[test]
    fn parse_rejects_trailing_text() {
        let err = parse::<CalendarDate>("18 08 1984 ", "dd MM yyyy").unwrap_err();
        assert!(matches!(err, CalendarError::FormatMismatch { position: 10, .. }));
    }

    #[test]
    fn parse_rejects_missing_text() {
        let err = parse::<CalendarDate>("18 08", "dd MM yyyy").unwrap_err();
        assert!(matches!(err, CalendarError::FormatMismatch { position: 5, .. }));
    }

    #[test]
    fn parse_rejects_non_ascii_in_digits() {
        assert!(parse::<CalendarDate>("1é 08 1984", "dd MM yyyy").is_err());
    }

    #[test]
    fn parse_invalid_date_values() {
        let err = parse::<CalendarDate>("31 04 2024", "dd MM yyyy").unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate { month: 4, day: 31, .. }));
    }

    #[test]
    fn parse_conflicting_repeat() {
        let ok: CalendarDate = parse("18 08 1984 18", "dd MM yyyy dd").unwrap();
        assert_eq!(ok, birthday());
        let err = parse::<CalendarDate>("18 08 1984 19", "dd MM yyyy dd").unwrap_err();
        assert!(matches!(err, CalendarError::FormatMismatch { position: 11, .. }));
    }

    #[test]
    fn parse_time_from_date_pattern_is_incomplete() {
        let err = parse::<ClockTime>("18 08 1984", "dd MM yyyy").unwrap_err();
        assert_eq!(
            err,
            CalendarError::IncompleteFields {
                target: "ClockTime",
                missing: vec![Field::HourOfDay, Field::MinuteOfHour],
            }
        );
    }

    #[test]
    fn parse_timestamp_without_time_is_incomplete() {
        let err = parse::<Timestamp>("18 08 1984", "dd MM yyyy").unwrap_err();
        assert!(matches!(
            err,
            CalendarError::IncompleteFields { target: "Timestamp", ref missing } if missing.len() == 2
        ));
    }

    #[test]
    fn parse_time_defaults_seconds() {
        let t: ClockTime = parse("12:10", "HH:mm").unwrap();
        assert_eq!(t, ClockTime::of(12, 10).unwrap());
        let t: ClockTime = parse("12:10:05", "HH:mm:ss").unwrap();
        assert_eq!(t, ClockTime::of_second(12, 10, 5).unwrap());
    }

    #[test]
    fn parse_date_ignores_extra_time_fields() {
        let d: CalendarDate = parse("1984-08-18 07:30", "yyyy-MM-dd HH:mm").unwrap();
        assert_eq!(d, birthday());
    }

    #[test]
    fn parse_negative_year() {
        let d: CalendarDate = parse("-0044-03-15", ISO_DATE).unwrap();
        assert_eq!(d, CalendarDate::of(-44, 3, 15).unwrap());
    }

    #[test]
    fn parse_rejects_negative_zero_year() {
        let err = parse::<CalendarDate>("-0000-01-01", ISO_DATE).unwrap_err();
        assert!(matches!(err, CalendarError::FormatMismatch { position: 0, .. }));
        let year_zero: CalendarDate = parse("0000-01-01", ISO_DATE).unwrap();
        assert_eq!(year_zero.year(), 0);
        assert_eq!(format(&year_zero, ISO_DATE).unwrap(), "0000-01-01");
    }

    #[test]
    fn compile_error_propagates_from_free_functions() {
        assert!(matches!(
            parse::<CalendarDate>("1984", "yyy"),
            Err(CalendarError::InvalidPattern { .. })
        ));
    }
}
