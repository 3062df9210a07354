//! 2D integer points and their `x,y` text form.
//!
//! - `Point`: value type ordered lexicographically (x, then y).
//! - `FromStr`/`Display`: a single `x,y` record.
//! - `Records`: scans a whole text buffer of records the way a stream
//!   extractor would (x up to the next comma, y as a signed integer prefix).
//!
//! Field policy
//! - x is permissive: leading whitespace, optional sign, leading digits. No
//!   digits (or a value outside `i32`) reads as `0`.
//! - y is strict: it must be a signed `i32`, otherwise the record fails.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

/// Point on the integer lattice.
///
/// Ordering is lexicographic by `(x, y)`; the derive order of the fields is
/// load-bearing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Replace both coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Widen to `i128`: differences, cross products and squared distances
    /// of any `i32` points are exact.
    #[inline]
    pub fn to_vec2(self) -> Vector2<i128> {
        Vector2::new(i128::from(self.x), i128::from(self.y))
    }

    /// `x,y` followed by a newline (one output record).
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }

    /// Iterate over the records in `text`.
    pub fn records(text: &str) -> Records<'_> {
        Records { rest: text }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Failure to read an `x,y` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePointError {
    /// No `,` separating the two fields.
    MissingDelimiter { record: String },
    /// The y field is not a signed 32-bit integer.
    InvalidY { field: String },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDelimiter { record } => {
                write!(f, "record {record:?} has no ',' between x and y")
            }
            Self::InvalidY { field } => write!(f, "y field {field:?} is not an i32"),
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingDelimiter {
                record: s.to_string(),
            })?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|_| ParsePointError::InvalidY {
                field: y.to_string(),
            })?;
        Ok(Point::new(lenient_x(x), y))
    }
}

/// Record scanner over a text buffer; see `Point::records`.
///
/// Whitespace (including newlines) between records is insignificant, and
/// anything left after a y value is the start of the next x field. The
/// iterator is fused after the first error.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Point, ParsePointError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.trim().is_empty() {
            self.rest = "";
            return None;
        }
        let Some(comma) = self.rest.find(',') else {
            let record = self.rest.trim().to_string();
            self.rest = "";
            return Some(Err(ParsePointError::MissingDelimiter { record }));
        };
        let x = lenient_x(&self.rest[..comma]);
        let tail = self.rest[comma + 1..].trim_start();
        match leading_i32(tail) {
            Some((y, used)) => {
                self.rest = &tail[used..];
                Some(Ok(Point::new(x, y)))
            }
            None => {
                let field = tail.split_whitespace().next().unwrap_or("").to_string();
                self.rest = "";
                Some(Err(ParsePointError::InvalidY { field }))
            }
        }
    }
}

impl std::iter::FusedIterator for Records<'_> {}

#[inline]
fn lenient_x(field: &str) -> i32 {
    leading_i32(field.trim_start()).map_or(0, |(v, _)| v)
}

/// Optionally signed decimal prefix of `s`: `(value, bytes consumed)`.
/// `None` when no digit follows the sign or the value overflows `i32`.
fn leading_i32(s: &str) -> Option<(i32, usize)> {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    s[..end].parse::<i32>().ok().map(|v| (v, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_order() {
        assert!(Point::new(0, 5) < Point::new(1, 0));
        assert!(Point::new(1, 0) < Point::new(1, 1));
        assert!(!(Point::new(2, 2) < Point::new(2, 2)));
        let mut pts = vec![Point::new(1, 1), Point::new(0, 3), Point::new(1, -1)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(0, 3), Point::new(1, -1), Point::new(1, 1)]
        );
    }

    #[test]
    fn display_and_line() {
        let p = Point::new(-3, 7);
        assert_eq!(p.to_string(), "-3,7");
        assert_eq!(p.to_line(), "-3,7\n");
    }

    #[test]
    fn parse_single_record() {
        assert_eq!("4,-2".parse::<Point>(), Ok(Point::new(4, -2)));
        assert_eq!(" 12, 5".parse::<Point>(), Ok(Point::new(12, 5)));
        // x is permissive
        assert_eq!("abc,5".parse::<Point>(), Ok(Point::new(0, 5)));
        assert_eq!("7q,1".parse::<Point>(), Ok(Point::new(7, 1)));
        // y is strict
        assert!(matches!(
            "1,x".parse::<Point>(),
            Err(ParsePointError::InvalidY { .. })
        ));
        assert!(matches!(
            "15".parse::<Point>(),
            Err(ParsePointError::MissingDelimiter { .. })
        ));
    }

    #[test]
    fn records_follow_stream_rules() {
        let got: Vec<_> = Point::records("0,0\n1, 2\n  -3,4\n\n").collect();
        assert_eq!(
            got,
            vec![
                Ok(Point::new(0, 0)),
                Ok(Point::new(1, 2)),
                Ok(Point::new(-3, 4))
            ]
        );
        // Records need not be on separate lines.
        let flat: Vec<Point> = Point::records("1,1 2,2")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(flat, vec![Point::new(1, 1), Point::new(2, 2)]);
        // An x field runs up to the next comma, across newlines.
        let spanning: Vec<Point> = Point::records("1,2\nfoo\n3,4")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(spanning, vec![Point::new(1, 2), Point::new(0, 4)]);
    }

    #[test]
    fn records_stop_after_bad_y() {
        let mut it = Point::records("1,1\n2,oops\n3,3\n");
        assert_eq!(it.next(), Some(Ok(Point::new(1, 1))));
        assert_eq!(
            it.next(),
            Some(Err(ParsePointError::InvalidY {
                field: "oops".into()
            }))
        );
        assert_eq!(it.next(), None);
    }

    #[test]
    fn records_trailing_garbage_without_comma() {
        let got: Vec<_> = Point::records("5,5\nend").collect();
        assert_eq!(got.len(), 2);
        assert!(matches!(
            got[1],
            Err(ParsePointError::MissingDelimiter { .. })
        ));
    }

    #[test]
    fn extreme_coordinates_widen() {
        let p = Point::new(i32::MIN, i32::MAX);
        let q = Point::new(i32::MAX, i32::MIN);
        let d = q.to_vec2() - p.to_vec2();
        assert_eq!(d.x, 4_294_967_295);
        assert_eq!(d.dot(&d), 2 * 4_294_967_295i128 * 4_294_967_295);
    }
}
