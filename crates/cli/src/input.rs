//! Reading `x,y` records from a file or stdin.

use anyhow::{Context, Result};
use graham::Point;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Whole contents of `path`, or of stdin when `None`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Parse every record in `text`.
///
/// A malformed record ends the input (earlier records are kept) unless
/// `strict`, in which case it is an error naming the 1-based record.
pub fn parse_points(text: &str, strict: bool) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (k, record) in Point::records(text).enumerate() {
        match record {
            Ok(p) => points.push(p),
            Err(err) if strict => {
                return Err(err).with_context(|| format!("record {}", k + 1));
            }
            Err(err) => {
                tracing::warn!(record = k + 1, %err, "malformed record ends input");
                break;
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lenient_stops_at_first_bad_record() {
        let pts = parse_points("0,0\n1,1\n2,?\n3,3\n", false).unwrap();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn strict_reports_record_number() {
        let err = parse_points("0,0\n1,1\n2,?\n", true).unwrap_err();
        assert!(format!("{err:#}").contains("record 3"), "{err:#}");
    }

    #[test]
    fn permissive_x_field() {
        let pts = parse_points("foo,4\n", true).unwrap();
        assert_eq!(pts, vec![Point::new(0, 4)]);
    }

    #[test]
    fn empty_input_is_no_points() {
        assert!(parse_points("", true).unwrap().is_empty());
        assert!(parse_points("\n \n", false).unwrap().is_empty());
    }

    #[test]
    fn reads_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "1,2\n3,4\n").unwrap();
        let text = read_source(Some(&path)).unwrap();
        assert_eq!(
            parse_points(&text, true).unwrap(),
            vec![Point::new(1, 2), Point::new(3, 4)]
        );
        assert!(read_source(Some(&dir.path().join("missing.txt"))).is_err());
    }
}
