//! City coordinates as `x,y` CSV.

use super::city::City;
use crate::error::{AnnealError, Result};
use std::io::{Read, Write};

/// Writes `cities` with an `x,y` header, one city per row in id order.
pub fn write_cities_csv<W: Write>(writer: W, cities: &[City]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for city in cities {
        out.serialize(city)?;
    }
    out.flush()
        .map_err(|e| AnnealError::Csv(csv::Error::from(e)))?;
    Ok(())
}

/// Reads cities written by [`write_cities_csv`].
///
/// Fails with [`AnnealError::ConfigurationMismatch`] if the number of rows
/// is not `expected_count`.
pub fn read_cities_csv<R: Read>(reader: R, expected_count: usize) -> Result<Vec<City>> {
    let mut input = csv::Reader::from_reader(reader);
    let cities = input
        .deserialize::<City>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if cities.len() != expected_count {
        return Err(AnnealError::mismatch(expected_count, cities.len()));
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::circle_cities;

    #[test]
    fn test_header_and_rows() {
        let mut buf = Vec::new();
        write_cities_csv(&mut buf, &[City::new(1.0, 0.0), City::new(-0.5, 0.25)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["x,y", "1.0,0.0", "-0.5,0.25"]);
    }

    #[test]
    fn test_read_back_circle() {
        let cities = circle_cities(16);
        let mut buf = Vec::new();
        write_cities_csv(&mut buf, &cities).unwrap();
        let read = read_cities_csv(buf.as_slice(), 16).unwrap();
        assert_eq!(read, cities);
    }

    #[test]
    fn test_read_wrong_count() {
        let data = "x,y\n1.0,0.0\n0.0,1.0\n";
        let err = read_cities_csv(data.as_bytes(), 3).unwrap_err();
        assert!(err.is_mismatch());
    }

    #[test]
    fn test_read_malformed() {
        let data = "x,y\n1.0,abc\n";
        assert!(matches!(
            read_cities_csv(data.as_bytes(), 1),
            Err(AnnealError::Csv(_))
        ));
    }
}
