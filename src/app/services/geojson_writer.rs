//! GeoJSON output for parsed stations
//!
//! Builds a FeatureCollection of Point features and writes it in one piece:
//! the document goes to a temporary file next to the target, which is then
//! renamed over it.

use crate::app::models::Station;
use crate::{Error, Result};
use geojson::FeatureCollection;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Build the collection, rejecting non-finite coordinates
pub fn build_feature_collection(stations: &[Station]) -> Result<FeatureCollection> {
    let features = stations
        .iter()
        .map(Station::as_feature)
        .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Serialize stations as GeoJSON text with non-ASCII characters kept literal
pub fn to_geojson_string(stations: &[Station]) -> Result<String> {
    let collection = build_feature_collection(stations)?;
    serde_json::to_string(&collection)
        .map_err(|e| Error::serialization("failed to serialize FeatureCollection", e))
}

/// Write stations to `path`, replacing any existing file
pub fn write_geojson(stations: &[Station], path: &Path) -> Result<u64> {
    let document = to_geojson_string(stations)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(directory).map_err(|e| {
        Error::io(
            format!("failed to create temporary file in {}", directory.display()),
            e,
        )
    })?;

    temp_file
        .write_all(document.as_bytes())
        .and_then(|_| temp_file.flush())
        .map_err(|e| Error::io("failed to write GeoJSON document", e))?;

    temp_file
        .persist(path)
        .map_err(|e| Error::io(format!("failed to replace {}", path.display()), e.error))?;

    debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(document.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::tests::gangnam;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_empty_collection() {
        let document = to_geojson_string(&[]).unwrap();
        let json: Value = serde_json::from_str(&document).unwrap();

        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"], Value::Array(vec![]));
    }

    #[test]
    fn test_feature_shape() {
        let document = to_geojson_string(&[gangnam()]).unwrap();
        let json: Value = serde_json::from_str(&document).unwrap();
        let feature = &json["features"][0];

        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(
            feature["geometry"]["coordinates"],
            serde_json::json!([127.027, 37.497])
        );
        assert_eq!(feature["properties"]["한글역명"], "강남");
        assert_eq!(feature["properties"]["환승"], true);
        assert_eq!(feature["properties"]["부역명"], Value::Null);
    }

    #[test]
    fn test_non_ascii_is_written_literally() {
        let document = to_geojson_string(&[gangnam()]).unwrap();

        assert!(document.contains("\"한글역명\":\"강남\""));
        assert!(document.contains("江南"));
        assert!(!document.contains("\\u"));
    }

    #[test]
    fn test_feature_order_is_preserved() {
        let mut second = gangnam();
        second.korean_name = Some("역삼".to_string());
        let mut third = gangnam();
        third.korean_name = Some("선릉".to_string());

        let collection = build_feature_collection(&[gangnam(), second, third]).unwrap();
        let names: Vec<&str> = collection
            .features
            .iter()
            .filter_map(|feature| feature.properties.as_ref())
            .filter_map(|properties| properties["한글역명"].as_str())
            .collect();

        assert_eq!(names, vec!["강남", "역삼", "선릉"]);
    }

    #[test]
    fn test_nan_coordinate_is_rejected() {
        let mut station = gangnam();
        station.longitude = f64::NAN;

        let err = to_geojson_string(&[gangnam(), station]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteCoordinate { .. }));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stations.geojson");
        std::fs::write(&path, "stale").unwrap();

        let bytes = write_geojson(&[gangnam()], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        assert_eq!(bytes, written.len() as u64);
        assert!(written.starts_with('{'));
        assert!(written.contains("강남"));
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stations.geojson");
        let mut station = gangnam();
        station.latitude = f64::INFINITY;

        assert!(write_geojson(&[station], &path).is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
