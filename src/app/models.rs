//! Core data models for railway station metadata
//!
//! A [`Station`] is one row of the 전국 도시광역철도 역사정보 sheet. Field names
//! serialize as the Korean column names of the source dataset, in column order.

use crate::{Error, Result};
use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};
use serde::{Deserialize, Serialize};

/// Railway station with guaranteed coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "운영기관명")]
    pub operator_name: Option<String>,

    #[serde(rename = "노선명")]
    pub line_name: Option<String>,

    #[serde(rename = "역번호")]
    pub station_number: Option<String>,

    #[serde(rename = "한글역명")]
    pub korean_name: Option<String>,

    #[serde(rename = "영어역명")]
    pub english_name: Option<String>,

    #[serde(rename = "로마자역명")]
    pub romanized_name: Option<String>,

    #[serde(rename = "일본어역명")]
    pub japanese_name: Option<String>,

    #[serde(rename = "중국어간체역명")]
    pub chinese_simplified_name: Option<String>,

    #[serde(rename = "중국어번체역명")]
    pub chinese_traditional_name: Option<String>,

    #[serde(rename = "부역명")]
    pub sub_name: Option<String>,

    #[serde(rename = "환승")]
    pub has_transfer: bool,

    #[serde(rename = "환승노선명")]
    pub transfer_line_names: Option<String>,

    #[serde(rename = "경도")]
    pub longitude: f64,

    #[serde(rename = "위도")]
    pub latitude: f64,

    #[serde(rename = "도로명주소")]
    pub road_address: Option<String>,

    #[serde(rename = "전화번호")]
    pub phone_number: Option<String>,

    #[serde(rename = "신설일자")]
    pub opening_date: Option<String>,

    #[serde(rename = "데이터기준일자")]
    pub data_reference_date: Option<String>,
}

impl Station {
    /// Name used in log and error messages
    pub fn display_name(&self) -> &str {
        self.korean_name.as_deref().unwrap_or("<unnamed>")
    }

    /// Fail if either coordinate is NaN or infinite
    pub fn ensure_finite_coordinates(&self) -> Result<()> {
        if self.longitude.is_finite() && self.latitude.is_finite() {
            Ok(())
        } else {
            Err(Error::non_finite_coordinate(
                self.display_name(),
                self.longitude,
                self.latitude,
            ))
        }
    }

    /// Station properties as a JSON object
    pub fn properties(&self) -> Result<JsonObject> {
        match serde_json::to_value(self)? {
            JsonValue::Object(map) => Ok(map),
            _ => Ok(JsonObject::new()),
        }
    }

    /// Point feature at `[longitude, latitude]` carrying every field
    pub fn as_feature(&self) -> Result<Feature> {
        self.ensure_finite_coordinates()?;

        Ok(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![
                self.longitude,
                self.latitude,
            ]))),
            id: None,
            properties: Some(self.properties()?),
            foreign_members: None,
        })
    }
}
