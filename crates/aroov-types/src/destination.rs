use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::util::{lenient_f64, lenient_flag, non_empty_string, string_or_list};

/// Destination identifier.
///
/// The API emits integer ids for most rows but string ids for imported ones;
/// both are kept as text and written back in their original shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the card rendered for this destination.
    pub fn card_element_id(&self) -> String {
        format!("card-{}", self.0)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DestinationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for DestinationId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for DestinationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for DestinationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A destination as returned by the API.
///
/// Records are snapshots: the UI keeps liked state and other mutable view
/// state beside them, never inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireRecord")]
pub struct DestinationRecord {
    #[serde(rename = "dest_id")]
    pub id: DestinationId,

    pub name: String,

    pub state: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,

    #[serde(rename = "images", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,

    #[serde(rename = "is_liked", skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
}

/// Destination row as the API sends it. Rows joined from the favourites
/// table carry the favourite's own `id` beside `dest_id`; the destination is
/// `dest_id` whenever it is present.
#[derive(Deserialize)]
struct WireRecord {
    #[serde(default)]
    dest_id: Option<DestinationId>,
    #[serde(default)]
    id: Option<DestinationId>,
    name: String,
    #[serde(default)]
    state: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    price_min: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    price_max: Option<f64>,
    #[serde(rename = "images", default, deserialize_with = "non_empty_string")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    activities: Vec<String>,
    #[serde(rename = "is_liked", default, deserialize_with = "lenient_flag")]
    liked: Option<bool>,
}

impl TryFrom<WireRecord> for DestinationRecord {
    type Error = String;

    fn try_from(wire: WireRecord) -> Result<Self, Self::Error> {
        let id = wire
            .dest_id
            .or(wire.id)
            .ok_or_else(|| format!("destination '{}' has neither dest_id nor id", wire.name))?;
        Ok(Self {
            id,
            name: wire.name,
            state: wire.state,
            kind: wire.kind,
            price_min: wire.price_min,
            price_max: wire.price_max,
            image_url: wire.image_url,
            description: wire.description,
            activities: wire.activities,
            liked: wire.liked,
        })
    }
}

impl DestinationRecord {
    pub fn new(id: impl Into<DestinationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: String::new(),
            kind: String::new(),
            price_min: None,
            price_max: None,
            image_url: None,
            description: None,
            activities: Vec::new(),
            liked: None,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.liked.unwrap_or(false)
    }

    pub fn price_range(&self) -> PriceRange {
        PriceRange {
            min: self.price_min,
            max: self.price_max,
        }
    }
}

/// Estimated cost bounds in Malaysian ringgit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn is_known(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "RM{} - RM{}", min, max),
            (Some(only), None) | (None, Some(only)) => write!(f, "RM{}", only),
            (None, None) => f.write_str("Price on request"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_integer_and_string_ids() {
        let a: DestinationRecord =
            serde_json::from_value(json!({"dest_id": 7, "name": "Langkawi"})).unwrap();
        let b: DestinationRecord =
            serde_json::from_value(json!({"id": "7", "name": "Langkawi"})).unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.card_element_id(), "card-7");
    }

    #[test]
    fn test_record_prefers_dest_id_over_row_id() {
        let record: DestinationRecord =
            serde_json::from_value(json!({"id": 99, "dest_id": 7, "name": "Langkawi"})).unwrap();
        assert_eq!(record.id, DestinationId::from(7));

        let record: DestinationRecord =
            serde_json::from_value(json!({"id": 99, "dest_id": null, "name": "Langkawi"}))
                .unwrap();
        assert_eq!(record.id, DestinationId::from(99));
    }

    #[test]
    fn test_record_without_any_id_is_rejected() {
        let err = serde_json::from_value::<DestinationRecord>(json!({"name": "Langkawi"}))
            .unwrap_err();
        assert!(err.to_string().contains("neither dest_id nor id"));
    }

    #[test]
    fn test_record_lenient_fields() {
        let record: DestinationRecord = serde_json::from_value(json!({
            "dest_id": 3,
            "name": "Cameron Highlands",
            "state": "Pahang",
            "type": "Nature",
            "price_min": "150.00",
            "price_max": 400,
            "images": "",
            "activities": "hiking, tea tasting",
            "is_liked": 1
        }))
        .unwrap();

        assert_eq!(record.price_min, Some(150.0));
        assert_eq!(record.price_max, Some(400.0));
        assert_eq!(record.image_url, None);
        assert_eq!(record.activities, vec!["hiking", "tea tasting"]);
        assert!(record.is_liked());
    }

    #[test]
    fn test_record_missing_optional_fields() {
        let record: DestinationRecord =
            serde_json::from_value(json!({"dest_id": 1, "name": "Penang", "price_max": null}))
                .unwrap();
        assert!(!record.is_liked());
        assert!(!record.price_range().is_known());
        assert_eq!(record.kind, "");
    }

    #[test]
    fn test_id_serializes_in_original_shape() {
        assert_eq!(serde_json::to_value(DestinationId::from(12)).unwrap(), json!(12));
        assert_eq!(
            serde_json::to_value(DestinationId::from("kl-tower")).unwrap(),
            json!("kl-tower")
        );
    }

    #[test]
    fn test_price_range_display() {
        let both = PriceRange {
            min: Some(50.0),
            max: Some(120.5),
        };
        assert_eq!(both.to_string(), "RM50 - RM120.5");

        let only_min = PriceRange {
            min: Some(80.0),
            max: None,
        };
        assert_eq!(only_min.to_string(), "RM80");

        assert_eq!(PriceRange::default().to_string(), "Price on request");
    }
}
