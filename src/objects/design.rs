//! Design request and response types.
//!
//! A design is a customizable merchandise template owned by a designer.
//! It is created once, then referenced by identifier from every later
//! operation (logo color, sizes, shipping, ordering).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request body for creating a new design.
///
/// All fields are required; `price` must be non-negative (checked by the
/// client before dispatch, not by this type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDesign {
    pub designer_id: String,
    pub design_name: String,
    pub design_description: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub price: Decimal,
}

/// A logo color selection: symbolic name, hex code, and RGB triple.
///
/// The `[u8; 3]` component type enforces the 0–255 channel range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoColor {
    pub name: String,
    pub hex: String,
    pub rgb: [u8; 3],
}

/// Request body for setting the logo color of an existing design.
///
/// Overwrites any previously chosen color; the server keeps no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLogoColorRequest {
    pub color: LogoColor,
    pub design_id: String,
}

/// Response returned after a design is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignCreated {
    pub design_id: String,
    pub designer_id: String,
    pub design_name: String,
    pub design_description: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub price: Decimal,
    /// Creation time of the design.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Full design record returned by `GET /designs/{id}`.
///
/// The image metadata fields are only present once artwork has been
/// uploaded for the design, so all of them are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDetails {
    pub design_id: String,
    pub designer_id: String,
    pub design_name: String,
    pub design_description: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub price: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_timestamp: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub image_upload_timestamp: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_format: Option<String>,
}

/// Response returned after the logo color is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoColorSet {
    pub design_id: String,
    pub logo_color: LogoColor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_design_serializes_to_camel_case() {
        let design = NewDesign {
            designer_id: "designer123".to_owned(),
            design_name: "Cool Cat".to_owned(),
            design_description: "Cat wearing sunglasses".to_owned(),
            categories: vec!["Animals".to_owned(), "Humor".to_owned()],
            tags: vec!["cat".to_owned(), "cool".to_owned(), "sunglasses".to_owned()],
            price: Decimal::new(1999, 2),
        };

        let value = serde_json::to_value(&design).unwrap();
        assert_eq!(
            value,
            json!({
                "designerId": "designer123",
                "designName": "Cool Cat",
                "designDescription": "Cat wearing sunglasses",
                "categories": ["Animals", "Humor"],
                "tags": ["cat", "cool", "sunglasses"],
                "price": 19.99
            })
        );
    }

    #[test]
    fn set_logo_color_request_shape() {
        let request = SetLogoColorRequest {
            color: LogoColor {
                name: "Red".to_owned(),
                hex: "#FF0000".to_owned(),
                rgb: [255, 0, 0],
            },
            design_id: "123".to_owned(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "color": {"name": "Red", "hex": "#FF0000", "rgb": [255, 0, 0]},
                "designId": "123"
            })
        );
    }

    #[test]
    fn design_details_parses_without_image_metadata() {
        let json = r#"{
            "designId": "123",
            "designerId": "designer123",
            "designName": "Cool Cat",
            "designDescription": "Cat wearing sunglasses",
            "categories": ["Animals"],
            "tags": ["cat"],
            "price": 19.99,
            "creationTimestamp": "2023-07-10T15:00:00Z"
        }"#;
        let details: DesignDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.design_id, "123");
        assert!(details.image_id.is_none());
        assert!(details.image_upload_timestamp.is_none());
    }

    #[test]
    fn out_of_range_rgb_component_is_rejected() {
        let result: Result<LogoColor, _> =
            serde_json::from_str(r##"{"name": "Red", "hex": "#FF0000", "rgb": [256, 0, 0]}"##);
        assert!(result.is_err());
    }
}
