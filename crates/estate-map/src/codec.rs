//! Encode and decode map documents
//!
//! JSON is the canonical save format. RON carries the same data model for
//! hand-edited fixtures.

use crate::config::CodecConfig;
use crate::error::{Error, Result, SchemaError};
use crate::schema::MapInfoRoot;
use log::{debug, warn};
use serde_json::error::Category;
use std::io::{Read, Write};

/// Document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    /// JSON (canonical)
    Json,
    /// RON format (Rust Object Notation)
    Ron,
}

impl MapFormat {
    /// Pick a format from a file extension, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(MapFormat::Json),
            "ron" => Some(MapFormat::Ron),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MapFormat::Json => "json",
            MapFormat::Ron => "ron",
        }
    }
}

/// Encoder/decoder for `MapInfoRoot` documents
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a new codec
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode to a string in the specified format
    pub fn encode(&self, root: &MapInfoRoot, format: MapFormat) -> Result<String> {
        if self.config.validate_on_save() {
            check(root)?;
        }

        let text = match format {
            MapFormat::Json => self.to_json(root)?,
            MapFormat::Ron => self.to_ron(root)?,
        };
        debug!(
            "encoded {:?} map: {} buildings, {} terrain, {} bytes",
            format,
            root.mapinfo.map_data.buildings.len(),
            root.mapinfo.map_data.terrain.len(),
            text.len()
        );
        Ok(text)
    }

    /// Decode from a string in the specified format
    ///
    /// Either the whole document decodes or an error is returned.
    pub fn decode(&self, text: &str, format: MapFormat) -> Result<MapInfoRoot> {
        let root = match format {
            MapFormat::Json => from_json_text(text)?,
            MapFormat::Ron => from_ron_text(text)?,
        };

        if self.config.validate_on_load() {
            check(&root)?;
        }
        debug!(
            "decoded {:?} map by {:?}: {} buildings, {} terrain",
            format,
            root.mapinfo.user,
            root.mapinfo.map_data.buildings.len(),
            root.mapinfo.map_data.terrain.len()
        );
        Ok(root)
    }

    /// Encode to a writer
    pub fn encode_to_writer<W: Write>(
        &self,
        root: &MapInfoRoot,
        writer: &mut W,
        format: MapFormat,
    ) -> Result<()> {
        let content = self.encode(root, format)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Read a reader to the end and decode it
    pub fn decode_from_reader<R: Read>(
        &self,
        reader: &mut R,
        format: MapFormat,
    ) -> Result<MapInfoRoot> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.decode(&content, format)
    }

    fn to_json(&self, root: &MapInfoRoot) -> Result<String> {
        let text = if self.config.pretty() {
            serde_json::to_string_pretty(root)
        } else {
            serde_json::to_string(root)
        };
        text.map_err(|e| SchemaError::Encode(e.to_string()).into())
    }

    fn to_ron(&self, root: &MapInfoRoot) -> Result<String> {
        let text = if self.config.pretty() {
            ron::ser::to_string_pretty(root, ron::ser::PrettyConfig::default())
        } else {
            ron::to_string(root)
        };
        text.map_err(|e| SchemaError::Encode(e.to_string()).into())
    }
}

fn check(root: &MapInfoRoot) -> Result<()> {
    root.validate().map_err(|e| {
        warn!("map by {:?} rejected: {}", root.mapinfo.user, e);
        Error::from(e)
    })
}

fn from_json_text(text: &str) -> std::result::Result<MapInfoRoot, SchemaError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| SchemaError::Malformed {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

    if value.get("mapinfo").is_none() {
        return Err(SchemaError::MissingRoot);
    }

    // Typed pass over the text, not the value: a value keeps only the last
    // occurrence of a repeated key.
    serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Data => SchemaError::from_data_message(e.to_string()),
        _ => SchemaError::Malformed {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        },
    })
}

fn from_ron_text(text: &str) -> std::result::Result<MapInfoRoot, SchemaError> {
    ron::from_str(text).map_err(|e| match &e.code {
        ron::Error::MissingStructField { field, .. } if *field == "mapinfo" => {
            SchemaError::MissingRoot
        }
        ron::Error::MissingStructField { field, .. } => SchemaError::MissingField(field.to_string()),
        _ => SchemaError::InvalidValue(e.to_string()),
    })
}

/// Encode with the default configuration as pretty JSON
pub fn to_json(root: &MapInfoRoot) -> Result<String> {
    Codec::default().encode(root, MapFormat::Json)
}

/// Decode JSON with the default configuration
pub fn from_json(text: &str) -> Result<MapInfoRoot> {
    Codec::default().decode(text, MapFormat::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Rotation;
    use crate::schema::{Building, MapInfo, Position, Terrain};
    use crate::validate::ValidationError;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn village() -> MapInfoRoot {
        let mut info = MapInfo::new("alice", "river village", "1.2.0");
        info.date = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap();
        let data = &mut info.map_data;
        data.push_building(Building::new("b1", 3, (2, 5), Rotation::East));
        data.push_building(Building::new("b2", 11, (-4, 0), Rotation::West));
        data.push_building(Building::new("b0", 3, (9, 9), Rotation::South));
        data.push_terrain(Terrain::new("t1", 7, (2, 6), Rotation::North));
        data.push_terrain(Terrain::new("t2", 7, Position::new(-3, 10), Rotation::North));
        MapInfoRoot::new(info)
    }

    #[test]
    fn test_json_round_trip_preserves_everything() {
        let root = village();
        let text = to_json(&root).unwrap();
        let back = from_json(&text).unwrap();
        assert_eq!(back, root);

        let ids: Vec<&str> = back
            .mapinfo
            .map_data
            .buildings
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b1", "b2", "b0"]);
    }

    #[test]
    fn test_round_trip_keeps_sub_second_time() {
        let mut root = village();
        root.mapinfo.date = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let back = from_json(&to_json(&root).unwrap()).unwrap();
        assert_eq!(back.mapinfo.date, root.mapinfo.date);
    }

    #[test]
    fn test_ron_round_trip() {
        let codec = Codec::default();
        let root = village();
        let text = codec.encode(&root, MapFormat::Ron).unwrap();
        let back = codec.decode(&text, MapFormat::Ron).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_empty_map_document() {
        let root = MapInfoRoot::default();
        let codec = Codec::new(CodecConfig::default().with_pretty(false));
        let text = codec.encode(&root, MapFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let date = serde_json::to_value(root.mapinfo.date).unwrap();
        assert!(date.is_string());
        assert_eq!(
            value,
            json!({
                "mapinfo": {
                    "user": "",
                    "description": "",
                    "version": "",
                    "date": date,
                    "mapData": { "buildings": [], "terrain": [] }
                }
            })
        );
        assert!(text.starts_with(r#"{"mapinfo":{"user":"","description":"","version":"","date":"#));
        assert!(text.ends_with(r#""mapData":{"buildings":[],"terrain":[]}}}"#));

        let back = codec.decode(&text, MapFormat::Json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_enum_written_as_integer() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&village()).unwrap()).unwrap();
        let b1 = &value["mapinfo"]["mapData"]["buildings"][0];
        assert_eq!(b1["rotation"], json!(90));
        assert_eq!(b1["typeId"], json!(3));
        assert_eq!(b1["position"], json!({ "x": 2, "y": 5 }));
    }

    #[test]
    fn test_invalid_rotation_is_schema_error() {
        let text = to_json(&village()).unwrap().replacen("\"rotation\": 90", "\"rotation\": 45", 1);
        match from_json(&text) {
            Err(Error::Schema(SchemaError::InvalidValue(message))) => {
                assert!(message.contains("rotation"), "{message}");
                assert!(message.contains("45"), "{message}");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_is_malformed() {
        let err = from_json(r#"{"mapinfo": {"user": "a",}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Schema(SchemaError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_root_key() {
        let err = from_json(r#"{"mapInfo": {}}"#).unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::MissingRoot)));

        let err = from_json("[]").unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::MissingRoot)));
    }

    #[test]
    fn test_missing_position_is_missing_field() {
        let text = r#"{"mapinfo": {
            "user": "", "description": "", "version": "",
            "date": "2024-03-09T14:30:05Z",
            "mapData": {
                "buildings": [{ "id": "b1", "typeId": 3, "rotation": 0 }],
                "terrain": []
            }
        }}"#;
        let err = from_json(text).unwrap_err();
        match err {
            Error::Schema(SchemaError::MissingField(field)) => assert_eq!(field, "position"),
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_rotation_key_is_rejected() {
        let text = r#"{"mapinfo": {
            "user": "", "description": "", "version": "",
            "date": "2024-03-09T14:30:05Z",
            "mapData": {
                "buildings": [{ "id": "b1", "typeId": 3, "position": {"x": 0, "y": 0},
                    "rotation": 45, "rotation": 90 }],
                "terrain": []
            }
        }}"#;
        match from_json(text) {
            Err(Error::Schema(SchemaError::InvalidValue(message))) => {
                assert!(message.contains("invalid rotation value: 45"), "{message}");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_valid_key_is_rejected() {
        let text = r#"{"mapinfo": {
            "user": "a", "user": "b", "description": "", "version": "",
            "date": "2024-03-09T14:30:05Z",
            "mapData": { "buildings": [], "terrain": [] }
        }}"#;
        match from_json(text) {
            Err(Error::Schema(SchemaError::InvalidValue(message))) => {
                assert!(message.contains("duplicate field `user`"), "{message}");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_date_is_missing_field() {
        let text = r#"{"mapinfo": {
            "user": "", "description": "", "version": "",
            "mapData": { "buildings": [], "terrain": [] }
        }}"#;
        match from_json(text) {
            Err(Error::Schema(SchemaError::MissingField(field))) => assert_eq!(field, "date"),
            other => panic!("expected missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_null_sequence_is_rejected() {
        let text = r#"{"mapinfo": {
            "user": "", "description": "", "version": "",
            "date": "2024-03-09T14:30:05Z",
            "mapData": { "buildings": null, "terrain": [] }
        }}"#;
        let err = from_json(text).unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::InvalidValue(_))));
    }

    #[test]
    fn test_duplicate_id_rejected_on_load() {
        let text = r#"{"mapinfo": {
            "user": "", "description": "", "version": "",
            "date": "2024-03-09T14:30:05Z",
            "mapData": {
                "buildings": [{ "id": "a1", "typeId": 3, "position": {"x": 0, "y": 0}, "rotation": 0 }],
                "terrain": [{ "id": "a1", "typeId": 7, "position": {"x": 0, "y": 1}, "rotation": 0 }]
            }
        }}"#;
        let err = from_json(text).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DuplicateId { .. })
        ));

        let lenient = Codec::new(CodecConfig::lenient());
        let root = lenient.decode(text, MapFormat::Json).unwrap();
        assert_eq!(root.mapinfo.map_data.len(), 2);
        assert!(root.validate().is_err());
    }

    #[test]
    fn test_duplicate_id_rejected_on_save() {
        let mut root = village();
        root.mapinfo
            .map_data
            .push_terrain(Terrain::new("b2", 7, (0, 0), Rotation::North));

        let err = to_json(&root).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let lenient = Codec::new(CodecConfig::lenient());
        assert!(lenient.encode(&root, MapFormat::Json).is_ok());
    }

    #[test]
    fn test_ron_missing_root() {
        let err = Codec::default().decode("()", MapFormat::Ron).unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::MissingRoot)));
    }

    #[test]
    fn test_writer_and_reader() {
        let codec = Codec::default();
        let root = village();
        let mut buf = Vec::new();
        codec.encode_to_writer(&root, &mut buf, MapFormat::Json).unwrap();
        let back = codec
            .decode_from_reader(&mut buf.as_slice(), MapFormat::Json)
            .unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(MapFormat::from_extension("JSON"), Some(MapFormat::Json));
        assert_eq!(MapFormat::from_extension("ron"), Some(MapFormat::Ron));
        assert_eq!(MapFormat::from_extension("txt"), None);
        assert_eq!(MapFormat::Ron.extension(), "ron");
    }
}
