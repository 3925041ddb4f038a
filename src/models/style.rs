//! Style configuration accepted at the API boundary.
//!
//! [`StyleConfig`] is the flat, serializable record callers hand in. It is
//! lenient: unknown shape names fall back to the field default and colors
//! stay as strings. [`StyleConfig::resolve`] turns it into a
//! [`ResolvedStyle`] with concrete RGB triples, which is what the renderer
//! consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::Rgb;
use crate::utils::color::{parse_hex, to_hex};

macro_rules! shape_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase", from = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lower-case name used in serialized configs
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Parse a name, substituting the default for anything unrecognized
            pub fn from_name_lenient(name: &str) -> Self {
                name.parse::<$name>().unwrap_or_else(|_| {
                    warn!(
                        kind = stringify!($name),
                        value = name,
                        fallback = $name::$default.as_str(),
                        "unrecognized shape name, using default"
                    );
                    $name::$default
                })
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("unknown {} '{}'", stringify!($name), other)),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from_name_lenient(&value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

shape_enum! {
    /// Shape applied to each dark data module outside the eyes
    BodyShape, default = Square {
        /// Axis-aligned square filling the cell
        #[default]
        Square => "square",
        /// Rounded square, corner radius 0.2 modules
        Rounded => "rounded",
        /// Small circle, diameter 0.6 modules
        Dots => "dots",
        /// Circle filling the cell, diameter 1 module
        Circle => "circle",
    }
}

shape_enum! {
    /// Shape of an eye's outer frame or inner ball
    EyeShape, default = Square {
        /// Axis-aligned square
        #[default]
        Square => "square",
        /// Rounded square
        Rounded => "rounded",
        /// Circle
        Circle => "circle",
    }
}

shape_enum! {
    /// Decorative border stroked around the whole code
    OuterBorderShape, default = None {
        /// Stroked rectangle
        Square => "square",
        /// Stroked rounded rectangle
        Rounded => "rounded",
        /// Stroked circle; also clips body and eyes to the inscribed circle
        Circle => "circle",
        /// No border
        #[default]
        None => "none",
    }
}

/// Foreground used when the configured string is unparsable
pub const DEFAULT_FOREGROUND: &str = "#000000";
/// Background used when the configured string is unparsable
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Caller-facing style record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Shape of dark data modules
    #[serde(deserialize_with = "lenient_shape")]
    pub body_shape: BodyShape,
    /// Shape of the 7x7 eye frame
    #[serde(deserialize_with = "lenient_shape")]
    pub eye_frame_shape: EyeShape,
    /// Shape of the 3x3 eye ball
    #[serde(deserialize_with = "lenient_shape")]
    pub eye_ball_shape: EyeShape,
    /// Optional outer border
    #[serde(deserialize_with = "lenient_shape")]
    pub outer_border_shape: OuterBorderShape,
    /// Foreground hex color (`#RRGGBB`)
    #[serde(deserialize_with = "lenient_foreground")]
    pub foreground_color: String,
    /// Background hex color (`#RRGGBB`)
    #[serde(deserialize_with = "lenient_background")]
    pub background_color: String,
}

/// Any JSON value; strings go through the lenient name lookup, everything
/// else becomes the default
fn lenient_shape<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => T::from(name),
        other => {
            warn!(value = %other, "non-string shape value, using default");
            T::default()
        }
    })
}

fn lenient_string<'de, D>(deserializer: D, fallback: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        other => {
            warn!(value = %other, fallback, "non-string color value, using default");
            fallback.to_string()
        }
    })
}

fn lenient_foreground<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_string(deserializer, DEFAULT_FOREGROUND)
}

fn lenient_background<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_string(deserializer, DEFAULT_BACKGROUND)
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            body_shape: BodyShape::default(),
            eye_frame_shape: EyeShape::default(),
            eye_ball_shape: EyeShape::default(),
            outer_border_shape: OuterBorderShape::default(),
            foreground_color: DEFAULT_FOREGROUND.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl StyleConfig {
    /// Parse a JSON style document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve colors to RGB, substituting black/white for unparsable strings
    pub fn resolve(&self) -> ResolvedStyle {
        ResolvedStyle {
            body_shape: self.body_shape,
            eye_frame_shape: self.eye_frame_shape,
            eye_ball_shape: self.eye_ball_shape,
            outer_border_shape: self.outer_border_shape,
            foreground: resolve_color(&self.foreground_color, Rgb::BLACK, "foreground"),
            background: resolve_color(&self.background_color, Rgb::WHITE, "background"),
        }
    }
}

fn resolve_color(value: &str, fallback: Rgb, role: &'static str) -> Rgb {
    parse_hex(value).unwrap_or_else(|| {
        warn!(role, value, "unparsable color, using default");
        fallback
    })
}

/// Style with every field validated and colors resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Shape of dark data modules
    pub body_shape: BodyShape,
    /// Shape of the eye frame
    pub eye_frame_shape: EyeShape,
    /// Shape of the eye ball
    pub eye_ball_shape: EyeShape,
    /// Optional outer border
    pub outer_border_shape: OuterBorderShape,
    /// Foreground color
    pub foreground: Rgb,
    /// Background color
    pub background: Rgb,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        StyleConfig::default().resolve()
    }
}

impl From<ResolvedStyle> for StyleConfig {
    fn from(style: ResolvedStyle) -> Self {
        Self {
            body_shape: style.body_shape,
            eye_frame_shape: style.eye_frame_shape,
            eye_ball_shape: style.eye_ball_shape,
            outer_border_shape: style.outer_border_shape,
            foreground_color: to_hex(style.foreground),
            background_color: to_hex(style.background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity_style() {
        let style = StyleConfig::default().resolve();
        assert_eq!(style.body_shape, BodyShape::Square);
        assert_eq!(style.eye_frame_shape, EyeShape::Square);
        assert_eq!(style.eye_ball_shape, EyeShape::Square);
        assert_eq!(style.outer_border_shape, OuterBorderShape::None);
        assert_eq!(style.foreground, Rgb::BLACK);
        assert_eq!(style.background, Rgb::WHITE);
    }

    #[test]
    fn test_from_json_camel_case() {
        let json = r##"{
            "bodyShape": "dots",
            "eyeFrameShape": "circle",
            "eyeBallShape": "rounded",
            "outerBorderShape": "circle",
            "foregroundColor": "#112233",
            "backgroundColor": "fafafa"
        }"##;
        let config = StyleConfig::from_json(json).unwrap();
        assert_eq!(config.body_shape, BodyShape::Dots);
        assert_eq!(config.eye_frame_shape, EyeShape::Circle);
        assert_eq!(config.eye_ball_shape, EyeShape::Rounded);
        assert_eq!(config.outer_border_shape, OuterBorderShape::Circle);

        let resolved = config.resolve();
        assert_eq!(resolved.foreground, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(resolved.background, Rgb::new(0xfa, 0xfa, 0xfa));
    }

    #[test]
    fn test_resolved_back_to_config() {
        let config = StyleConfig {
            foreground_color: "bogus".into(),
            background_color: "#ABCDEF".into(),
            ..StyleConfig::default()
        };
        let effective = StyleConfig::from(config.resolve());
        assert_eq!(effective.foreground_color, "#000000");
        assert_eq!(effective.background_color, "#abcdef");
        assert_eq!(effective.resolve(), config.resolve());
    }

    #[test]
    fn test_non_string_values_fall_back_to_defaults() {
        let fields = [
            "bodyShape",
            "eyeFrameShape",
            "eyeBallShape",
            "outerBorderShape",
            "foregroundColor",
            "backgroundColor",
        ];
        for field in fields {
            for value in ["null", "3", r#"{"name": "dots"}"#, "[1, 2]", "true"] {
                let json = format!(r#"{{"{field}": {value}}}"#);
                let config = StyleConfig::from_json(&json)
                    .unwrap_or_else(|e| panic!("{json} rejected: {e}"));
                assert_eq!(config, StyleConfig::default(), "{json}");
            }
        }
    }

    #[test]
    fn test_non_string_values_keep_other_fields() {
        let json = r##"{"bodyShape": 3, "eyeBallShape": "circle", "foregroundColor": 5, "backgroundColor": "#101010"}"##;
        let config = StyleConfig::from_json(json).unwrap();
        assert_eq!(config.body_shape, BodyShape::Square);
        assert_eq!(config.eye_ball_shape, EyeShape::Circle);
        assert_eq!(config.foreground_color, DEFAULT_FOREGROUND);
        assert_eq!(config.resolve().background, Rgb::new(0x10, 0x10, 0x10));
    }

    #[test]
    fn test_unknown_shapes_fall_back_to_defaults() {
        let json = r#"{"bodyShape": "hexagon", "eyeFrameShape": "star", "outerBorderShape": "wavy"}"#;
        let config = StyleConfig::from_json(json).unwrap();
        assert_eq!(config.body_shape, BodyShape::Square);
        assert_eq!(config.eye_frame_shape, EyeShape::Square);
        assert_eq!(config.outer_border_shape, OuterBorderShape::None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = StyleConfig::from_json("{}").unwrap();
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_invalid_colors_resolve_to_defaults() {
        let config = StyleConfig {
            foreground_color: "not-a-color".into(),
            background_color: "#12345".into(),
            ..StyleConfig::default()
        };
        let resolved = config.resolve();
        assert_eq!(resolved.foreground, Rgb::BLACK);
        assert_eq!(resolved.background, Rgb::WHITE);
    }

    #[test]
    fn test_shape_names_round_trip_through_serde() {
        for shape in BodyShape::ALL {
            let json = serde_json::to_string(shape).unwrap();
            assert_eq!(json, format!("\"{}\"", shape.as_str()));
            let back: BodyShape = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *shape);
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("Rounded".parse::<EyeShape>(), Ok(EyeShape::Rounded));
        assert!("triangle".parse::<EyeShape>().is_err());
        assert_eq!("none".parse::<OuterBorderShape>(), Ok(OuterBorderShape::None));
    }
}
