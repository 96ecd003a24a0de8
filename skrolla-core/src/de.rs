//! Custom (de-)serialization implementations for [`serde`].

pub mod point_string {
    //! (De-)serialization support for a [`Point`](crate::Point) as the host's space-separated
    //! string form, like `"0.3 0.7"`.

    use std::fmt;

    use serde::{
        de::{self, Deserializer, Visitor},
        ser::Serializer,
    };

    use crate::Point;

    /// Serialize a point as an `"x y"` string.
    pub fn serialize<S>(value: &Point, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Deserialize an `"x y"` string back into a point.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Point, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PointStringVisitor)
    }

    struct PointStringVisitor;

    impl<'de> Visitor<'de> for PointStringVisitor {
        type Value = Point;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a point encoded as `x y` string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse()
                .map_err(|e| de::Error::custom(format!("failed parsing `{v}`: {e}")))
        }
    }
}

pub mod rgba_string {
    //! (De-)serialization support for a [`Rgba`](crate::Rgba) color as the host's
    //! space-separated string form, like `"0.1 0.1 0.1 0.8"`.

    use std::fmt;

    use serde::{
        de::{self, Deserializer, Visitor},
        ser::Serializer,
    };

    use crate::Rgba;

    /// Serialize a color as an `"r g b a"` string.
    pub fn serialize<S>(value: &Rgba, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Deserialize an `"r g b a"` string back into a color.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RgbaStringVisitor)
    }

    struct RgbaStringVisitor;

    impl<'de> Visitor<'de> for RgbaStringVisitor {
        type Value = Rgba;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a color encoded as `r g b a` string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse()
                .map_err(|e| de::Error::custom(format!("failed parsing `{v}`: {e}")))
        }
    }
}
