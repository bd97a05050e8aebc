//! Typed row identifiers
//!
//! Every table keys its rows with a `SERIAL` integer. Each table gets its own
//! newtype so a guest id can never be passed where a property id is expected.
//! Upstream callers hand ids over as strings, so all of them parse from `&str`
//! and deserialize from either a JSON string or a JSON number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Error when parsing an identifier from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be positive")]
    NotPositive,
}

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Create an id from a raw database key
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the inner database key
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let id = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| IdParseError::InvalidFormat)?;
                if id <= 0 {
                    return Err(IdParseError::NotPositive);
                }
                Ok(Self(id))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_i32(self.0)
            }
        }

        // Deserialize from string or number
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                use serde::de::{self, Visitor};

                struct IdVisitor;

                impl<'de> Visitor<'de> for IdVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str(concat!("a string or integer representing a ", $what, " id"))
                    }

                    fn visit_i64<E>(self, value: i64) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        i32::try_from(value)
                            .map($name)
                            .map_err(|_| de::Error::custom(concat!($what, " id out of range")))
                    }

                    fn visit_u64<E>(self, value: u64) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        i32::try_from(value)
                            .map($name)
                            .map_err(|_| de::Error::custom(concat!($what, " id out of range")))
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$name, E>
                    where
                        E: de::Error,
                    {
                        $name::parse(value).map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_any(IdVisitor)
            }
        }
    };
}

row_id!(
    /// Primary key of the `users` table
    UserId,
    "user"
);

row_id!(
    /// Primary key of the `properties` table
    PropertyId,
    "property"
);

row_id!(
    /// Primary key of the `reservations` table
    ReservationId,
    "reservation"
);
