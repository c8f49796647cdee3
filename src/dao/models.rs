use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, macros::datetime};

/// Release date used when a record does not carry one.
pub const DEFAULT_RELEASE_DATE: OffsetDateTime = datetime!(1-01-01 0:00 UTC);

/// Game record as persisted in the backing document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameEntity {
    /// Server-assigned identifier, unique within the collection.
    #[serde(default)]
    pub id: i32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Genre label, free text.
    #[serde(default)]
    pub genre: String,
    /// Platform the game runs on.
    #[serde(default)]
    pub platform: String,
    /// Retail price, kept as a fixed-point decimal and written as an exact JSON number.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Studio that developed the game.
    #[serde(default)]
    pub developer: String,
    /// Company that published the game.
    #[serde(default)]
    pub publisher: String,
    /// Release timestamp, stored as RFC 3339.
    #[serde(default = "default_release_date", with = "release_date")]
    pub release_date: OffsetDateTime,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Average rating.
    #[serde(default)]
    pub rating: f64,
}

impl GameEntity {
    /// Overwrite every field but the identifier with the values from `other`.
    pub fn replace_with(&mut self, other: GameEntity) {
        let GameEntity {
            id: _,
            name,
            genre,
            platform,
            price,
            developer,
            publisher,
            release_date,
            description,
            rating,
        } = other;

        self.name = name;
        self.genre = genre;
        self.platform = platform;
        self.price = price;
        self.developer = developer;
        self.publisher = publisher;
        self.release_date = release_date;
        self.description = description;
        self.rating = rating;
    }
}

impl Default for GameEntity {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            genre: String::new(),
            platform: String::new(),
            price: Decimal::ZERO,
            developer: String::new(),
            publisher: String::new(),
            release_date: DEFAULT_RELEASE_DATE,
            description: String::new(),
            rating: 0.0,
        }
    }
}

fn default_release_date() -> OffsetDateTime {
    DEFAULT_RELEASE_DATE
}

/// Serde adapter writing RFC 3339 and reading either RFC 3339 or an offset-less
/// ISO 8601 timestamp, which is interpreted as UTC.
pub mod release_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::{
        OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
        macros::format_description,
    };

    /// Write the date as an RFC 3339 string.
    pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        time::serde::rfc3339::serialize(value, serializer)
    }

    /// Read a date written with or without a UTC offset.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    /// Parse a release date, falling back to the offset-less form.
    pub fn parse(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
        match OffsetDateTime::parse(raw, &Rfc3339) {
            Ok(value) => Ok(value),
            Err(rfc_err) => PrimitiveDateTime::parse(
                raw,
                format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
                ),
            )
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|_| rfc_err),
        }
    }
}
