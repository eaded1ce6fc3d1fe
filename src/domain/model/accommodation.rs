use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// A single accommodation held by the [`AccommodationStore`](crate::AccommodationStore).
///
/// Every field except `id` is copied verbatim from the client, so any of them may be
/// absent if the client never supplied it. Absent fields are omitted from the JSON form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Accommodation {
    /// Store-assigned identifier, never reused within a process lifetime.
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Nightly price, kept exactly as sent (`120` stays an integer, `99.5` a decimal).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Client-supplied fields for creating or updating an accommodation.
///
/// A key that is missing from the request body (or sent as `null`) deserializes to `None`
/// and means "not supplied". Explicit values such as `0` or `""` are `Some` and are applied.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct AccommodationFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Accommodation {
    /// Builds a fresh record from the supplied fields.
    pub fn from_fields(id: u64, fields: AccommodationFields) -> Self {
        Self {
            id,
            name: fields.name,
            location: fields.location,
            price: fields.price,
            description: fields.description,
        }
    }

    /// Overwrites every field present in `fields`; the rest keep their stored values.
    pub fn apply(&mut self, fields: AccommodationFields) {
        if let Some(name) = fields.name {
            self.name = Some(name);
        }
        if let Some(location) = fields.location {
            self.location = Some(location);
        }
        if let Some(price) = fields.price {
            self.price = Some(price);
        }
        if let Some(description) = fields.description {
            self.description = Some(description);
        }
    }
}
