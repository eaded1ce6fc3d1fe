use serde::Serialize;
use utoipa::ToSchema;

/// A featured travel destination shown on the home page.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Image file name, resolved by the front end.
    pub image: String,
}

impl Destination {
    pub fn new(id: u32, name: &str, description: &str, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}
