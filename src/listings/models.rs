use serde::Deserialize;

// payload
//  └── results: [
//       ├── price
//       ├── area_name
//       ├── property_type
//       ├── attributes
//       │    ├── bedrooms
//       │    ├── bathrooms
//       │    ├── garage_spaces
//       │    ├── land_size
//       │    └── description
//       └── coordinates
//            ├── latitude
//            └── longitude
//      ]

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Property>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub price: Option<f64>,
    #[serde(default)]
    pub area_name: String,
    pub property_type: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attributes {
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    #[serde(rename = "garage_spaces")]
    pub garage_spaces: Option<f64>,
    #[serde(rename = "land_size")]
    pub land_size: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}
