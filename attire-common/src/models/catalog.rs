// File: attire-common/src/models/catalog.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Broad clothing family a catalog entry belongs to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Saree,
    Agbada,
    Hanfu,
    Kimono,
    Kurta,
    Cheongsam,
    Kente,
    Dirndl,
    Other,
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothingCategory::Saree => write!(f, "saree"),
            ClothingCategory::Agbada => write!(f, "agbada"),
            ClothingCategory::Hanfu => write!(f, "hanfu"),
            ClothingCategory::Kimono => write!(f, "kimono"),
            ClothingCategory::Kurta => write!(f, "kurta"),
            ClothingCategory::Cheongsam => write!(f, "cheongsam"),
            ClothingCategory::Kente => write!(f, "kente"),
            ClothingCategory::Dirndl => write!(f, "dirndl"),
            ClothingCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for ClothingCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saree" => Ok(ClothingCategory::Saree),
            "agbada" => Ok(ClothingCategory::Agbada),
            "hanfu" => Ok(ClothingCategory::Hanfu),
            "kimono" => Ok(ClothingCategory::Kimono),
            "kurta" => Ok(ClothingCategory::Kurta),
            "cheongsam" => Ok(ClothingCategory::Cheongsam),
            "kente" => Ok(ClothingCategory::Kente),
            "dirndl" => Ok(ClothingCategory::Dirndl),
            "other" => Ok(ClothingCategory::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Region of origin for a garment, also used to key size charts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Region {
    SouthAsia,
    WestAfrica,
    EastAsia,
    SoutheastAsia,
    MiddleEast,
    Europe,
    LatinAmerica,
    Oceania,
    Other,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::SouthAsia => "South Asia",
            Region::WestAfrica => "West Africa",
            Region::EastAsia => "East Asia",
            Region::SoutheastAsia => "Southeast Asia",
            Region::MiddleEast => "Middle East",
            Region::Europe => "Europe",
            Region::LatinAmerica => "Latin America",
            Region::Oceania => "Oceania",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "south asia" => Ok(Region::SouthAsia),
            "west africa" => Ok(Region::WestAfrica),
            "east asia" => Ok(Region::EastAsia),
            "southeast asia" => Ok(Region::SoutheastAsia),
            "middle east" => Ok(Region::MiddleEast),
            "europe" => Ok(Region::Europe),
            "latin america" => Ok(Region::LatinAmerica),
            "oceania" => Ok(Region::Oceania),
            "other" => Ok(Region::Other),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}

/// One size option offered for a catalog entry, with its US conversion.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Size {
    pub id: String,
    /// Sizing system the native value belongs to, e.g. "India" or "Nigeria".
    pub region: String,
    pub value: String,
    pub us_equivalent: String,
}

/// A single catalog entry. Seed data only; items are never created or
/// destroyed at runtime.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ClothingCategory,
    pub origin: Region,
    pub image_url: String,
    pub model_image_url: Option<String>,
    pub price: f64,
    pub affiliate_link: String,
    pub sizes: Vec<Size>,
    pub colors: Vec<String>,
}

impl ClothingItem {
    /// Image used as the stand-in try-on result. Falls back to the catalog
    /// photo when no dedicated model shot exists.
    pub fn render_image(&self) -> &str {
        self.model_image_url.as_deref().unwrap_or(&self.image_url)
    }
}
