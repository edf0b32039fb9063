//! Frontend Models
//!
//! Data structures matching backend records. Field names follow the
//! backend's camelCase; numeric property fields are decoded leniently
//! because the backend sends them as either numbers or strings.

use chrono::{DateTime, Utc};
use collection_view::CollectionItem;
use serde::{Deserialize, Deserializer, Serialize};

/// Contact request from the enquiry form (admin "Leads" table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub requirements: String,
    pub budget: String,
    #[serde(default)]
    pub marked: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Name + phone captured by the brochure download modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrochureLead {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub marked: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Plot inquiry (admin "Plots" table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotInquiry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub user_type: String,
    #[serde(rename = "plotSize")]
    pub plot_size: String,
    pub location: String,
    pub message: String,
    #[serde(default)]
    pub marked: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Listing purpose as stored on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Buy,
    Sell,
    Rent,
    Lease,
}

impl Purpose {
    pub fn label(self) -> &'static str {
        match self {
            Purpose::Buy => "Buy",
            Purpose::Sell => "Sell",
            Purpose::Rent => "Rent",
            Purpose::Lease => "Lease",
        }
    }
}

/// Property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub purpose: Purpose,
    pub location: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bedrooms: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bathrooms: Option<String>,
    #[serde(rename = "areaSqft", default, deserialize_with = "lenient_string")]
    pub area_sqft: Option<String>,
    #[serde(default)]
    pub builder: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl CollectionItem for Lead {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CollectionItem for BrochureLead {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CollectionItem for PlotInquiry {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CollectionItem for Property {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Accept a JSON number or a numeric string
fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }
    Ok(match Option::<NumOrStr>::deserialize(de)? {
        Some(NumOrStr::Num(n)) => Some(n),
        Some(NumOrStr::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Accept a JSON string or a number, keep it for display as a string
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(f64),
    }
    Ok(match Option::<StrOrNum>::deserialize(de)? {
        Some(StrOrNum::Str(s)) => Some(s),
        Some(StrOrNum::Num(n)) => Some(if n.fract() == 0.0 {
            format!("{}", n as i64)
        } else {
            n.to_string()
        }),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_decodes_backend_shape() {
        let json = r#"{
            "_id": "65f1",
            "name": "A",
            "phone": "9999999999",
            "email": "a@b.c",
            "requirements": "Villa",
            "budget": "Below ₹10 Cr",
            "createdAt": "2024-01-02T10:00:00.000Z"
        }"#;
        let lead: Lead = serde_json::from_str(json).expect("lead json");
        assert_eq!(lead.id, "65f1");
        assert!(!lead.marked, "marked defaults to false when absent");
        assert_eq!(lead.created_at.date_naive().to_string(), "2024-01-02");
    }

    #[test]
    fn property_decodes_numeric_slop() {
        let json = r#"{
            "_id": "p1",
            "title": "T",
            "slug": "t",
            "type": "Villa",
            "purpose": "Buy",
            "location": "DLF Phase 1",
            "price": "125000000",
            "bedrooms": 4,
            "areaSqft": "2450",
            "createdAt": "2024-03-01T00:00:00Z"
        }"#;
        let p: Property = serde_json::from_str(json).expect("property json");
        assert_eq!(p.price, Some(125_000_000.0));
        assert_eq!(p.bedrooms.as_deref(), Some("4"));
        assert_eq!(p.bathrooms, None);
        assert_eq!(p.purpose, Purpose::Buy);
        assert!(p.images.is_empty());
    }
}
