//! Listing Filters
//!
//! Search / type / budget predicates for the public property pages and
//! the budget option tables for the enquiry form. The budget thresholds
//! are deliberately kept per purpose and per property type, matching
//! the deployed pages (they drift slightly between pages; treated as
//! page-level product copy, not unified here).

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Property, Purpose};

pub const PROPERTY_TYPES: &[&str] = &["Apartment", "Villa", "Builder Floor", "Plot"];

/// Active filter inputs on a listing page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingFilter {
    pub search: String,
    pub property_type: String,
    pub budget: String,
}

impl ListingFilter {
    pub fn matches(&self, purpose: Purpose, property: &Property) -> bool {
        property.purpose == purpose
            && self.search_matches(property)
            && self.type_matches(property)
            && budget_matches(purpose, &self.property_type, &self.budget, property.price)
    }

    fn search_matches(&self, property: &Property) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let query = self.search.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&query);
        hit(&property.location)
            || hit(&property.title)
            || hit(&property.property_type)
            || property.builder.as_deref().is_some_and(hit)
    }

    fn type_matches(&self, property: &Property) -> bool {
        self.property_type.is_empty() || property.property_type == self.property_type
    }
}

/// `(value, label)` pairs for the budget select on a listing page.
/// Buy budgets depend on the selected property type; the select stays
/// empty until a type is chosen.
pub fn budget_options(purpose: Purpose, property_type: &str) -> &'static [(&'static str, &'static str)] {
    match purpose {
        Purpose::Rent => &[
            ("50k-1L", "₹50k – ₹1 Lakh"),
            ("1L-2L", "₹1 – ₹2 Lakh"),
            ("above-2L", "Above ₹2 Lakh"),
        ],
        Purpose::Lease => &[
            ("below-2cr", "Below ₹2 Cr"),
            ("2cr-5cr", "₹2 Cr – ₹5 Cr"),
            ("above-5cr", "Above ₹5 Cr"),
        ],
        Purpose::Buy => match property_type {
            "Plot" => &[
                ("below-8cr", "Below ₹8 Cr"),
                ("8cr-10cr", "₹8 Cr – ₹10 Cr"),
                ("above-10cr", "Above ₹10 Cr"),
            ],
            "Villa" => &[
                ("below-10cr", "Below ₹10 Cr"),
                ("10cr-12cr", "₹10 Cr – ₹12 Cr"),
                ("12cr-14cr", "₹12 Cr – ₹14 Cr"),
                ("above-14cr", "Above ₹14 Cr"),
            ],
            "Apartment" | "Builder Floor" => &[
                ("below-4cr", "Below ₹4 Cr"),
                ("4cr-6cr", "₹4 Cr – ₹6 Cr"),
                ("above-6cr", "Above ₹6 Cr"),
            ],
            _ => &[],
        },
        Purpose::Sell => &[],
    }
}

/// The backend leaves `price` unset on some records. Rent and lease listings
/// without a price pass every budget; buy listings count as ₹0, so only the
/// lowest bucket shows them.
pub fn budget_matches(purpose: Purpose, property_type: &str, budget: &str, price: Option<f64>) -> bool {
    if budget.is_empty() {
        return true;
    }
    let price = match (price, purpose) {
        (Some(p), _) => p,
        (None, Purpose::Buy) => 0.0,
        (None, _) => return true,
    };
    match purpose {
        Purpose::Rent => match budget {
            "50k-1L" => (50_000.0..=100_000.0).contains(&price),
            "1L-2L" => price > 100_000.0 && price <= 200_000.0,
            "above-2L" => price > 200_000.0,
            _ => true,
        },
        Purpose::Lease => match budget {
            "below-2cr" => price < 20_000_000.0,
            "2cr-5cr" => (20_000_000.0..=50_000_000.0).contains(&price),
            "above-5cr" => price > 50_000_000.0,
            _ => true,
        },
        Purpose::Buy => match property_type {
            "Plot" => match budget {
                "below-8cr" => price < 80_000_000.0,
                "8cr-10cr" => (80_000_000.0..=100_000_000.0).contains(&price),
                "above-10cr" => price > 100_000_000.0,
                _ => true,
            },
            "Villa" => match budget {
                "below-10cr" => price < 100_000_000.0,
                "10cr-12cr" => (100_000_000.0..=120_000_000.0).contains(&price),
                "12cr-14cr" => (120_000_000.0..=140_000_000.0).contains(&price),
                "above-14cr" => price > 140_000_000.0,
                _ => true,
            },
            "Apartment" | "Builder Floor" => match budget {
                "below-4cr" => price < 40_000_000.0,
                "4cr-6cr" => (40_000_000.0..=60_000_000.0).contains(&price),
                "above-6cr" => price > 60_000_000.0,
                _ => true,
            },
            _ => true,
        },
        Purpose::Sell => true,
    }
}

/// Budget labels offered by the enquiry form (free text on the backend,
/// so these are sent as-is)
pub fn enquiry_budget_options(purpose: Purpose, requirements: &str) -> &'static [&'static str] {
    match purpose {
        Purpose::Sell => &[],
        Purpose::Rent => &["50k - 1 Lakh", "1Lakh - 2 Lakh", "2Lakh & above"],
        Purpose::Lease => &["Below ₹2 Cr", "₹2 Cr – ₹5 Cr", "Above ₹5 Cr"],
        Purpose::Buy => match requirements {
            "Apartment" | "Builder Floor" => &["Below ₹4 Cr", "₹4 Cr – ₹6 Cr", "Above ₹6 Cr"],
            "Villa" => &[
                "Below ₹10 Cr",
                "₹10 Cr – ₹12 Cr",
                "₹12 Cr – ₹14 Cr",
                "Above ₹14 Cr",
            ],
            "Plot" => &["Below ₹8 Cr", "₹8 Cr – ₹10 Cr", "Above ₹10 Cr"],
            _ => &[],
        },
    }
}

/// Indian mobile number, optional +91 prefix
pub fn phone_is_valid(phone: &str) -> bool {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    let re = PHONE.get_or_init(|| {
        Regex::new(r"^(?:\+91[\s-]?)?[6-9][0-9]{9}$").expect("phone pattern is valid")
    });
    re.is_match(phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn property(purpose: Purpose, property_type: &str, price: Option<f64>) -> Property {
        Property {
            id: "p".into(),
            title: "Sky Residences".into(),
            slug: "sky-residences".into(),
            property_type: property_type.into(),
            purpose,
            location: "Golf Course Road".into(),
            price,
            bedrooms: None,
            bathrooms: None,
            area_sqft: None,
            builder: Some("Acme Homes".into()),
            description: None,
            images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn purpose_gates_the_listing() {
        let filter = ListingFilter::default();
        let p = property(Purpose::Rent, "Apartment", Some(80_000.0));
        assert!(filter.matches(Purpose::Rent, &p));
        assert!(!filter.matches(Purpose::Buy, &p));
    }

    #[test]
    fn search_covers_location_title_type_builder() {
        let p = property(Purpose::Buy, "Villa", None);
        for query in ["golf course", "sky", "villa", "acme"] {
            let filter = ListingFilter {
                search: query.into(),
                ..Default::default()
            };
            assert!(filter.matches(Purpose::Buy, &p), "query {query:?}");
        }
        let miss = ListingFilter {
            search: "warehouse".into(),
            ..Default::default()
        };
        assert!(!miss.matches(Purpose::Buy, &p));
    }

    #[test]
    fn buy_budget_thresholds_depend_on_type() {
        assert!(budget_matches(Purpose::Buy, "Plot", "below-8cr", Some(79_999_999.0)));
        assert!(!budget_matches(Purpose::Buy, "Plot", "below-8cr", Some(80_000_000.0)));
        assert!(budget_matches(Purpose::Buy, "Plot", "8cr-10cr", Some(100_000_000.0)));
        assert!(budget_matches(Purpose::Buy, "Villa", "above-14cr", Some(140_000_001.0)));
        assert!(!budget_matches(Purpose::Buy, "Villa", "above-14cr", Some(140_000_000.0)));
        assert!(budget_matches(Purpose::Buy, "Apartment", "4cr-6cr", Some(50_000_000.0)));
        // no type selected: budget select is empty, predicate passes
        assert!(budget_matches(Purpose::Buy, "", "below-8cr", Some(500_000_000.0)));
    }

    #[test]
    fn rent_and_lease_have_their_own_tables() {
        assert!(budget_matches(Purpose::Rent, "", "50k-1L", Some(75_000.0)));
        assert!(!budget_matches(Purpose::Rent, "", "50k-1L", Some(49_999.0)));
        assert!(budget_matches(Purpose::Rent, "", "above-2L", Some(250_000.0)));
        assert!(budget_matches(Purpose::Lease, "", "2cr-5cr", Some(30_000_000.0)));
        assert!(!budget_matches(Purpose::Lease, "", "below-2cr", Some(20_000_000.0)));
    }

    #[test]
    fn missing_price_passes_every_rent_and_lease_budget() {
        assert!(budget_matches(Purpose::Rent, "", "above-2L", None));
        assert!(budget_matches(Purpose::Lease, "", "2cr-5cr", None));
    }

    #[test]
    fn unpriced_buy_listing_counts_as_zero() {
        assert!(budget_matches(Purpose::Buy, "Villa", "below-10cr", None));
        assert!(!budget_matches(Purpose::Buy, "Villa", "10cr-12cr", None));
        assert!(!budget_matches(Purpose::Buy, "Villa", "above-14cr", None));
        assert!(!budget_matches(Purpose::Buy, "Plot", "8cr-10cr", None));
    }

    #[test]
    fn buy_options_follow_the_selected_type() {
        assert!(budget_options(Purpose::Buy, "").is_empty());
        assert_eq!(budget_options(Purpose::Buy, "Villa").len(), 4);
        assert_eq!(
            budget_options(Purpose::Buy, "Builder Floor"),
            budget_options(Purpose::Buy, "Apartment")
        );
        assert_eq!(budget_options(Purpose::Rent, "ignored").len(), 3);
        assert!(budget_options(Purpose::Sell, "Villa").is_empty());
    }

    #[test]
    fn enquiry_options_follow_purpose_and_requirements() {
        assert!(enquiry_budget_options(Purpose::Sell, "Villa").is_empty());
        assert_eq!(enquiry_budget_options(Purpose::Buy, "Plot").len(), 3);
        assert_eq!(enquiry_budget_options(Purpose::Rent, "").len(), 3);
    }

    #[test]
    fn phone_validation() {
        assert!(phone_is_valid("9876543210"));
        assert!(phone_is_valid("+91 9876543210"));
        assert!(phone_is_valid("+91-9876543210"));
        assert!(!phone_is_valid("12345"));
        assert!(!phone_is_valid("1234567890"));
        assert!(!phone_is_valid("98765 43210"));
    }
}
