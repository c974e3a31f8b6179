//! Static district and service tables for the demo deployment.
//!
//! DESIGN
//! ======
//! Districts and services are fixed demo data; a production deployment would
//! source both from the backend. Lookups fall back to the raw code so pages
//! stay renderable for codes outside the table.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A district a user can file feedback for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct District {
    /// Short routing code used in URLs (e.g. `"lko"`).
    pub code: &'static str,
    /// Human-readable name.
    pub name: &'static str,
}

/// A public-service category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const DISTRICTS: &[District] = &[
    District { code: "lko", name: "Lucknow" },
    District { code: "del", name: "Delhi" },
    District { code: "mum", name: "Mumbai" },
    District { code: "blr", name: "Bangalore" },
    District { code: "chn", name: "Chennai" },
    District { code: "kol", name: "Kolkata" },
    District { code: "hyd", name: "Hyderabad" },
    District { code: "ahd", name: "Ahmedabad" },
    District { code: "pun", name: "Pune" },
    District { code: "jai", name: "Jaipur" },
];

pub const SERVICES: &[Service] = &[
    Service {
        name: "Water Supply",
        description: "Issues related to water quality, supply timings, and infrastructure",
        icon: "💧",
    },
    Service {
        name: "Electricity",
        description: "Power outages, voltage issues, and billing concerns",
        icon: "⚡",
    },
    Service {
        name: "Sanitation",
        description: "Waste management, sewage systems, and public cleanliness",
        icon: "🧹",
    },
    Service {
        name: "Roads",
        description: "Road conditions, traffic management, and street lighting",
        icon: "🛣️",
    },
    Service {
        name: "Public Transport",
        description: "Bus services, metro operations, and transport infrastructure",
        icon: "🚌",
    },
    Service {
        name: "Healthcare",
        description: "Public hospitals, clinics, and healthcare accessibility",
        icon: "🏥",
    },
];

/// District used when geolocation succeeds; coordinates are not
/// reverse-geocoded in this deployment.
pub fn default_district() -> &'static District {
    &DISTRICTS[0]
}

/// Look up a district by routing code.
pub fn find_district(code: &str) -> Option<&'static District> {
    DISTRICTS.iter().find(|d| d.code == code)
}

/// Display name for a district code, falling back to the raw code.
pub fn district_display_name(code: &str) -> &str {
    find_district(code).map_or(code, |d| d.name)
}

/// Look up a service's icon by name; feedback pages render it next to the
/// service title.
pub fn service_icon(name: &str) -> Option<&'static str> {
    SERVICES.iter().find(|s| s.name == name).map(|s| s.icon)
}

/// Case-insensitive substring filter over the district table, used by the
/// searchable picker. An empty query returns the full table.
pub fn filter_districts(query: &str) -> Vec<&'static District> {
    let needle = query.trim().to_lowercase();
    DISTRICTS
        .iter()
        .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
        .collect()
}
