//! Static reference data shown by the dashboard: vehicle specs, driving
//! styles, weather units and city coordinates.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub name: &'static str,
    pub make: &'static str,
    pub model: &'static str,
    /// kWh
    pub battery_capacity: f64,
    /// kWh per km
    pub consumption: f64,
    /// km
    pub range: f64,
}

pub const VEHICLE_MODELS: &[VehicleModel] = &[
    VehicleModel {
        name: "MG ZS EV",
        make: "MG",
        model: "ZS EV",
        battery_capacity: 50.3,
        consumption: 0.171,
        range: 263.0,
    },
    VehicleModel {
        name: "Tesla Model 3",
        make: "Tesla",
        model: "Model 3",
        battery_capacity: 75.0,
        consumption: 0.15,
        range: 491.0,
    },
    VehicleModel {
        name: "Nissan Leaf",
        make: "Nissan",
        model: "Leaf",
        battery_capacity: 60.0,
        consumption: 0.192,
        range: 311.0,
    },
    VehicleModel {
        name: "BMW iX3",
        make: "BMW",
        model: "iX3",
        battery_capacity: 80.0,
        consumption: 0.178,
        range: 460.0,
    },
    VehicleModel {
        name: "Hyundai Kona Electric",
        make: "Hyundai",
        model: "Kona Electric",
        battery_capacity: 64.0,
        consumption: 0.145,
        range: 484.0,
    },
];

pub fn vehicle_model(name: &str) -> Option<&'static VehicleModel> {
    VEHICLE_MODELS.iter().find(|v| v.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrivingStyle {
    Eco,
    Normal,
    Aggressive,
}

impl DrivingStyle {
    pub const ALL: [DrivingStyle; 3] = [
        DrivingStyle::Eco,
        DrivingStyle::Normal,
        DrivingStyle::Aggressive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DrivingStyle::Eco => "Eco",
            DrivingStyle::Normal => "Normal",
            DrivingStyle::Aggressive => "Aggressive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherUnits {
    #[default]
    Metric,
    Imperial,
}

impl WeatherUnits {
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherUnits::Metric => "metric",
            WeatherUnits::Imperial => "imperial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

pub const SRI_LANKAN_CITIES: &[City] = &[
    City { name: "Colombo", lat: 6.9271, lon: 79.8612 },
    City { name: "Kandy", lat: 7.2906, lon: 80.6337 },
    City { name: "Galle", lat: 6.0535, lon: 80.2210 },
    City { name: "Jaffna", lat: 9.6615, lon: 80.0255 },
    City { name: "Negombo", lat: 7.2008, lon: 79.8358 },
    City { name: "Trincomalee", lat: 8.5874, lon: 81.2152 },
    City { name: "Batticaloa", lat: 7.7310, lon: 81.6747 },
    City { name: "Matara", lat: 5.9549, lon: 80.5550 },
    City { name: "Anuradhapura", lat: 8.3114, lon: 80.4037 },
    City { name: "Ratnapura", lat: 6.6828, lon: 80.4034 },
];

/// Exact, case-sensitive lookup by city name.
pub fn city_coordinates(name: &str) -> Option<Coordinates> {
    SRI_LANKAN_CITIES
        .iter()
        .find(|c| c.name == name)
        .map(City::coordinates)
}
