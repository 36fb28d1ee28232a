//! Request payloads for the prediction endpoints.
//!
//! # Design
//! Field names follow the backend's JSON schema, including its mixed-case
//! unit suffixes (`battery_capacity_kWh`). The façades accept any
//! `Serialize` value, so these types are a convenience rather than a
//! requirement; responses stay untyped `serde_json::Value`s at this layer.

use serde::{Deserialize, Serialize};

use crate::catalog::{DrivingStyle, WeatherUnits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    City,
    Highway,
    Rural,
    Coastal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryRangeRequest {
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    pub battery_percent: f64,
    #[serde(rename = "efficiency_kWh_per_km")]
    pub efficiency_kwh_per_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPredictionRequest {
    pub distance_km: f64,
    pub driving_style: DrivingStyle,
    pub road_type: RoadType,
    /// Free-form condition such as `sunny` or `light_rain`.
    pub weather: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalPathRequest {
    pub distance_km: f64,
    pub road_type: RoadType,
    pub traffic_level: TrafficLevel,
    pub driving_style: DrivingStyle,
    #[serde(rename = "predicted_energy_kWh")]
    pub predicted_energy_kwh: f64,
    pub predicted_range_km: f64,
    pub battery_remaining_percent: f64,
    /// Used by the backend for a weather lookup when `weather` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
}

/// Body for the POST form of the weather endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub units: WeatherUnits,
}
