//! Stand-in for the EV analytics backend.
//!
//! Serves the same routes and JSON contract as the real service: success
//! bodies on 200, `{"error": ...}` bodies on 4xx/5xx. Predictions are simple
//! deterministic formulas instead of trained models. The `fixtures` routes
//! return arbitrary status/body pairs for exercising client error handling.

use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tokio::net::TcpListener;

/// A failed request, rendered as `{"error": message}`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BackendError {
    status: StatusCode,
    message: String,
    required_fields: Option<&'static [&'static str]>,
    /// Rendered as `"success": false`, the way prediction endpoints report
    /// rejected inputs.
    prediction_failed: bool,
}

impl BackendError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            required_fields: None,
            prediction_failed: false,
        }
    }

    fn prediction(message: impl Into<String>) -> Self {
        Self {
            prediction_failed: true,
            ..Self::bad_request(message)
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.message });
        if let Some(fields) = self.required_fields {
            body["required_fields"] = json!(fields);
        }
        if self.prediction_failed {
            body["success"] = json!(false);
        }
        (self.status, Json(body)).into_response()
    }
}

type Handled = Result<Json<Value>, BackendError>;

pub fn app() -> Router {
    let api = Router::new()
        .route("/ping", get(|| async { Json(json!({ "ping": "pong" })) }))
        .route("/driving/demo", get(driving_demo))
        .route("/driving/predict", post(driving_predict))
        .route("/external/weather", get(weather_query).post(weather_body))
        .route("/battery/predict", post(battery_predict))
        .route("/optimal-path/predict", post(optimal_path_predict))
        .route("/energy/predict", post(energy_predict))
        .route("/fixtures/status/{code}", get(fixture_status));

    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("mock backend listening on {addr}");
    }
    axum::serve(listener, app()).await
}

/// Mirrors the backend's "missing or empty body" check.
fn json_object(
    body: Result<Json<Value>, JsonRejection>,
    required: &'static [&'static str],
) -> Result<Map<String, Value>, BackendError> {
    let object = match body {
        Ok(Json(Value::Object(map))) if !map.is_empty() => map,
        _ => return Err(BackendError::bad_request("Request body must be valid JSON")),
    };
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|f| !object.contains_key(*f))
        .collect();
    if !missing.is_empty() {
        return Err(BackendError {
            required_fields: Some(required),
            ..BackendError::bad_request(format!("Missing required fields: {}", missing.join(", ")))
        });
    }
    Ok(object)
}

fn number(object: &Map<String, Value>, key: &str) -> Result<f64, BackendError> {
    let parsed = match object.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| BackendError::bad_request(format!("{key} must be a number")))
}

fn text<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str, BackendError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| BackendError::bad_request(format!("{key} must be a string")))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

async fn driving_demo() -> Json<Value> {
    Json(json!({
        "module": "driving",
        "controller": "demo",
        "status": "ok",
        "message": "Driving controller demo is live",
    }))
}

async fn driving_predict(body: Result<Json<Value>, JsonRejection>) -> Handled {
    let object = json_object(body, &["avg_speed"])?;
    let avg_speed = number(&object, "avg_speed")?;
    let style = match avg_speed {
        s if s < 50.0 => "Eco",
        s if s <= 80.0 => "Normal",
        _ => "Aggressive",
    };
    Ok(Json(json!({
        "success": true,
        "driving_style": style,
        "avg_speed": avg_speed,
    })))
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    lat: Option<String>,
    lon: Option<String>,
    units: Option<String>,
}

async fn weather_query(Query(params): Query<WeatherParams>) -> Handled {
    let (Some(lat), Some(lon)) = (params.lat, params.lon) else {
        return Err(BackendError::bad_request("Missing required query params: lat, lon"));
    };
    let (Ok(lat), Ok(lon)) = (lat.parse::<f64>(), lon.parse::<f64>()) else {
        return Err(BackendError::bad_request("lat and lon must be numbers"));
    };
    Ok(Json(weather_report(lat, lon, params.units.as_deref().unwrap_or("metric"))))
}

async fn weather_body(body: Result<Json<Value>, JsonRejection>) -> Handled {
    let object = match body {
        Ok(Json(Value::Object(map))) => map,
        _ => Map::new(),
    };
    if !object.contains_key("lat") || !object.contains_key("lon") {
        return Err(BackendError::bad_request("JSON body must include lat and lon"));
    }
    let (Ok(lat), Ok(lon)) = (number(&object, "lat"), number(&object, "lon")) else {
        return Err(BackendError::bad_request("lat and lon must be numbers"));
    };
    let units = object.get("units").and_then(Value::as_str).unwrap_or("metric");
    Ok(Json(weather_report(lat, lon, units)))
}

fn weather_report(lat: f64, lon: f64, units: &str) -> Value {
    let temperature = if units == "imperial" { 85.1 } else { 29.5 };
    json!({
        "lat": lat,
        "lon": lon,
        "units": units,
        "temperature": temperature,
        "humidity": 78,
        "condition": "sunny",
    })
}

async fn battery_predict(body: Result<Json<Value>, JsonRejection>) -> Handled {
    const REQUIRED: &[&str] = &["battery_capacity_kWh", "battery_percent", "efficiency_kWh_per_km"];
    let object = json_object(body, REQUIRED)?;
    let capacity = number(&object, "battery_capacity_kWh")?;
    let percent = number(&object, "battery_percent")?.clamp(0.0, 100.0);
    let efficiency = number(&object, "efficiency_kWh_per_km")?;
    if efficiency <= 0.0 {
        return Err(BackendError::prediction("efficiency_kWh_per_km must be positive"));
    }

    let available = percent / 100.0 * capacity;
    let range = available / efficiency;
    Ok(Json(json!({
        "success": true,
        "predicted_range_km": round2(range),
        "theoretical_range_km": round2(range),
        "available_energy_kWh": round2(available),
        "battery_percent": percent,
    })))
}

fn style_factor(style: &str) -> Option<f64> {
    match style {
        "Eco" => Some(0.9),
        "Normal" => Some(1.0),
        "Aggressive" => Some(1.2),
        _ => None,
    }
}

/// (energy factor, average speed in km/h)
fn road_profile(road: &str) -> Option<(f64, f64)> {
    match road {
        "city" => Some((1.0, 30.0)),
        "highway" => Some((1.1, 80.0)),
        "rural" => Some((0.95, 50.0)),
        "coastal" => Some((1.05, 45.0)),
        _ => None,
    }
}

async fn energy_predict(body: Result<Json<Value>, JsonRejection>) -> Handled {
    const REQUIRED: &[&str] = &["distance_km", "driving_style", "road_type", "weather"];
    let object = json_object(body, REQUIRED)?;
    let distance = number(&object, "distance_km")?;
    let style = text(&object, "driving_style")?;
    let road = text(&object, "road_type")?;
    let elevation = match object.get("elevation_gain_m") {
        Some(_) => number(&object, "elevation_gain_m")?,
        None => 0.0,
    };

    let style_factor = style_factor(style)
        .ok_or_else(|| BackendError::prediction(format!("Invalid driving_style: {style}")))?;
    let (road_factor, _) = road_profile(road)
        .ok_or_else(|| BackendError::prediction(format!("Invalid road_type: {road}")))?;

    let energy = distance * 0.15 * style_factor * road_factor + elevation * 0.002;
    Ok(Json(json!({
        "success": true,
        "predicted_energy_kWh": round2(energy),
        "distance_km": distance,
        "driving_style": style,
        "road_type": road,
    })))
}

async fn optimal_path_predict(body: Result<Json<Value>, JsonRejection>) -> Handled {
    const REQUIRED: &[&str] = &[
        "distance_km",
        "road_type",
        "traffic_level",
        "driving_style",
        "predicted_energy_kWh",
        "predicted_range_km",
        "battery_remaining_percent",
    ];
    let object = json_object(body, REQUIRED)?;
    let distance = number(&object, "distance_km")?;
    let road = text(&object, "road_type")?;
    let traffic = text(&object, "traffic_level")?;
    let range = number(&object, "predicted_range_km")?;

    let (_, speed) = road_profile(road)
        .ok_or_else(|| BackendError::prediction(format!("Invalid road_type: {road}")))?;
    let delay = match traffic {
        "low" => 1.0,
        "medium" => 1.25,
        "high" => 1.6,
        other => return Err(BackendError::prediction(format!("Invalid traffic_level: {other}"))),
    };

    Ok(Json(json!({
        "success": true,
        "expected_travel_time_min": round2(distance / speed * 60.0 * delay),
        "reachable": range >= distance,
        "distance_km": distance,
    })))
}

#[derive(Debug, Deserialize)]
struct FixtureParams {
    #[serde(default)]
    body: String,
}

/// Reply with an arbitrary status and raw text body.
async fn fixture_status(Path(code): Path<u16>, Query(params): Query<FixtureParams>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, [(header::CONTENT_TYPE, "text/plain")], params.body).into_response(),
        Err(_) => BackendError::bad_request(format!("invalid status code: {code}")).into_response(),
    }
}
