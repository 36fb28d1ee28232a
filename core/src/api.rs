//! Per-feature façades over `RequestClient`.
//!
//! Each façade borrows the client and the injected `Endpoints` and pairs one
//! endpoint with one HTTP method. They add nothing to the client's contract:
//! success payloads and `ApiError`s pass through untouched.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::WeatherUnits;
use crate::client::RequestClient;
use crate::config::{ApiConfig, Endpoints};
use crate::error::ApiError;
use crate::transport::{ReqwestTransport, Transport};

/// Entry point bundling a client with its endpoint configuration.
#[derive(Debug, Clone)]
pub struct EvApi<T = ReqwestTransport> {
    client: RequestClient<T>,
    endpoints: Endpoints,
}

impl EvApi<ReqwestTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(RequestClient::new(&config.base_url), config.endpoints)
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }
}

impl<T: Transport> EvApi<T> {
    pub fn with_client(client: RequestClient<T>, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn driving(&self) -> DrivingApi<'_, T> {
        DrivingApi::new(&self.client, &self.endpoints)
    }

    pub fn weather(&self) -> WeatherApi<'_, T> {
        WeatherApi::new(&self.client, &self.endpoints)
    }

    pub fn battery(&self) -> BatteryApi<'_, T> {
        BatteryApi::new(&self.client, &self.endpoints)
    }

    pub fn optimal_path(&self) -> OptimalPathApi<'_, T> {
        OptimalPathApi::new(&self.client, &self.endpoints)
    }

    pub fn energy(&self) -> EnergyApi<'_, T> {
        EnergyApi::new(&self.client, &self.endpoints)
    }
}

pub struct DrivingApi<'a, T> {
    client: &'a RequestClient<T>,
    endpoints: &'a Endpoints,
}

impl<'a, T: Transport> DrivingApi<'a, T> {
    pub fn new(client: &'a RequestClient<T>, endpoints: &'a Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn predict_driving_style<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<Value, ApiError> {
        self.client.post(&self.endpoints.driving_predict, data).await
    }

    pub async fn demo_data(&self) -> Result<Value, ApiError> {
        self.client.get(&self.endpoints.driving_demo, &[]).await
    }
}

pub struct WeatherApi<'a, T> {
    client: &'a RequestClient<T>,
    endpoints: &'a Endpoints,
}

impl<'a, T: Transport> WeatherApi<'a, T> {
    pub fn new(client: &'a RequestClient<T>, endpoints: &'a Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Current conditions at a point, passed as `lat`, `lon`, `units` query
    /// parameters.
    pub async fn weather(
        &self,
        lat: f64,
        lon: f64,
        units: WeatherUnits,
    ) -> Result<Value, ApiError> {
        let params = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("units", units.as_str().to_string()),
        ];
        self.client.get(&self.endpoints.weather_get, &params).await
    }

    pub async fn weather_post<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, ApiError> {
        self.client.post(&self.endpoints.weather_post, data).await
    }
}

pub struct BatteryApi<'a, T> {
    client: &'a RequestClient<T>,
    endpoints: &'a Endpoints,
}

impl<'a, T: Transport> BatteryApi<'a, T> {
    pub fn new(client: &'a RequestClient<T>, endpoints: &'a Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn predict_range<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, ApiError> {
        self.client.post(&self.endpoints.battery_predict, data).await
    }
}

pub struct OptimalPathApi<'a, T> {
    client: &'a RequestClient<T>,
    endpoints: &'a Endpoints,
}

impl<'a, T: Transport> OptimalPathApi<'a, T> {
    pub fn new(client: &'a RequestClient<T>, endpoints: &'a Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn predict_path<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value, ApiError> {
        self.client
            .post(&self.endpoints.optimal_path_predict, data)
            .await
    }
}

pub struct EnergyApi<'a, T> {
    client: &'a RequestClient<T>,
    endpoints: &'a Endpoints,
}

impl<'a, T: Transport> EnergyApi<'a, T> {
    pub fn new(client: &'a RequestClient<T>, endpoints: &'a Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn predict_consumption<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<Value, ApiError> {
        self.client.post(&self.endpoints.energy_predict, data).await
    }
}
