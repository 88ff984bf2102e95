//! OpenStreetMap Nominatim geocoding client.

use reqwest::header::USER_AGENT;
use serde::Deserialize;
use url::Url;

use crate::{
    model::geocode::GeocodeResultDto,
    server::{config::GeocodeConfig, error::integration::IntegrationError},
};

const SERVICE: &str = "Geocoding service";

/// Maximum forward-geocoding results returned.
const SEARCH_LIMIT: &str = "5";

/// Forward search is restricted to Indonesia.
const COUNTRY_CODES: &str = "id";

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn into_dto(self) -> GeocodeResultDto {
        GeocodeResultDto {
            display_name: self.display_name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn into_place(self) -> Result<Place, IntegrationError> {
        let parse = |value: &str| {
            value
                .parse::<f64>()
                .map_err(|_| IntegrationError::InvalidPayload {
                    service: SERVICE,
                    reason: format!("coordinate '{}' is not a number", value),
                })
        };

        Ok(Place {
            latitude: parse(&self.lat)?,
            longitude: parse(&self.lon)?,
            display_name: self.display_name,
        })
    }
}

/// Reverse lookups answer `{"error": "..."}` with status 200 when nothing is found.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReverseResponse {
    Found(NominatimPlace),
    NotFound { error: String },
}

pub struct GeocodingClient<'a> {
    http: &'a reqwest::Client,
    config: &'a GeocodeConfig,
}

impl<'a> GeocodingClient<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a GeocodeConfig) -> Self {
        Self { http, config }
    }

    fn url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, IntegrationError> {
        let base = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        Url::parse_with_params(&base, params).map_err(|e| IntegrationError::InvalidEndpoint {
            service: SERVICE,
            reason: e.to_string(),
        })
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, IntegrationError> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntegrationError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Forward-geocodes free text into at most five places in Indonesia.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, IntegrationError> {
        let url = self.url(
            "search",
            &[
                ("q", query),
                ("format", "json"),
                ("limit", SEARCH_LIMIT),
                ("countrycodes", COUNTRY_CODES),
            ],
        )?;

        let places: Vec<NominatimPlace> =
            self.get(url)
                .await?
                .json()
                .await
                .map_err(|source| IntegrationError::Request {
                    service: SERVICE,
                    source,
                })?;

        places.into_iter().map(NominatimPlace::into_place).collect()
    }

    /// Reverse-geocodes a coordinate. `Ok(None)` when no address is known there.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Place>, IntegrationError> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let url = self.url(
            "reverse",
            &[("lat", lat.as_str()), ("lon", lon.as_str()), ("format", "json")],
        )?;

        let response: ReverseResponse =
            self.get(url)
                .await?
                .json()
                .await
                .map_err(|source| IntegrationError::Request {
                    service: SERVICE,
                    source,
                })?;

        match response {
            ReverseResponse::Found(place) => place.into_place().map(Some),
            ReverseResponse::NotFound { .. } => Ok(None),
        }
    }
}
