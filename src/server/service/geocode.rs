//! Address search and reverse lookup through the geocoding provider.

use crate::server::{
    config::GeocodeConfig,
    error::AppError,
    integration::geocoding::{GeocodingClient, Place},
};

pub struct GeocodeService<'a> {
    http: &'a reqwest::Client,
    config: &'a GeocodeConfig,
}

impl<'a> GeocodeService<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a GeocodeConfig) -> Self {
        Self { http, config }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Place>, AppError> {
        Ok(GeocodingClient::new(self.http, self.config)
            .search(query.trim())
            .await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No address is known at the coordinate
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Place, AppError> {
        GeocodingClient::new(self.http, self.config)
            .reverse(latitude, longitude)
            .await?
            .ok_or_else(|| AppError::NotFound("No address found at this location".to_string()))
    }
}
