//! Cloudinary-compatible image CDN client.
//!
//! Uploads and deletions use signed requests: the signed parameters are sorted by
//! name, joined as `k=v&k=v`, suffixed with the API secret and hashed with SHA-256.

use chrono::Utc;
use dioxus_logger::tracing;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::server::{config::CdnConfig, error::integration::IntegrationError};

const SERVICE: &str = "Image CDN";

/// Transformation applied to listing thumbnails.
pub const THUMBNAIL_TRANSFORM: &str = "c_fill,w_400,h_300,q_auto,f_auto";

/// Marker separating the delivery host from the asset path in CDN URLs.
const UPLOAD_SEGMENT: &str = "/image/upload/";

/// Largest accepted upload in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
    pub public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

pub struct CdnClient<'a> {
    http: &'a reqwest::Client,
    config: &'a CdnConfig,
}

impl<'a> CdnClient<'a> {
    pub fn new(http: &'a reqwest::Client, config: &'a CdnConfig) -> Self {
        Self { http, config }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.cloud_name,
            action
        )
    }

    /// Uploads an image into the configured folder.
    ///
    /// # Returns
    /// - `Ok(UploadedImage)` - Delivery URL and public id of the stored asset
    /// - `Err(IntegrationError)` - Transport failure, non-2xx status or unreadable body
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: String,
        content_type: &str,
    ) -> Result<UploadedImage, IntegrationError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[
                ("folder", self.config.folder.as_str()),
                ("timestamp", timestamp.as_str()),
            ],
            &self.config.api_secret,
        );

        let file = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(content_type)
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;
        let form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let response = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        let image: UploadedImage = read_json(response).await?;
        tracing::info!("Uploaded image {} to CDN", image.public_id);

        Ok(image)
    }

    /// Deletes an asset by public id. An asset that is already gone counts as deleted.
    pub async fn destroy(&self, public_id: &str) -> Result<(), IntegrationError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", public_id), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );

        let params = [
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp),
            ("api_key", self.config.api_key.clone()),
            ("signature_algorithm", "sha256".to_string()),
            ("signature", signature),
        ];

        let response = self
            .http
            .post(self.endpoint("destroy"))
            .form(&params)
            .send()
            .await
            .map_err(|source| IntegrationError::Request {
                service: SERVICE,
                source,
            })?;

        let body: DestroyResponse = read_json(response).await?;
        match body.result.as_str() {
            "ok" | "not found" => Ok(()),
            other => Err(IntegrationError::InvalidPayload {
                service: SERVICE,
                reason: format!("destroy result '{}'", other),
            }),
        }
    }
}

async fn read_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, IntegrationError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(IntegrationError::UpstreamStatus {
            service: SERVICE,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| IntegrationError::Request {
            service: SERVICE,
            source,
        })
}

/// Computes the request signature over `params` with `secret`.
pub fn sign(params: &[(&str, &str)], secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{}{}", to_sign, secret).as_bytes());
    format!("{:x}", digest)
}

/// Delivery URL for `public_id` with a transformation applied.
pub fn transform_url(cloud_name: &str, transform: &str, public_id: &str) -> String {
    format!(
        "https://res.cloudinary.com/{}{}{}/{}",
        cloud_name, UPLOAD_SEGMENT, transform, public_id
    )
}

/// Thumbnail rendition of a stored photo URL.
///
/// CDN-hosted photos get [`THUMBNAIL_TRANSFORM`] spliced in after the upload
/// segment of their delivery URL; external photos are returned unchanged.
pub fn thumbnail_url(url: &str, public_id: Option<&str>) -> String {
    if public_id.is_none() {
        return url.to_string();
    }

    match url.split_once(UPLOAD_SEGMENT) {
        Some((host, asset)) => format!(
            "{}{}{}/{}",
            host, UPLOAD_SEGMENT, THUMBNAIL_TRANSFORM, asset
        ),
        None => url.to_string(),
    }
}

/// Returns the accepted content type, or `None` if uploads of this type are refused.
pub fn accepted_content_type(content_type: Option<&str>) -> Option<&'static str> {
    let content_type = content_type?.split(';').next()?.trim();
    ALLOWED_CONTENT_TYPES
        .iter()
        .copied()
        .find(|allowed| allowed.eq_ignore_ascii_case(content_type))
}
