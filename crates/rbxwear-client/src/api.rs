//! Domain methods for the Roblox asset client.
//!
//! Asset lookup, clothing image download, multipart upload with operation
//! polling, and on-sale configuration. Response shapes the service documents
//! are parsed into typed structs; pass-through payloads stay `serde_json::Value`.

use reqwest::header::COOKIE;
use reqwest::multipart;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::time::sleep;
use uuid::Uuid;

use rbxwear_core::constants::{
    CSRF_HEADER, SALE_LOCATION_TYPE, SALE_PUBLISHING_TYPE, SALE_RESALE_RESTRICTION,
    SALE_TARGET_TYPE, UPLOAD_EXPECTED_PRICE,
};
use rbxwear_core::error::{Error, Result};
use rbxwear_core::models::{Asset, AssetDetails, BatchUploadItem, ClothingAsset, Creator};

/// Asset details response, PascalCase per the economy endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AssetDetailsResponse {
    asset_id: u64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    asset_type_id: u32,
    creator: CreatorResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreatorResponse {
    id: u64,
    name: String,
    creator_type: rbxwear_core::models::CreatorKind,
}

impl crate::RobloxClient {
    /// Look up an asset by id.
    ///
    /// The concrete variant of the result is decided by the asset-type code
    /// the service reports, not by the caller's intent: clothing codes come
    /// back as [`AssetDetails::Clothing`], everything else as
    /// [`AssetDetails::Other`].
    pub async fn get_asset(&self, asset_id: u64) -> Result<AssetDetails> {
        let url = self.request_url(&self.config().endpoints.asset_details(asset_id));
        let response = self.fetch_headers(self.http().get(&url)).send().await?;
        let response = self.check_status(response, "asset lookup").await?;

        let details: AssetDetailsResponse = serde_json::from_str(&response.text().await?)?;
        let asset = Asset {
            id: details.asset_id,
            creator: Creator {
                id: details.creator.id,
                name: details.creator.name,
                kind: details.creator.creator_type,
            },
            name: details.name,
            description: details.description.unwrap_or_default(),
            asset_type_id: details.asset_type_id,
        };

        tracing::debug!(
            asset_id = asset.id,
            asset_type_id = asset.asset_type_id,
            "Fetched asset details"
        );

        Ok(AssetDetails::from_asset(asset))
    }

    /// Download the texture image behind a clothing asset.
    ///
    /// The service stores a wearable's texture as a separate template asset
    /// referenced through an XML descriptor, so this is a two-hop fetch: get
    /// the descriptor for the asset's own id, extract the template id from
    /// its `url` element, then get the template's bytes.
    pub async fn download_clothing_image(&self, asset: &ClothingAsset) -> Result<Vec<u8>> {
        let descriptor = self.fetch_asset_delivery(asset.id()).await?;
        let xml = descriptor.text().await?;
        let template_id = template_id_from_xml(&xml)?;

        tracing::debug!(
            asset_id = asset.id(),
            template_id,
            "Resolved clothing template"
        );

        let image = self.fetch_asset_delivery(template_id).await?;
        Ok(image.bytes().await?.to_vec())
    }

    async fn fetch_asset_delivery(&self, asset_id: u64) -> Result<reqwest::Response> {
        let url = self.request_url(&self.config().endpoints.asset_delivery(asset_id));
        let response = self.fetch_headers(self.http().get(&url)).send().await?;
        self.check_status(response, "asset delivery").await
    }

    /// Upload a clothing image and wait (bounded) for the resulting asset.
    ///
    /// When the service answers with an asynchronous `operationId`, the
    /// operation status is polled up to `poll_max_attempts` times with
    /// `poll_interval` sleeps. A completed operation yields
    /// `{"asset_id": ...}` when an asset id is present, or the raw completion
    /// payload. If the operation never completes within the attempt limit,
    /// the initial upload response is returned unchanged rather than an
    /// error.
    pub async fn upload_clothing_image(&self, item: &BatchUploadItem) -> Result<Value> {
        let csrf = self.fetch_csrf_token().await?;
        let url = self.request_url(&self.config().endpoints.upload());

        let meta = json!({
            "displayName": item.name,
            "description": item.description,
            "assetType": item.asset_type.id(),
            "creationContext": {
                "creator": { "groupId": item.group_id },
                "expectedPrice": UPLOAD_EXPECTED_PRICE,
            },
        });

        let form = multipart::Form::new()
            .part(
                "request",
                multipart::Part::text(meta.to_string()).mime_str("application/json")?,
            )
            .part(
                "fileContent",
                multipart::Part::bytes(item.image.clone())
                    .file_name("clothing_upload")
                    .mime_str("image/png")?,
            );

        tracing::info!(
            name = %item.name,
            asset_type_id = item.asset_type.id(),
            group_id = item.group_id,
            image_size = item.image.len(),
            "Uploading clothing image"
        );

        let response = self
            .upload_headers(self.http().post(&url))
            .header(CSRF_HEADER, &csrf)
            .multipart(form)
            .send()
            .await?;
        let response = self.check_status(response, "upload").await?;
        let data: Value = serde_json::from_str(&response.text().await?)?;

        let operation_id = data
            .get("operationId")
            .and_then(Value::as_str)
            .map(str::to_owned);

        if let Some(operation_id) = operation_id {
            tracing::info!(operation_id = %operation_id, "Upload accepted, polling operation");

            for attempt in 1..=self.config().poll_max_attempts {
                sleep(self.config().poll_interval).await;

                let op_data = self.poll_operation(&csrf, &operation_id).await?;
                if op_data.get("done").and_then(Value::as_bool).unwrap_or(false) {
                    tracing::info!(
                        operation_id = %operation_id,
                        attempt,
                        "Upload operation completed"
                    );
                    if let Some(asset_id) = op_data
                        .pointer("/response/assetId")
                        .filter(|value| !value.is_null())
                    {
                        return Ok(json!({ "asset_id": asset_id }));
                    }
                    return Ok(op_data);
                }
            }

            tracing::warn!(
                operation_id = %operation_id,
                attempts = self.config().poll_max_attempts,
                "Upload operation still pending, returning initial response"
            );
        }

        Ok(data)
    }

    async fn poll_operation(&self, csrf: &str, operation_id: &str) -> Result<Value> {
        let url = self.request_url(&self.config().endpoints.operation(operation_id));
        let response = self
            .http()
            .get(&url)
            .header(COOKIE, self.cookie_value())
            .header(CSRF_HEADER, csrf)
            .send()
            .await?;
        let response = self.check_status(response, "operation status").await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    /// Put an uploaded asset on sale.
    ///
    /// The idempotency token is generated fresh per call; it is the remote
    /// service's deduplication key, so a retry wrapper must reuse the token
    /// across attempts of the same logical request and never across two
    /// distinct ones.
    pub async fn put_on_sale(
        &self,
        asset_id: u64,
        name: &str,
        description: &str,
        group_id: u64,
        price: u64,
    ) -> Result<Value> {
        let csrf = self.fetch_csrf_token().await?;

        let payload = json!({
            "saleLocationConfiguration": {
                "saleLocationType": SALE_LOCATION_TYPE,
                "places": [],
            },
            "targetId": asset_id,
            "priceInRobux": price,
            "publishingType": SALE_PUBLISHING_TYPE,
            "idempotencyToken": Uuid::new_v4().to_string(),
            "publisherUserId": self.publisher_user_id(),
            "creatorGroupId": group_id,
            "name": name,
            "description": description,
            "isFree": false,
            "agreedPublishingFee": 0,
            "priceOffset": 0,
            "quantity": 0,
            "quantityLimitPerUser": 0,
            "resaleRestriction": SALE_RESALE_RESTRICTION,
            "targetType": SALE_TARGET_TYPE,
        });

        tracing::info!(asset_id, price, group_id, "Putting asset on sale");

        let url = self.request_url(&self.config().endpoints.collectibles());
        let response = self
            .browser_headers(self.http().post(&url))
            .header(CSRF_HEADER, &csrf)
            .json(&payload)
            .send()
            .await?;
        let response = self.check_status(response, "onsale").await?;

        Ok(serde_json::from_str(&response.text().await?)?)
    }
}

/// Extract the clothing template id from an asset-delivery XML descriptor.
///
/// The template id is embedded in the query string of the descriptor's `url`
/// element after the `id=` marker. Nothing beyond "whatever follows `id=`"
/// is validated; a malformed url here is an unrecoverable parse error.
fn template_id_from_xml(xml: &str) -> Result<u64> {
    let document = roxmltree::Document::parse(xml)
        .map_err(|err| Error::Parse(format!("invalid asset delivery XML: {}", err)))?;

    let url_node = document
        .descendants()
        .find(|node| node.has_tag_name("url"))
        .ok_or_else(|| Error::Parse("XML did not contain a <url> tag".to_string()))?;

    let url = url_node.text().unwrap_or("");
    if url.is_empty() {
        return Err(Error::Parse(
            "<url> tag did not contain any text".to_string(),
        ));
    }

    let (_, id) = url
        .split_once("id=")
        .ok_or_else(|| Error::Parse(format!("no id= marker in template url: {}", url)))?;

    id.trim()
        .parse()
        .map_err(|err| Error::Parse(format!("invalid template id in url {}: {}", url, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIRT_XML: &str = r#"<roblox xmlns:xmime="http://www.w3.org/2005/05/xmlmime" version="4">
  <Item class="Shirt" referent="RBX0">
    <Properties>
      <Content name="ShirtTemplate">
        <url>http://www.roblox.com/asset/?id=80789317092375</url>
      </Content>
      <string name="Name">Shirt</string>
    </Properties>
  </Item>
</roblox>"#;

    #[test]
    fn extracts_template_id_from_url_tag() {
        assert_eq!(template_id_from_xml(SHIRT_XML).unwrap(), 80789317092375);
    }

    #[test]
    fn missing_url_tag_is_a_parse_error() {
        let err = template_id_from_xml("<root><other>data</other></root>").unwrap_err();
        match err {
            Error::Parse(message) => assert!(message.contains("<url> tag"), "{}", message),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_url_tag_is_a_parse_error() {
        let err = template_id_from_xml("<root><url></url></root>").unwrap_err();
        match err {
            Error::Parse(message) => {
                assert!(message.contains("did not contain any text"), "{}", message)
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn url_without_id_marker_is_a_parse_error() {
        let err =
            template_id_from_xml("<root><url>http://roblox.com/asset/</url></root>").unwrap_err();
        match err {
            Error::Parse(message) => assert!(message.contains("id="), "{}", message),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_template_id_is_a_parse_error() {
        let err = template_id_from_xml("<root><url>http://roblox.com/asset/?id=abc</url></root>")
            .unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = template_id_from_xml("<root><url>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
