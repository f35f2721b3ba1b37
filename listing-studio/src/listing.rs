//! Marketplace listing copy generated from product photos.

use listing_studio_types::config::GenerationConfig;
use listing_studio_types::content::{Content, Part, Role};
use listing_studio_types::models::GenerateContentConfig;
use listing_studio_types::response::GenerateContentResponse;
use listing_studio_types::schema::Schema;
use listing_studio_types::studio::ListingContent;

use crate::error::{Error, Result};
use crate::image::{strip_data_uri_prefix, PNG_MIME_TYPE};
use crate::models::Models;

/// 单次请求建议的最大图片数。
pub const MAX_LISTING_IMAGES: usize = 4;

const LISTING_PROMPT: &str = "Act as a professional copywriter for OLX and Vinted in Poland.
Analyze these candle photos.
Write a sales listing in Polish (Polski).

Return JSON with:
- title: Catchy, SEO-optimized title (max 70 chars).
- description: Persuasive description emphasizing atmosphere, scent (guess if visible), and quality.
- tags: Array of 5-10 hashtags.";

#[derive(Clone)]
pub struct Listings {
    models: Models,
}

impl Listings {
    pub(crate) const fn new(models: Models) -> Self {
        Self { models }
    }

    /// 根据商品照片生成刊登文案（标题、描述、标签）。
    ///
    /// 图片按传入顺序放在提示词之前发送。
    ///
    /// # Errors
    /// 响应中没有文本时返回 [`Error::NoTextProduced`]；文本不是合法 JSON 时返回
    /// [`Error::Serialization`]；网络或服务端错误原样返回。
    pub async fn generate<S: AsRef<str>>(&self, images: &[S]) -> Result<ListingContent> {
        if images.len() > MAX_LISTING_IMAGES {
            tracing::warn!(
                count = images.len(),
                max = MAX_LISTING_IMAGES,
                "more listing images than recommended, sending all of them"
            );
        }

        let mut parts: Vec<Part> = images
            .iter()
            .map(|image| Part::inline_data(strip_data_uri_prefix(image.as_ref()), PNG_MIME_TYPE))
            .collect();
        parts.push(Part::text(LISTING_PROMPT));

        let config = GenerateContentConfig {
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".into()),
                response_schema: Some(listing_schema()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let response = self
            .models
            .generate_content_with_config(
                self.models.text_model(),
                vec![Content::from_parts(parts, Role::User)],
                config,
            )
            .await?;
        parse_listing(&response)
    }
}

/// 结构化输出约束：三个必填字段的 JSON 对象。
#[must_use]
pub fn listing_schema() -> Schema {
    Schema::object()
        .property("title", Schema::string())
        .property("description", Schema::string())
        .property("tags", Schema::array().items(Schema::string()).build())
        .required("title")
        .required("description")
        .required("tags")
        .build()
}

fn parse_listing(response: &GenerateContentResponse) -> Result<ListingContent> {
    let text = response
        .text()
        .filter(|text| !text.is_empty())
        .ok_or(Error::NoTextProduced)?;
    let listing: ListingContent = serde_json::from_str(&text)?;
    tracing::debug!(tags = listing.tags.len(), "listing text parsed");
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_studio_types::enums::Type;
    use serde_json::{json, Value};

    fn text_response(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        }))
        .unwrap()
    }

    #[test]
    fn schema_matches_listing_content_fields() {
        let schema = listing_schema();
        let sample = serde_json::to_value(ListingContent {
            title: "t".into(),
            description: "d".into(),
            tags: vec!["a".into()],
        })
        .unwrap();
        let Value::Object(fields) = sample else {
            panic!("listing content should serialize as an object");
        };

        let mut record_fields: Vec<&str> = fields.keys().map(String::as_str).collect();
        let mut required: Vec<&str> = schema
            .required
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        record_fields.sort_unstable();
        required.sort_unstable();
        assert_eq!(record_fields, required);

        assert_eq!(schema.ty, Some(Type::Object));
        assert_eq!(schema.property("title").and_then(|s| s.ty), Some(Type::String));
        assert_eq!(
            schema.property("description").and_then(|s| s.ty),
            Some(Type::String)
        );
        let tags = schema.property("tags").unwrap();
        assert_eq!(tags.ty, Some(Type::Array));
        assert_eq!(tags.items.as_deref().and_then(|s| s.ty), Some(Type::String));
    }

    #[test]
    fn prompt_targets_polish_marketplaces() {
        assert!(LISTING_PROMPT.contains("Polish"));
        assert!(LISTING_PROMPT.contains("OLX"));
        assert!(LISTING_PROMPT.contains("Vinted"));
    }

    #[test]
    fn parse_listing_keeps_tag_order() {
        let listing = parse_listing(&text_response(
            r#"{"title":"Zapach Wanilii","description":"Piękna świeca...","tags":["swieca","wanilia"]}"#,
        ))
        .unwrap();
        assert_eq!(listing.title, "Zapach Wanilii");
        assert_eq!(listing.description, "Piękna świeca...");
        assert_eq!(listing.tags, vec!["swieca", "wanilia"]);
    }

    #[test]
    fn parse_listing_requires_text() {
        assert!(matches!(
            parse_listing(&GenerateContentResponse::default()),
            Err(Error::NoTextProduced)
        ));
        assert!(matches!(
            parse_listing(&text_response("")),
            Err(Error::NoTextProduced)
        ));
    }

    #[test]
    fn parse_listing_propagates_json_errors() {
        assert!(matches!(
            parse_listing(&text_response("Oto opis świecy")),
            Err(Error::Serialization { .. })
        ));
        assert!(matches!(
            parse_listing(&text_response(r#"{"title":"only a title"}"#)),
            Err(Error::Serialization { .. })
        ));
    }
}
