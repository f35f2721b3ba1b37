//! Background replacement for product photos.

use listing_studio_types::config::GenerationConfig;
use listing_studio_types::content::{Content, Part, Role};
use listing_studio_types::enums::Modality;
use listing_studio_types::models::GenerateContentConfig;
use listing_studio_types::response::GenerateContentResponse;
use listing_studio_types::studio::BackgroundCategory;

use crate::error::{Error, Result};
use crate::image::{strip_data_uri_prefix, to_png_data_uri, PNG_MIME_TYPE};
use crate::models::Models;

#[derive(Clone)]
pub struct Backgrounds {
    models: Models,
}

impl Backgrounds {
    pub(crate) const fn new(models: Models) -> Self {
        Self { models }
    }

    /// 替换商品照片背景，保留前景主体。
    ///
    /// `image` 可以是原始 base64，也可以是 data URI；返回 `data:image/png;base64,...`。
    ///
    /// # Errors
    /// 响应中没有内联图片时返回 [`Error::NoImageProduced`]；网络或服务端错误原样返回。
    pub async fn replace(&self, image: &str, category: BackgroundCategory) -> Result<String> {
        let contents = vec![Content::from_parts(
            vec![
                Part::inline_data(strip_data_uri_prefix(image), PNG_MIME_TYPE),
                Part::text(background_prompt(category)),
            ],
            Role::User,
        )];
        let config = GenerateContentConfig {
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec![Modality::Text, Modality::Image]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let response = self
            .models
            .generate_content_with_config(self.models.image_model(), contents, config)
            .await?;
        extract_image(&response)
    }
}

/// 背景替换提示词。
#[must_use]
pub fn background_prompt(category: BackgroundCategory) -> String {
    let setting = category.prompt_label();
    format!(
        "Generate a professional product photo of this specific candle placed in a {setting} setting.\n\
         The candle object (jar, wax, wick, label) must be preserved exactly as is.\n\
         Replace the background completely with a high-quality {setting} environment.\n\
         Ensure natural lighting and shadows that match the new environment."
    )
}

fn extract_image(response: &GenerateContentResponse) -> Result<String> {
    if let Some(blob) = response.first_inline_image() {
        tracing::debug!(mime_type = %blob.mime_type, bytes = blob.data.len(), "image part found");
        return Ok(to_png_data_uri(&blob.data));
    }

    tracing::warn!(
        finish_reason = ?response.finish_reason(),
        block_reason = ?response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason),
        text = ?response.text(),
        "image model returned no inline image"
    );
    Err(Error::NoImageProduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_names_category_twice_and_preserves_subject() {
        let prompt = background_prompt(BackgroundCategory::Beach);
        assert_eq!(prompt.matches("beach").count(), 2);
        assert!(prompt.contains("placed in a beach setting"));
        for keyword in ["jar", "wax", "wick", "label", "lighting", "shadows"] {
            assert!(prompt.contains(keyword), "missing {keyword}");
        }
    }

    #[test]
    fn extract_image_wraps_first_inline_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": [
                {"text": "Here is the photo"},
                {"inlineData": {"mimeType": "image/jpeg", "data": "Rmlyc3Q="}},
                {"inlineData": {"mimeType": "image/png", "data": "U2Vjb25k"}}
            ]}}]
        }))
        .unwrap();
        assert_eq!(
            extract_image(&response).unwrap(),
            "data:image/png;base64,Rmlyc3Q="
        );
    }

    #[test]
    fn extract_image_fails_on_text_only_or_empty() {
        let text_only: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "I can't edit this image."}]}}]
        }))
        .unwrap();
        assert!(matches!(
            extract_image(&text_only),
            Err(Error::NoImageProduced)
        ));
        assert!(matches!(
            extract_image(&GenerateContentResponse::default()),
            Err(Error::NoImageProduced)
        ));
    }
}
