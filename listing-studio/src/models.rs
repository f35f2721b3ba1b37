//! Models API surface (`generateContent` only).

use std::sync::Arc;

use listing_studio_types::content::Content;
use listing_studio_types::models::{GenerateContentConfig, GenerateContentRequest};
use listing_studio_types::response::GenerateContentResponse;

use crate::client::ClientInner;
use crate::error::{Error, Result};

mod http;

use http::build_model_method_url;

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 背景替换使用的模型。
    pub(crate) fn image_model(&self) -> &str {
        &self.inner.config.image_model
    }

    /// 刊登文案使用的模型。
    pub(crate) fn text_model(&self) -> &str {
        &self.inner.config.text_model
    }

    /// 生成内容（默认配置）。
    ///
    /// # Errors
    /// 当网络请求失败、服务端返回非 2xx 状态或响应无法解析时返回错误。
    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse> {
        self.generate_content_with_config(model, contents, GenerateContentConfig::default())
            .await
    }

    /// 生成内容（自定义配置）。单次请求，不重试。
    ///
    /// # Errors
    /// 当网络请求失败、服务端返回非 2xx 状态或响应无法解析时返回错误。
    pub async fn generate_content_with_config(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
        config: GenerateContentConfig,
    ) -> Result<GenerateContentResponse> {
        let model = model.into();
        let request = GenerateContentRequest::new(contents, config);
        let url = build_model_method_url(&self.inner, &model, "generateContent");

        tracing::debug!(
            model = %model,
            parts = request.part_count(),
            "sending generateContent request"
        );
        let response = self
            .inner
            .send(self.inner.http.post(url).json(&request))
            .await?;
        if !response.status().is_success() {
            return Err(Error::ApiError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json::<GenerateContentResponse>().await?)
    }
}
