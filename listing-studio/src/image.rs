//! Encoded image helpers: data URI prefix handling.

/// 请求中声明的图片 MIME 类型。
pub const PNG_MIME_TYPE: &str = "image/png";

const DATA_URI_FORMATS: [&str; 4] = ["png", "jpeg", "jpg", "webp"];

/// 去掉可识别的 `data:image/{png|jpeg|jpg|webp};base64,` 前缀，返回原始 base64。
///
/// 没有可识别前缀时原样返回；内容本身不做校验，交给服务端判断。
/// 重复的前缀会被全部去掉，因此结果再次调用时保持不变。
#[must_use]
pub fn strip_data_uri_prefix(image: &str) -> &str {
    let mut current = image;
    while let Some(rest) = strip_once(current) {
        current = rest;
    }
    current
}

fn strip_once(image: &str) -> Option<&str> {
    let rest = image.strip_prefix("data:image/")?;
    DATA_URI_FORMATS.iter().find_map(|format| {
        rest.strip_prefix(format)
            .and_then(|tail| tail.strip_prefix(";base64,"))
    })
}

/// 把原始 base64 包装为 PNG data URI。
#[must_use]
pub fn to_png_data_uri(data: &str) -> String {
    format!("data:{PNG_MIME_TYPE};base64,{data}")
}
