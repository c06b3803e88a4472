//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“流水线中间结果”解耦：
//! - `ImageSource` 表示已读取为 Data URL 的图片，整体替换、从不原地修改
//! - `RawImageData` 表示从 Data URL 解析出的原始字节，尚未解码

use std::fmt;

/// 图片来源（Data URL）。
///
/// 由加载器创建，归控制器所有；每次上传都整体替换。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Data URL 头部声明的 MIME 类型（纯 Base64 输入时为 `None`）。
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.trim().strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }
}

impl fmt::Display for ImageSource {
    /// 只输出头部与长度，避免日志被整段 Base64 刷屏。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImageSource({}, {} chars)",
            self.mime_type().unwrap_or("unknown"),
            self.0.len()
        )
    }
}

/// 解析阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志）。
    pub(crate) source_hint: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_reads_data_url_header() {
        let source = ImageSource::new("data:image/png;base64,AAAA");
        assert_eq!(source.mime_type(), Some("image/png"));
    }

    #[test]
    fn mime_type_is_none_for_bare_base64() {
        let source = ImageSource::new("iVBORw0KGgo=");
        assert_eq!(source.mime_type(), None);
    }

    #[test]
    fn display_does_not_dump_payload() {
        let source = ImageSource::new("data:image/jpeg;base64,QUJDRA==");
        let shown = source.to_string();

        assert!(shown.contains("image/jpeg"));
        assert!(!shown.contains("QUJDRA=="));
    }
}
