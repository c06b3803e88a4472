//! # 加载模块
//!
//! ## 设计思路
//!
//! 把用户选择的文件读成 Data URL（`ImageSource`），并反向把 Data URL 解析回原始字节。
//! 读取是整条链路里唯一的异步挂起点。
//!
//! ## 实现思路
//!
//! - 读取：metadata 体积检查 → `tokio::fs::read` → `infer` 嗅探 MIME → Base64 编码。
//!   这里不做图片类型校验，无法解码的内容在绘制阶段才会失败。
//! - 解析：支持 `data:<mime>;base64,` 与纯 Base64，解码前先按上限估算体积。
//! - 过期保护：每次加载先领取递增的代号（`LoadTicket`），
//!   只有最新发起的那次加载才能提交结果，先发后至的结果直接丢弃。

use base64::{Engine as _, engine::general_purpose};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use super::source::RawImageData;
use super::{ImageSource, PickerConfig, PickerError};

const FALLBACK_MIME: &str = "application/octet-stream";

/// 一次加载的代号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// 图片加载器，负责代号分发与文件读取。
#[derive(Debug, Default)]
pub struct ImageLoader {
    generation: AtomicU64,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发起一次新加载，之前发出的代号全部作废。
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 最近一次发出的代号。
    pub fn latest(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// 校验代号是否仍为最新。
    pub fn check_current(&self, ticket: LoadTicket) -> Result<(), PickerError> {
        let latest = self.latest();
        if ticket.0 == latest {
            Ok(())
        } else {
            Err(PickerError::StaleLoad {
                ticket: ticket.0,
                latest,
            })
        }
    }

    /// 将文件读取为 Data URL。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use image_color_picker::picker::{ImageLoader, PickerConfig};
    ///
    /// # async fn demo() -> Result<(), image_color_picker::picker::PickerError> {
    /// let source = ImageLoader::read_as_data_url("photo.png", &PickerConfig::default()).await?;
    /// assert!(source.as_str().starts_with("data:"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read_as_data_url(
        path: impl AsRef<Path>,
        config: &PickerConfig,
    ) -> Result<ImageSource, PickerError> {
        let path = path.as_ref();
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| PickerError::FileSystem(format!("无法读取文件信息 {}：{}", path.display(), e)))?;

        if !metadata.is_file() {
            return Err(PickerError::FileSystem(format!("不是文件：{}", path.display())));
        }

        if metadata.len() > config.max_file_size {
            return Err(PickerError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PickerError::FileSystem(format!("无法读取图片文件：{}", e)))?;

        Ok(encode_data_url(&bytes))
    }
}

/// 将字节编码为 Data URL，MIME 由文件签名推断。
pub fn encode_data_url(bytes: &[u8]) -> ImageSource {
    let mime = infer::get(bytes).map(|kind| kind.mime_type()).unwrap_or(FALLBACK_MIME);
    ImageSource::new(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// 将 `ImageSource` 解析回原始字节（支持 Data URL / 纯 Base64）。
pub(crate) fn parse_data_url(source: &ImageSource, max_file_size: u64) -> Result<RawImageData, PickerError> {
    let normalized = source.as_str().trim();

    if normalized.is_empty() {
        return Err(PickerError::InvalidFormat("图片来源为空".to_string()));
    }

    let (payload, source_hint) = if normalized.starts_with("data:") {
        let base64_start = normalized
            .find(";base64,")
            .ok_or_else(|| PickerError::InvalidFormat("缺少 base64 标记".to_string()))?;
        (&normalized[base64_start + 8..], "data-url")
    } else {
        (normalized, "base64")
    };

    let estimated_len = decoded_len_upper_bound(payload);
    if estimated_len > max_file_size {
        return Err(PickerError::ResourceLimit(format!(
            "Base64 预计解码体积过大：{:.2} MB（限制：{:.2} MB）",
            estimated_len as f64 / 1024.0 / 1024.0,
            max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PickerError::Decode(format!("Base64 解码失败：{}", e)))?;

    Ok(RawImageData { bytes, source_hint })
}

/// Base64 载荷解码后的最大字节数：每 4 个字符最多 3 字节。
fn decoded_len_upper_bound(payload: &str) -> u64 {
    (payload.trim().len() as u64).div_ceil(4) * 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PNG_SIGNATURE: [u8; 12] = [137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13];

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "image-color-picker-loader-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, bytes).expect("write temp file failed");
        path
    }

    #[test]
    fn tickets_are_monotonic_and_only_latest_is_current() {
        let loader = ImageLoader::new();
        let first = loader.begin();
        let second = loader.begin();

        assert!(second.generation() > first.generation());
        assert!(loader.check_current(second).is_ok());
        assert!(matches!(
            loader.check_current(first),
            Err(PickerError::StaleLoad { ticket: 1, latest: 2 })
        ));
    }

    #[test]
    fn encode_data_url_sniffs_png_mime() {
        let source = encode_data_url(&PNG_SIGNATURE);
        assert_eq!(source.mime_type(), Some("image/png"));
    }

    #[test]
    fn encode_data_url_falls_back_for_unknown_bytes() {
        let source = encode_data_url(b"plain text");
        assert_eq!(source.mime_type(), Some(FALLBACK_MIME));
    }

    #[test]
    fn parse_data_url_roundtrips_payload() {
        let source = encode_data_url(&PNG_SIGNATURE);
        let raw = parse_data_url(&source, u64::MAX).expect("parse should succeed");

        assert_eq!(raw.bytes, PNG_SIGNATURE);
        assert_eq!(raw.source_hint, "data-url");
    }

    #[test]
    fn parse_data_url_accepts_bare_base64() {
        let raw = parse_data_url(&ImageSource::new("SGVsbG8="), u64::MAX).expect("parse should succeed");
        assert_eq!(raw.bytes, b"Hello");
        assert_eq!(raw.source_hint, "base64");
    }

    #[test]
    fn parse_data_url_requires_base64_marker() {
        let result = parse_data_url(&ImageSource::new("data:image/svg+xml,<svg/>"), u64::MAX);
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));
    }

    #[test]
    fn parse_data_url_rejects_empty_source() {
        let result = parse_data_url(&ImageSource::new("  "), u64::MAX);
        assert!(matches!(result, Err(PickerError::InvalidFormat(_))));
    }

    #[test]
    fn parse_data_url_rejects_large_payload_before_decode() {
        let huge = ImageSource::new(format!("data:image/png;base64,{}", "A".repeat(1024 * 1024)));
        let result = parse_data_url(&huge, 32);

        assert!(matches!(result, Err(PickerError::ResourceLimit(_))));
    }

    #[tokio::test]
    async fn read_as_data_url_encodes_file_contents() {
        let path = temp_file("signature.png", &PNG_SIGNATURE);

        let source = ImageLoader::read_as_data_url(&path, &PickerConfig::default())
            .await
            .expect("read should succeed");
        let _ = std::fs::remove_file(&path);

        assert!(source.as_str().starts_with("data:image/png;base64,"));
        let raw = parse_data_url(&source, u64::MAX).expect("parse should succeed");
        assert_eq!(raw.bytes, PNG_SIGNATURE);
    }

    #[tokio::test]
    async fn read_as_data_url_reports_missing_file() {
        let result =
            ImageLoader::read_as_data_url("/definitely/not/here.png", &PickerConfig::default()).await;
        assert!(matches!(result, Err(PickerError::FileSystem(_))));
    }

    #[tokio::test]
    async fn read_as_data_url_enforces_size_limit() {
        let path = temp_file("too-big.bin", &[0u8; 64]);
        let config = PickerConfig {
            max_file_size: 16,
            ..PickerConfig::default()
        };

        let result = ImageLoader::read_as_data_url(&path, &config).await;
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(PickerError::ResourceLimit(_))));
    }
}
