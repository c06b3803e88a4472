//! # 配置模块
//!
//! ## 设计思路
//!
//! 所有“可调参数”集中到 `PickerConfig`：绘制表面尺寸、坐标缩放、
//! 读取与解码上限、重采样滤镜、越界采样策略。
//! 表面尺寸只在这里出现，裁剪与绘制逻辑一律从配置读取。
//!
//! ## 实现思路
//!
//! - `Default` 对应参考行为（320×320、1:1 坐标映射、越界就近收敛）。
//! - 通过 `serde` 支持从 JSON 文件加载，缺省字段回落到默认值。
//! - `validate` 在构造控制器前统一校验，避免非法参数进入流水线。

use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::PickerError;

/// 绘制表面默认宽度（逻辑像素）。
pub const DEFAULT_SURFACE_WIDTH: u32 = 320;
/// 绘制表面默认高度（逻辑像素）。
pub const DEFAULT_SURFACE_HEIGHT: u32 = 320;

/// 重采样滤镜（可序列化的 `FilterType` 映射）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// 指针坐标超出绘制表面时的处理策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// 收敛到最近的边缘像素。
    Clamp,
    /// 放弃本次采样。
    Ignore,
}

/// 取色器配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// 绘制表面宽度（像素）。
    pub surface_width: u32,
    /// 绘制表面高度（像素）。
    pub surface_height: u32,
    /// 每个 CSS 像素对应的表面像素数。
    ///
    /// 参考行为假定为 1.0；高 DPI 或 CSS 缩放时由调用方显式给出。
    pub backing_scale: f64,
    /// 读取文件时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 绘制时使用的重采样滤镜。
    pub resize_filter: ResizeFilter,
    /// 越界采样策略。
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            backing_scale: 1.0,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            resize_filter: ResizeFilter::Triangle,
            out_of_bounds: OutOfBoundsPolicy::Clamp,
        }
    }
}

impl PickerConfig {
    /// 从 JSON 文件加载配置，缺省字段使用默认值。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use image_color_picker::picker::PickerConfig;
    ///
    /// let config = PickerConfig::from_json_file("picker.json")?;
    /// assert!(config.surface_width > 0);
    /// # Ok::<(), image_color_picker::picker::PickerError>(())
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PickerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PickerError::FileSystem(format!("无法读取配置文件 {}：{}", path.display(), e))
        })?;

        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, PickerError> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| PickerError::InvalidFormat(format!("解析配置失败：{}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验参数合法性。
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(PickerError::InvalidFormat(format!(
                "绘制表面尺寸不能为 0：{}x{}",
                self.surface_width, self.surface_height
            )));
        }
        if !self.backing_scale.is_finite() || self.backing_scale <= 0.0 {
            return Err(PickerError::InvalidFormat(format!(
                "backing_scale 必须为正数：{}",
                self.backing_scale
            )));
        }
        if self.max_file_size == 0 {
            return Err(PickerError::InvalidFormat("max_file_size 不能为 0".to_string()));
        }
        let surface_pixels = self.surface_width as u64 * self.surface_height as u64;
        if self.max_decoded_pixels < surface_pixels {
            return Err(PickerError::InvalidFormat(format!(
                "max_decoded_pixels（{}）不能小于绘制表面像素数（{}）",
                self.max_decoded_pixels, surface_pixels
            )));
        }

        Ok(())
    }
}
