//! # 绘制表面
//!
//! 固定 W×H 的 RGBA 像素缓冲，既用于展示也用于像素回读。
//! 尺寸在创建时确定，之后每次绘制都整体覆盖内容，尺寸不变。
//! 绘制实现见 `pipeline.rs`。

use image::{Rgba, RgbaImage};

use super::PickerError;

/// 固定分辨率的绘制表面。
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    pub(super) pixels: RgbaImage,
}

impl RenderSurface {
    /// 创建全透明表面。
    pub fn new(width: u32, height: u32) -> Result<Self, PickerError> {
        if width == 0 || height == 0 {
            return Err(PickerError::InvalidFormat(format!(
                "绘制表面尺寸不能为 0：{}x{}",
                width, height
            )));
        }

        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// 读取单个像素，越界返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}
