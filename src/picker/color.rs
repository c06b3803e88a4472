//! # 颜色表示与格式化
//!
//! - `SelectedColor`：`#rrggbb`（小写、两位补零），只由成功的像素采样产生。
//! - `format_rgb`：`#RRGGBB` → `rgb(r, g, b)`，任何非法输入都回落到 `rgb(0, 0, 0)`。
//! - `ColorDisplay`：界面展示用的三元组（hex 文本 / rgb 文本 / 色块颜色）。

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// 非法输入时的固定回退值。
pub const RGB_FALLBACK: &str = "rgb(0, 0, 0)";

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern is valid")
});

/// 当前选中的颜色。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedColor(String);

impl SelectedColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex(&self.0).unwrap_or((0, 0, 0))
    }
}

impl fmt::Display for SelectedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 解析 `#RRGGBB`，大小写均可。
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_COLOR.captures(color)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// 将十六进制颜色转换为 `rgb(r, g, b)` 文本。
///
/// 宽松转换，从不失败：缺失、空串、长度不符或含非十六进制字符都返回 [`RGB_FALLBACK`]。
///
/// # 示例
/// ```rust
/// use image_color_picker::picker::format_rgb;
///
/// assert_eq!(format_rgb(Some("#1A2B3C")), "rgb(26, 43, 60)");
/// assert_eq!(format_rgb(None), "rgb(0, 0, 0)");
/// ```
pub fn format_rgb(color: Option<&str>) -> String {
    match color.and_then(parse_hex) {
        Some((r, g, b)) => format!("rgb({}, {}, {})", r, g, b),
        None => RGB_FALLBACK.to_string(),
    }
}

/// 选中颜色的展示数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDisplay {
    pub hex: String,
    pub rgb: String,
    /// 色块背景色。
    pub swatch: String,
}

impl From<&SelectedColor> for ColorDisplay {
    fn from(color: &SelectedColor) -> Self {
        Self {
            hex: color.as_str().to_string(),
            rgb: format_rgb(Some(color.as_str())),
            swatch: color.as_str().to_string(),
        }
    }
}
