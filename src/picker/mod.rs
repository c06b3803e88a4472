//! # 图片取色模块（picker）
//!
//! ## 设计思路
//!
//! 把“文件读取 → Data URL → 解码 → 铺满绘制 → 指针采样 → 颜色展示”
//! 按职责拆成多个子模块，避免单文件膨胀与耦合。
//!
//! - `state`：顶层控制器，唯一的状态持有者
//! - `loader`：文件 → Data URL、Data URL → 字节、加载代号
//! - `pipeline`：解码、像素上限、铺满绘制
//! - `crop`：铺满裁剪区域的纯几何计算
//! - `surface`：固定尺寸的 RGBA 绘制表面
//! - `pointer`：鼠标/触摸输入归一化与坐标换算
//! - `sampler`：像素回读与越界策略
//! - `color`：`#rrggbb` 与 `rgb(...)` 文本
//! - `panel`：第三方取色组件的宿主面板
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! 选择文件
//!    ↓
//! state.rs（handle_file_change，领取加载代号）
//!    ↓
//! loader.rs（异步读取 → Data URL）
//!    ↓
//! state.rs（commit_load，过期结果丢弃）
//!    ↓
//! pipeline.rs（解码 + crop.rs 裁剪 + 绘制到 surface.rs）
//!    ↓
//! 点击/触摸 → pointer.rs（归一化）→ sampler.rs（回读）→ color.rs（展示）
//! ```

mod color;
mod config;
mod crop;
mod error;
mod loader;
mod panel;
mod pipeline;
mod pointer;
mod sampler;
mod source;
mod state;
mod surface;

pub use color::{ColorDisplay, RGB_FALLBACK, SelectedColor, format_rgb, parse_hex};
pub use config::{
    DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, OutOfBoundsPolicy, PickerConfig, ResizeFilter,
};
pub use crop::CropRegion;
pub use error::PickerError;
pub use loader::{ImageLoader, LoadTicket, encode_data_url};
pub use panel::{ColorPickHandler, LibraryPickerPanel};
pub use pointer::{ClientPoint, PointerEvent, PointerInput, PointerPosition, SurfaceBounds, SurfacePoint};
pub use sampler::sample;
pub use source::ImageSource;
pub use state::PickerState;
pub use surface::RenderSurface;
