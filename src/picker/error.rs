//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 取色链路（加载 → 绘制 → 采样）中的所有失败来源收敛到单一枚举。
//! 上层控制器按分支决定“静默保留旧状态”还是“跳过本次采样”，
//! 而不是依赖字符串匹配。

/// 取色链路统一错误类型。
///
/// 在二进制入口处会被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    /// 源图宽或高为 0，无法计算裁剪比例。
    #[error("图片尺寸无效：{width}x{height}")]
    DegenerateImage { width: u32, height: u32 },

    /// 指针坐标落在绘制表面之外。
    #[error("采样坐标越界：({x:.1}, {y:.1})，表面尺寸 {width}x{height}")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },

    /// 加载完成时已有更新的加载发起，结果被丢弃。
    #[error("过期的加载结果：第 {ticket} 次加载已被第 {latest} 次取代")]
    StaleLoad { ticket: u64, latest: u64 },

    #[error("尚未绘制任何图片")]
    NoImage,
}

impl PickerError {
    /// 稳定错误码，供日志与 CLI 退出信息使用。
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileSystem(_) => "E_FILE",
            Self::Decode(_) => "E_DECODE",
            Self::InvalidFormat(_) => "E_FORMAT",
            Self::ResourceLimit(_) => "E_LIMIT",
            Self::DegenerateImage { .. } => "E_DEGENERATE",
            Self::OutOfBounds { .. } => "E_OUT_OF_BOUNDS",
            Self::StaleLoad { .. } => "E_STALE",
            Self::NoImage => "E_NO_IMAGE",
        }
    }

    /// 错误发生的阶段：load / render / sample。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::FileSystem(_) | Self::StaleLoad { .. } => "load",
            Self::Decode(_) | Self::ResourceLimit(_) | Self::DegenerateImage { .. } => "render",
            Self::OutOfBounds { .. } | Self::NoImage => "sample",
            Self::InvalidFormat(_) => "config",
        }
    }
}
