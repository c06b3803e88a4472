//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，二进制入口统一返回它，
//! 库内各阶段的 `PickerError` 通过 `From` 自动上转。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 实现 `Serialize` 将错误序列化为字符串，便于以 JSON 形式输出给宿主页面。

use serde::Serialize;

use crate::picker::PickerError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 取色链路错误（加载 / 绘制 / 采样）
    #[error("{0}")]
    Picker(#[from] PickerError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 命令行参数组合不合法
    #[error("参数错误: {0}")]
    Usage(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Picker(err) => err.code(),
            Self::Io(_) => "E_IO",
            Self::Usage(_) => "E_USAGE",
        }
    }
}

/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_error_converts_and_keeps_code() {
        let err: AppError = PickerError::NoImage.into();

        assert_eq!(err.code(), "E_NO_IMAGE");
        assert_eq!(err.to_string(), PickerError::NoImage.to_string());
    }

    #[test]
    fn serializes_as_plain_string() {
        let err = AppError::Usage("缺少坐标".to_string());
        let json = serde_json::to_string(&err).expect("serialize should succeed");

        assert_eq!(json, "\"参数错误: 缺少坐标\"");
    }
}
