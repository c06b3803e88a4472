//! # 图片取色工具：库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  宿主（页面 / CLI）                        │
//! │                                                          │
//! │  文件选择 ── 绘制表面 ── 选中颜色展示 ── 外部取色组件       │
//! │       ↕           ↕            ↕              ↕          │
//! └───────┼───────────┼────────────┼──────────────┼──────────┘
//!         ↕           ↕            ↕              ↕
//! ┌───────┼───────────┼────────────┼──────────────┼──────────┐
//! │       ↕        库 (Rust)                                 │
//! │                                                          │
//! │  ┌─ error ─────── AppError (统一错误类型)                 │
//! │  │                                                       │
//! │  └─ picker ────── PickerState (唯一状态持有者)            │
//! │      ├─ loader    文件 → Data URL（唯一异步点）           │
//! │      ├─ pipeline  解码 + 铺满绘制                         │
//! │      ├─ sampler   指针 → 像素 → #rrggbb                   │
//! │      └─ panel     外部组件回调                            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，二进制入口的返回类型 |
//! | [`picker`] | 图片加载、铺满绘制、指针采样、颜色格式化 |

pub mod error;
pub mod picker;
