//! # 第三方取色组件宿主面板
//!
//! 外部取色组件与本模块共用同一个 `ImageSource`，取色算法对宿主不透明。
//! 两者之间唯一的约定是单参数回调：组件取到颜色后调用 `on_color_pick(color)`。
//! 面板原样保存颜色字符串，不做解析或校验。

use super::ImageSource;

/// 外部取色组件的回调契约。
pub trait ColorPickHandler {
    fn on_color_pick(&mut self, color: String);
}

/// 承载外部取色组件的面板。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryPickerPanel {
    image_source: Option<ImageSource>,
    selected_color: String,
}

impl LibraryPickerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同步宿主当前的图片来源。
    pub fn set_image_source(&mut self, source: Option<ImageSource>) {
        self.image_source = source;
    }

    /// 需要交给组件渲染的图片；为空时组件不渲染。
    pub fn widget_source(&self) -> Option<&ImageSource> {
        self.image_source.as_ref().filter(|source| !source.is_empty())
    }

    pub fn selected_color(&self) -> &str {
        &self.selected_color
    }

    pub fn display_line(&self) -> String {
        format!("selected Color : {}", self.selected_color)
    }
}

impl ColorPickHandler for LibraryPickerPanel {
    fn on_color_pick(&mut self, color: String) {
        log::debug!("外部组件回传颜色：{}", color);
        self.selected_color = color;
    }
}
