//! # 取色器控制器（顶层状态）
//!
//! ## 设计思路
//!
//! `PickerState` 是唯一的状态持有者：当前图片、绘制表面、选中颜色都在这里，
//! 不使用全局单例。子组件只拿到只读引用，改动都经过这里的方法。
//! 外部组件面板也归它所有，每次提交新图片时同步 `ImageSource`。
//!
//! 失败对用户静默：加载、解码、采样出错时界面状态保持不变，只写日志。
//!
//! ## 实现思路
//!
//! ```text
//! handle_file_change
//!    ├─ begin_load（领取代号）
//!    ├─ ImageLoader::read_as_data_url（唯一的 await）
//!    └─ commit_load（代号过期则丢弃）
//!          └─ on_image_ready（解析 → 解码 → 铺满绘制）
//! handle_pointer
//!    └─ sampler::sample → selected_color
//! ```

use std::path::Path;
use std::time::Instant;

use super::crop::CropRegion;
use super::loader::{self, ImageLoader, LoadTicket};
use super::panel::LibraryPickerPanel;
use super::pipeline;
use super::pointer::{PointerEvent, SurfaceBounds};
use super::sampler;
use super::{ColorDisplay, ImageSource, PickerConfig, PickerError, RenderSurface, SelectedColor};

/// 取色器顶层状态。
#[derive(Debug)]
pub struct PickerState {
    config: PickerConfig,
    loader: ImageLoader,
    image_source: Option<ImageSource>,
    surface: Option<RenderSurface>,
    last_crop: Option<CropRegion>,
    selected_color: Option<SelectedColor>,
    library_panel: LibraryPickerPanel,
}

impl PickerState {
    /// 使用校验过的配置创建控制器。
    ///
    /// # 示例
    /// ```rust
    /// use image_color_picker::picker::{PickerConfig, PickerState};
    ///
    /// let state = PickerState::new(PickerConfig::default())?;
    /// assert!(state.selected_color().is_none());
    /// # Ok::<(), image_color_picker::picker::PickerError>(())
    /// ```
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;

        Ok(Self {
            config,
            loader: ImageLoader::new(),
            image_source: None,
            surface: None,
            last_crop: None,
            selected_color: None,
            library_panel: LibraryPickerPanel::new(),
        })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn image_source(&self) -> Option<&ImageSource> {
        self.image_source.as_ref()
    }

    pub fn surface(&self) -> Option<&RenderSurface> {
        self.surface.as_ref()
    }

    /// 最近一次成功绘制所用的裁剪区域。
    pub fn last_crop(&self) -> Option<&CropRegion> {
        self.last_crop.as_ref()
    }

    pub fn selected_color(&self) -> Option<&SelectedColor> {
        self.selected_color.as_ref()
    }

    /// 选中颜色的展示数据；尚未采样时为 `None`。
    pub fn display(&self) -> Option<ColorDisplay> {
        self.selected_color.as_ref().map(ColorDisplay::from)
    }

    /// 与本控制器共用图片来源的外部组件面板。
    pub fn library_panel(&self) -> &LibraryPickerPanel {
        &self.library_panel
    }

    /// 供外部组件回传颜色（`on_color_pick`）。
    pub fn library_panel_mut(&mut self) -> &mut LibraryPickerPanel {
        &mut self.library_panel
    }

    /// 发起一次加载，之前未提交的加载随之作废。
    pub fn begin_load(&self) -> LoadTicket {
        self.loader.begin()
    }

    /// 提交加载结果。
    ///
    /// 代号过期或读取失败时状态不变，返回 `false`；
    /// 否则整体替换图片来源并触发绘制，返回 `true`。
    pub fn commit_load(&mut self, ticket: LoadTicket, result: Result<ImageSource, PickerError>) -> bool {
        if let Err(err) = self.loader.check_current(ticket) {
            log::info!("⏭️ 丢弃过期加载结果：{}", err);
            return false;
        }

        match result {
            Ok(source) => {
                log::info!("📥 图片已加载：{}", source);
                self.library_panel.set_image_source(Some(source.clone()));
                self.image_source = Some(source);
                self.on_image_ready();
                true
            }
            Err(err) => {
                log::warn!("⚠️ 图片读取失败，保留当前图片 [{}]：{}", err.code(), err);
                false
            }
        }
    }

    /// 处理文件选择变更；未选择文件时不做任何事。
    pub async fn handle_file_change(&mut self, file: Option<&Path>) -> bool {
        let Some(path) = file else {
            log::debug!("未选择文件，忽略");
            return false;
        };

        let ticket = self.begin_load();
        let result = ImageLoader::read_as_data_url(path, &self.config).await;
        self.commit_load(ticket, result)
    }

    /// 当前图片“加载完成”：解码并铺满绘制到表面。
    ///
    /// 失败时保留上一次绘制的表面内容。
    pub fn on_image_ready(&mut self) -> bool {
        match self.render_current() {
            Ok(crop) => {
                self.last_crop = Some(crop);
                true
            }
            Err(err) => {
                log::warn!("⚠️ 图片绘制失败 [{}]：{}", err.code(), err);
                false
            }
        }
    }

    fn render_current(&mut self) -> Result<CropRegion, PickerError> {
        let source = self.image_source.as_ref().ok_or(PickerError::NoImage)?;
        let start = Instant::now();

        let raw = loader::parse_data_url(source, self.config.max_file_size)?;
        let image = pipeline::decode_image(raw, &self.config)?;

        let mut surface = RenderSurface::new(self.config.surface_width, self.config.surface_height)?;
        let crop = surface.draw_cover(&image, self.config.resize_filter)?;
        self.surface = Some(surface);

        log::info!(
            "✅ 绘制完成 - {}x{} elapsed={}ms",
            self.config.surface_width,
            self.config.surface_height,
            start.elapsed().as_millis()
        );

        Ok(crop)
    }

    /// 处理表面上的点击/触摸，成功时替换选中颜色。
    pub fn handle_pointer(&mut self, event: &mut PointerEvent, bounds: SurfaceBounds) -> Option<&SelectedColor> {
        let Some(surface) = self.surface.as_ref() else {
            event.prevent_default();
            log::debug!("{}，忽略指针事件", PickerError::NoImage);
            return None;
        };

        match sampler::sample(event, surface, bounds, &self.config) {
            Ok(Some(color)) => {
                self.selected_color = Some(color);
                self.selected_color.as_ref()
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("⚠️ 采样失败 [{}]：{}", err.code(), err);
                None
            }
        }
    }
}
