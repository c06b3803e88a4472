//! 裁剪区域计算模块
//!
//! 实现“铺满（cover）”策略的核心几何：源图按目标宽高比裁掉较长的一边，
//! 再整体缩放填满目标矩形，不留黑边。
//!
//! # 设计思路
//!
//! - 纯函数：输入为源图尺寸与目标尺寸，输出唯一的裁剪矩形，便于测试。
//! - 浮点计算，与绘制阶段的小数裁剪保持一致，不在这里提前取整。
//! - 零尺寸输入直接返回错误，避免除零。

use super::PickerError;

/// 源图上的裁剪矩形（源图像素坐标）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    pub source_x: f64,
    pub source_y: f64,
    pub source_width: f64,
    pub source_height: f64,
}

impl CropRegion {
    /// 计算居中的铺满裁剪区域。
    ///
    /// # 裁剪规则
    /// - 源图比目标更宽：保留全部高度，横向居中裁剪
    /// - 源图更高或比例相同：保留全部宽度，纵向居中裁剪
    ///
    /// # 后置条件
    /// - `source_width <= natural_width`，`source_height <= natural_height`
    /// - `source_x == (natural_width - source_width) / 2`，`source_y` 同理
    ///
    /// # 示例
    /// ```rust
    /// use image_color_picker::picker::CropRegion;
    ///
    /// let crop = CropRegion::cover(640, 480, 320, 320)?;
    /// assert_eq!(crop.source_x, 80.0);
    /// assert_eq!(crop.source_width, 480.0);
    /// # Ok::<(), image_color_picker::picker::PickerError>(())
    /// ```
    pub fn cover(
        natural_width: u32,
        natural_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> Result<Self, PickerError> {
        if natural_width == 0 || natural_height == 0 {
            return Err(PickerError::DegenerateImage {
                width: natural_width,
                height: natural_height,
            });
        }
        if target_width == 0 || target_height == 0 {
            return Err(PickerError::InvalidFormat(format!(
                "目标尺寸不能为 0：{}x{}",
                target_width, target_height
            )));
        }

        let nw = natural_width as f64;
        let nh = natural_height as f64;
        let tw = target_width as f64;
        let th = target_height as f64;

        // img_ratio 与 canvas_ratio 的比较用整数交叉相乘，比例相同时严格走“全图”分支
        let image_cross = natural_width as u64 * target_height as u64;
        let canvas_cross = natural_height as u64 * target_width as u64;

        let region = if image_cross > canvas_cross {
            // 横向裁剪：source_width = nh * canvas_ratio；min 吸收浮点误差
            let source_width = (nh * tw / th).min(nw);
            Self {
                source_x: (nw - source_width) / 2.0,
                source_y: 0.0,
                source_width,
                source_height: nh,
            }
        } else if image_cross == canvas_cross {
            Self {
                source_x: 0.0,
                source_y: 0.0,
                source_width: nw,
                source_height: nh,
            }
        } else {
            // 纵向裁剪：source_height = nw / canvas_ratio
            let source_height = (nw * th / tw).min(nh);
            Self {
                source_x: 0.0,
                source_y: (nh - source_height) / 2.0,
                source_width: nw,
                source_height,
            }
        };

        Ok(region)
    }

    /// 取整后的裁剪矩形，供不支持小数裁剪的回退路径使用。
    ///
    /// 结果保证落在源图范围内且宽高至少为 1。
    pub(crate) fn to_pixel_rect(
        &self,
        natural_width: u32,
        natural_height: u32,
    ) -> (u32, u32, u32, u32) {
        let width = (self.source_width.round() as u32).clamp(1, natural_width.max(1));
        let height = (self.source_height.round() as u32).clamp(1, natural_height.max(1));
        let x = (self.source_x.round() as u32).min(natural_width.saturating_sub(width));
        let y = (self.source_y.round() as u32).min(natural_height.saturating_sub(height));
        (x, y, width, height)
    }
}
