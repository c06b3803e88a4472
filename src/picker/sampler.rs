//! # 像素采样模块
//!
//! ## 实现思路
//!
//! 1. 阻止事件默认行为
//! 2. 经适配层取得归一化指针位置（空触摸列表 → 不采样）
//! 3. 视口坐标换算为表面坐标（减包围盒原点，乘 `backing_scale`）
//! 4. 按越界策略确定像素位置
//! 5. 回读单个像素，转为 `#rrggbb`
//!
//! 对表面只读。

use super::config::OutOfBoundsPolicy;
use super::pointer::{PointerEvent, SurfaceBounds, SurfacePoint};
use super::{PickerConfig, PickerError, RenderSurface, SelectedColor};

/// 采样指针所指像素的颜色。
///
/// - `Ok(Some(color))`：采样成功
/// - `Ok(None)`：事件不含指针位置（触摸列表为空）
/// - `Err(OutOfBounds)`：`Ignore` 策略下坐标越界，或坐标不是有限数
pub fn sample(
    event: &mut PointerEvent,
    surface: &RenderSurface,
    bounds: SurfaceBounds,
    config: &PickerConfig,
) -> Result<Option<SelectedColor>, PickerError> {
    event.prevent_default();

    let Some(position) = event.position() else {
        log::debug!("触摸列表为空，跳过采样");
        return Ok(None);
    };

    let point = position.to_surface(bounds, config.backing_scale);
    let (x, y) = resolve_pixel(point, surface.width(), surface.height(), config.out_of_bounds)?;

    let pixel = surface
        .pixel(x, y)
        .ok_or_else(|| out_of_bounds(point, surface.width(), surface.height()))?;
    let [r, g, b, _] = pixel.0;
    let color = SelectedColor::from_rgb(r, g, b);

    log::debug!(
        "🎯 采样 ({:.1}, {:.1}) → 像素 ({}, {}) = {}",
        point.x,
        point.y,
        x,
        y,
        color
    );

    Ok(Some(color))
}

/// 表面坐标 → 整数像素坐标。
fn resolve_pixel(
    point: SurfacePoint,
    width: u32,
    height: u32,
    policy: OutOfBoundsPolicy,
) -> Result<(u32, u32), PickerError> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(out_of_bounds(point, width, height));
    }

    let x = point.x.floor();
    let y = point.y.floor();
    let max_x = width.saturating_sub(1) as f64;
    let max_y = height.saturating_sub(1) as f64;
    let inside = (0.0..=max_x).contains(&x) && (0.0..=max_y).contains(&y);

    if inside {
        return Ok((x as u32, y as u32));
    }

    match policy {
        OutOfBoundsPolicy::Clamp => {
            log::warn!(
                "采样坐标 ({:.1}, {:.1}) 超出表面 {}x{}，收敛到边缘像素",
                point.x,
                point.y,
                width,
                height
            );
            Ok((x.clamp(0.0, max_x) as u32, y.clamp(0.0, max_y) as u32))
        }
        OutOfBoundsPolicy::Ignore => Err(out_of_bounds(point, width, height)),
    }
}

fn out_of_bounds(point: SurfacePoint, width: u32, height: u32) -> PickerError {
    PickerError::OutOfBounds {
        x: point.x,
        y: point.y,
        width,
        height,
    }
}
