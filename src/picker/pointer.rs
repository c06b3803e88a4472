//! 指针输入适配模块
//!
//! 鼠标与触摸事件形状不同：鼠标带一个坐标点，触摸带一组触点。
//! 这里把两者统一成 `PointerPosition`，采样器只认这一种输入。
//!
//! # 坐标系统处理
//!
//! - 视口坐标：`client_x / client_y`，左上角原点，Y 轴向下
//! - 表面坐标：`(client - 包围盒原点) * backing_scale`
//!
//! `backing_scale` 默认 1.0，即假定表面像素与 CSS 像素一一对应。

/// 视口坐标系下的一个点。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl ClientPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// 原始指针输入。
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse(ClientPoint),
    /// 当前仍按在屏幕上的全部触点，按按下顺序排列。
    Touch(Vec<ClientPoint>),
}

/// 一次指针事件，附带“阻止默认行为”标记（例如触摸滚动）。
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    input: PointerInput,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::from(PointerInput::Mouse(ClientPoint::new(client_x, client_y)))
    }

    pub fn touch(touches: Vec<ClientPoint>) -> Self {
        Self::from(PointerInput::Touch(touches))
    }

    pub fn input(&self) -> &PointerInput {
        &self.input
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// 归一化后的指针位置；触摸列表为空时返回 `None`。
    pub fn position(&self) -> Option<PointerPosition> {
        let point = match &self.input {
            PointerInput::Mouse(point) => *point,
            PointerInput::Touch(touches) => *touches.first()?,
        };

        Some(PointerPosition {
            client_x: point.client_x,
            client_y: point.client_y,
        })
    }
}

impl From<PointerInput> for PointerEvent {
    fn from(input: PointerInput) -> Self {
        Self {
            input,
            default_prevented: false,
        }
    }
}

/// 与输入设备无关的指针位置（视口坐标）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub client_x: f64,
    pub client_y: f64,
}

/// 绘制表面在视口中的包围盒原点。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// 表面像素坐标（未取整）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// 视口坐标 → 表面坐标。
    pub fn to_surface(self, bounds: SurfaceBounds, backing_scale: f64) -> SurfacePoint {
        SurfacePoint {
            x: (self.client_x - bounds.left) * backing_scale,
            y: (self.client_y - bounds.top) * backing_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_event_yields_its_point() {
        let event = PointerEvent::mouse(12.0, 34.0);

        assert_eq!(
            event.position(),
            Some(PointerPosition {
                client_x: 12.0,
                client_y: 34.0
            })
        );
    }

    #[test]
    fn touch_event_uses_first_touch() {
        let event = PointerEvent::touch(vec![ClientPoint::new(5.0, 6.0), ClientPoint::new(50.0, 60.0)]);
        let position = event.position().expect("touch should have a position");

        assert_eq!((position.client_x, position.client_y), (5.0, 6.0));
    }

    #[test]
    fn empty_touch_list_has_no_position() {
        assert_eq!(PointerEvent::touch(Vec::new()).position(), None);
    }

    #[test]
    fn prevent_default_is_recorded() {
        let mut event = PointerEvent::mouse(0.0, 0.0);
        assert!(!event.default_prevented());

        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn to_surface_subtracts_bounds_origin() {
        let position = PointerPosition {
            client_x: 110.0,
            client_y: 250.0,
        };
        let point = position.to_surface(SurfaceBounds::new(100.0, 200.0), 1.0);

        assert_eq!((point.x, point.y), (10.0, 50.0));
    }

    #[test]
    fn to_surface_applies_backing_scale() {
        let position = PointerPosition {
            client_x: 110.0,
            client_y: 250.0,
        };
        let point = position.to_surface(SurfaceBounds::new(100.0, 200.0), 2.0);

        assert_eq!((point.x, point.y), (20.0, 100.0));
    }
}
