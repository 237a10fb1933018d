// 该文件是 Wangkou （网口） 项目的一部分。
// src/geometry.rs - 几何基元
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
  #[error("无效的边界框: ({x_min}, {y_min}, {x_max}, {y_max})，要求 x_min ≤ x_max 且 y_min ≤ y_max")]
  InvalidGeometry {
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
  },
}

/// 轴对齐边界框，图像坐标系，y 轴向下。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
  pub x_min: f32,
  pub y_min: f32,
  pub x_max: f32,
  pub y_max: f32,
}

impl BoundingBox {
  /// 构造时校验坐标次序。坐标颠倒属于上游检测端的契约违约，
  /// 直接报错而不做交换修复。NaN 同样无法通过比较而被拒绝。
  pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self, GeometryError> {
    if !(x_min <= x_max && y_min <= y_max) {
      return Err(GeometryError::InvalidGeometry {
        x_min,
        y_min,
        x_max,
        y_max,
      });
    }
    Ok(Self {
      x_min,
      y_min,
      x_max,
      y_max,
    })
  }

  /// 中心点：各轴取最小最大值的算术平均。
  pub fn center(&self) -> (f32, f32) {
    (
      (self.x_min + self.x_max) / 2.0,
      (self.y_min + self.y_max) / 2.0,
    )
  }

  /// 判断 inner 的中心点是否落在本框的闭矩形内，边界算在内。
  /// 包含关系只看中心点，不看整框重叠：检测框部分越界时，
  /// 只要中点还在范围内就视为在内。
  pub fn contains_center(&self, inner: &BoundingBox) -> bool {
    let (cx, cy) = inner.center();
    self.x_min <= cx && cx <= self.x_max && self.y_min <= cy && cy <= self.y_max
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bbox(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> BoundingBox {
    BoundingBox::new(x_min, y_min, x_max, y_max).unwrap()
  }

  #[test]
  fn center_is_axis_midpoint() {
    assert_eq!(bbox(0.0, 0.0, 10.0, 20.0).center(), (5.0, 10.0));
    assert_eq!(bbox(3.0, 3.0, 3.0, 3.0).center(), (3.0, 3.0));
  }

  #[test]
  fn contains_center_strictly_inside() {
    let outer = bbox(0.0, 0.0, 100.0, 100.0);
    let inner = bbox(40.0, 40.0, 60.0, 60.0);
    assert!(outer.contains_center(&inner));
  }

  #[test]
  fn contains_center_boundary_is_inclusive() {
    let outer = bbox(0.0, 0.0, 100.0, 100.0);
    // 中心点恰好落在右边界 (100, 50)
    let on_edge = bbox(90.0, 40.0, 110.0, 60.0);
    assert!(outer.contains_center(&on_edge));
    // 中心点恰好落在左上角 (0, 0)
    let on_corner = bbox(-10.0, -10.0, 10.0, 10.0);
    assert!(outer.contains_center(&on_corner));
  }

  #[test]
  fn contains_center_outside() {
    let outer = bbox(0.0, 0.0, 100.0, 100.0);
    let outside = bbox(90.0, 0.0, 120.0, 10.0);
    assert!(!outer.contains_center(&outside));
  }

  #[test]
  fn reversed_coordinates_rejected() {
    assert!(BoundingBox::new(10.0, 0.0, 0.0, 10.0).is_err());
    assert!(BoundingBox::new(0.0, 10.0, 10.0, 0.0).is_err());
  }

  #[test]
  fn nan_coordinates_rejected() {
    assert!(BoundingBox::new(f32::NAN, 0.0, 10.0, 10.0).is_err());
    assert!(BoundingBox::new(0.0, 0.0, 10.0, f32::NAN).is_err());
  }
}
