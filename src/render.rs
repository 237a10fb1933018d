// 该文件是 Wangkou （网口） 项目的一部分。
// src/render.rs - 渲染接口
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use crate::detection::{Detection, ObjectClass};
use crate::geometry::BoundingBox;
use crate::topology::filter;

#[cfg(feature = "save_image_file")]
pub mod draw;
#[cfg(feature = "save_image_file")]
pub use self::draw::{Draw, DrawError};

/// 类别固定配色 (R, G, B)，按类别查表，不参与任何拓扑逻辑
pub fn class_color(class: ObjectClass) -> [u8; 3] {
  match class {
    ObjectClass::Cable => [255, 0, 0],
    ObjectClass::EmptyPort => [255, 255, 0],
    ObjectClass::PortStack => [255, 255, 255],
    ObjectClass::Switch => [0, 0, 255],
  }
}

/// 移交给渲染器的单个条目：框、置信度、类别、标签文本、颜色与可见性
#[derive(Debug, Clone)]
pub struct RenderItem {
  pub bbox: BoundingBox,
  pub confidence: f32,
  pub class: ObjectClass,
  pub label: String,
  pub color: [u8; 3],
  pub visible: bool,
}

/// 为整帧检测生成渲染条目，顺序与输入一一对应。
/// 端口的可见性由包含过滤给出：不在任何端口排内的端口不画；
/// 端口排与交换机始终可见。
pub fn render_items(detections: &[Detection]) -> Vec<RenderItem> {
  let visibility = filter::visibility(detections);
  detections
    .iter()
    .zip(visibility)
    .map(|(det, visible)| RenderItem {
      bbox: det.bbox,
      confidence: det.confidence,
      class: det.class,
      label: format!("{}: {:.2}", det.class.display_name(), det.confidence),
      color: class_color(det.class),
      visible,
    })
    .collect()
}
