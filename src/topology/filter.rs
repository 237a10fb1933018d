// 该文件是 Wangkou （网口） 项目的一部分。
// src/topology/filter.rs - 包含过滤
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use tracing::debug;

use crate::detection::{Detection, ObjectClass};
use crate::topology::PortPoint;

/// 按类别拆分后的检测结果
#[derive(Debug, Default)]
pub struct PartitionedDetections<'a> {
  pub ports: Vec<&'a Detection>,
  pub stacks: Vec<&'a Detection>,
  pub switches: Vec<&'a Detection>,
}

/// 按类别把检测结果拆成端口、端口排与交换机三组。
pub fn partition(detections: &[Detection]) -> PartitionedDetections<'_> {
  let mut parts = PartitionedDetections::default();
  for det in detections {
    match det.class {
      ObjectClass::Cable | ObjectClass::EmptyPort => parts.ports.push(det),
      ObjectClass::PortStack => parts.stacks.push(det),
      ObjectClass::Switch => parts.switches.push(det),
    }
  }
  parts
}

/// 收集中心点落在指定端口排内的端口，转为聚类用的中心点。
/// 不落在任何端口排内的端口在这一步被整体淘汰：
/// 既不参与编号，也不会被渲染。
pub fn ports_in_stack(stack: &Detection, ports: &[&Detection]) -> Vec<PortPoint> {
  let enclosed: Vec<PortPoint> = ports
    .iter()
    .filter(|port| stack.bbox.contains_center(&port.bbox))
    .filter_map(|port| {
      let (x, y) = port.bbox.center();
      port.class.port_status().map(|status| PortPoint { x, y, status })
    })
    .collect();
  debug!("端口排内端口数: {} / {}", enclosed.len(), ports.len());
  enclosed
}

/// 单条检测的渲染可见性：端口仅当中心点落在任一端口排内时可见，
/// 端口排与交换机始终可见。端口排之间不做互斥检查，
/// 落在多个端口排内同样算可见。
pub fn is_visible(det: &Detection, stacks: &[&Detection]) -> bool {
  match det.class {
    ObjectClass::Cable | ObjectClass::EmptyPort => stacks
      .iter()
      .any(|stack| stack.bbox.contains_center(&det.bbox)),
    ObjectClass::PortStack | ObjectClass::Switch => true,
  }
}

/// 整帧检测的可见性标志，顺序与输入一一对应。
pub fn visibility(detections: &[Detection]) -> Vec<bool> {
  let parts = partition(detections);
  detections
    .iter()
    .map(|det| is_visible(det, &parts.stacks))
    .collect()
}
