// 该文件是 Wangkou （网口） 项目的一部分。
// src/topology/assembler.rs - 拓扑装配
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use tracing::info;

use crate::config::AssemblerConfig;
use crate::detection::Detection;
use crate::topology::Topology;
use crate::topology::filter::partition;
use crate::topology::segment::segment_switches;

/// 把一帧的全部检测结果装配为交换机拓扑。
///
/// 纯函数：检测结果与配置固定时输出逐字节一致，调用之间不共享
/// 任何状态，同一批检测重算一遍只会得到同样的结果。
/// 摄入与配置校验已在上游完成，装配本身不会失败。
pub fn assemble(detections: &[Detection], config: &AssemblerConfig) -> Topology {
  let parts = partition(detections);
  info!(
    "装配开始: 端口 {} 个，端口排 {} 个，交换机检测 {} 个",
    parts.ports.len(),
    parts.stacks.len(),
    parts.switches.len()
  );

  let switches = segment_switches(&parts.stacks, &parts.ports, config);
  info!("装配完成: 输出 {} 台交换机", switches.len());
  Topology { switches }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detection::ObjectClass;
  use crate::geometry::BoundingBox;
  use serde_json::json;

  fn det(class: ObjectClass, x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Detection {
    Detection::new(
      BoundingBox::new(x_min, y_min, x_max, y_max).unwrap(),
      0.9,
      class,
    )
  }

  /// 以中心点定位的端口检测框
  fn port_at(class: ObjectClass, cx: f32, cy: f32) -> Detection {
    det(class, cx - 2.0, cy - 2.0, cx + 2.0, cy + 2.0)
  }

  /// 一台交换机、一个端口排、两列各两个端口的标准场景
  fn two_column_scene() -> Vec<Detection> {
    vec![
      det(ObjectClass::Switch, 0.0, 0.0, 200.0, 100.0),
      det(ObjectClass::PortStack, 0.0, 0.0, 60.0, 60.0),
      port_at(ObjectClass::Cable, 10.0, 10.0),
      port_at(ObjectClass::EmptyPort, 12.0, 30.0),
      port_at(ObjectClass::EmptyPort, 40.0, 10.0),
      port_at(ObjectClass::Cable, 42.0, 30.0),
    ]
  }

  #[test]
  fn end_to_end_two_columns_of_two() {
    let topology = assemble(&two_column_scene(), &AssemblerConfig::default());
    let value = serde_json::to_value(&topology).unwrap();
    assert_eq!(
      value,
      json!({
        "switches": [
          {
            "switch_id": "Switch_1",
            "lan_port_stacks": [
              {
                "stack_id": "Stack_1",
                "lan_ports": [
                  [
                    { "port_number": 1, "status": "Cable" },
                    { "port_number": 3, "status": "empty" },
                  ],
                  [
                    { "port_number": 2, "status": "empty" },
                    { "port_number": 4, "status": "Cable" },
                  ],
                ],
              },
            ],
          },
        ],
      })
    );
  }

  #[test]
  fn orphan_port_never_gets_a_number() {
    let mut detections = two_column_scene();
    // 远离端口排的孤立端口
    detections.push(port_at(ObjectClass::Cable, 150.0, 90.0));
    let topology = assemble(&detections, &AssemblerConfig::default());
    let numbered: usize = topology.switches[0].lan_port_stacks[0]
      .lan_ports
      .iter()
      .map(Vec::len)
      .sum();
    assert_eq!(numbered, 4);
  }

  #[test]
  fn empty_input_yields_empty_topology() {
    let topology = assemble(&[], &AssemblerConfig::default());
    let value = serde_json::to_value(&topology).unwrap();
    assert_eq!(value, json!({ "switches": [] }));
  }

  #[test]
  fn ports_without_any_stack_yield_empty_topology() {
    let detections = vec![
      port_at(ObjectClass::Cable, 10.0, 10.0),
      port_at(ObjectClass::EmptyPort, 20.0, 10.0),
    ];
    let topology = assemble(&detections, &AssemblerConfig::default());
    assert!(topology.switches.is_empty());
  }

  #[test]
  fn numbering_is_unique_within_switch() {
    let detections = two_column_scene();
    let topology = assemble(&detections, &AssemblerConfig::default());
    let mut numbers: Vec<u32> = topology.switches[0]
      .lan_port_stacks
      .iter()
      .flat_map(|stack| stack.lan_ports.iter().flatten())
      .map(|port| port.port_number)
      .collect();
    numbers.sort_unstable();
    let before = numbers.len();
    numbers.dedup();
    assert_eq!(numbers.len(), before);
  }

  #[test]
  fn assembly_is_deterministic() {
    let detections = two_column_scene();
    let config = AssemblerConfig::default();
    let first = assemble(&detections, &config).to_json_pretty().unwrap();
    let second = assemble(&detections, &config).to_json_pretty().unwrap();
    assert_eq!(first, second);
  }
}
