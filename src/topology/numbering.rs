// 该文件是 Wangkou （网口） 项目的一部分。
// src/topology/numbering.rs - 端口编号
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use tracing::debug;

use crate::topology::{PortPoint, PortRecord};

/// 一个端口排编号后的上下两行
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberedRows {
  pub upper: Vec<PortRecord>,
  pub lower: Vec<PortRecord>,
}

/// 按列序为端口编号，返回编号结果与下一个可用基号。
///
/// 列按形成顺序（自左向右）处理，列内按中心点 y 坐标自上而下排序：
/// 最上端口进上行取当前基号，第二个进下行取基号加一；
/// 只有一个端口的列只占下行，取基号加一，不产生上行条目。
/// 同列第三个及之后的端口不编号（两行约定的已知限制，保持现状）。
/// 无论列内实际有几个端口，基号固定步进 2。
pub fn number_columns(
  columns: Vec<Vec<PortPoint>>,
  mut base_port_number: u32,
) -> (NumberedRows, u32) {
  let mut rows = NumberedRows::default();

  for mut column in columns {
    column.sort_by(|a, b| a.y.total_cmp(&b.y));
    match column.as_slice() {
      [] => {}
      [single] => {
        debug!("单端口列: 下行端口号 {}", base_port_number + 1);
        rows.lower.push(PortRecord {
          port_number: base_port_number + 1,
          status: single.status,
        });
      }
      [top, second, ..] => {
        debug!(
          "双端口列: 上行端口号 {}，下行端口号 {}",
          base_port_number,
          base_port_number + 1
        );
        rows.upper.push(PortRecord {
          port_number: base_port_number,
          status: top.status,
        });
        rows.lower.push(PortRecord {
          port_number: base_port_number + 1,
          status: second.status,
        });
      }
    }
    base_port_number += 2;
  }

  rows.upper.sort_by_key(|port| port.port_number);
  rows.lower.sort_by_key(|port| port.port_number);
  (rows, base_port_number)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detection::PortStatus;

  fn port(x: f32, y: f32, status: PortStatus) -> PortPoint {
    PortPoint { x, y, status }
  }

  fn numbers(row: &[PortRecord]) -> Vec<u32> {
    row.iter().map(|p| p.port_number).collect()
  }

  #[test]
  fn two_port_column_fills_both_rows() {
    let columns = vec![vec![
      port(10.0, 30.0, PortStatus::Empty),
      port(10.0, 10.0, PortStatus::Cable),
    ]];
    let (rows, next) = number_columns(columns, 1);
    // y 小的在上行，与送入顺序无关
    assert_eq!(rows.upper, vec![PortRecord {
      port_number: 1,
      status: PortStatus::Cable,
    }]);
    assert_eq!(rows.lower, vec![PortRecord {
      port_number: 2,
      status: PortStatus::Empty,
    }]);
    assert_eq!(next, 3);
  }

  #[test]
  fn single_port_column_goes_to_lower_row_only() {
    let columns = vec![vec![port(10.0, 10.0, PortStatus::Cable)]];
    let (rows, next) = number_columns(columns, 5);
    assert!(rows.upper.is_empty());
    assert_eq!(numbers(&rows.lower), vec![6]);
    assert_eq!(next, 7);
  }

  #[test]
  fn third_port_in_column_is_silently_ignored() {
    let columns = vec![vec![
      port(10.0, 10.0, PortStatus::Cable),
      port(10.0, 30.0, PortStatus::Empty),
      port(10.0, 50.0, PortStatus::Empty),
    ]];
    let (rows, next) = number_columns(columns, 1);
    assert_eq!(numbers(&rows.upper), vec![1]);
    assert_eq!(numbers(&rows.lower), vec![2]);
    assert_eq!(next, 3);
  }

  #[test]
  fn base_advances_by_two_per_column_regardless_of_occupancy() {
    let columns = vec![
      vec![port(0.0, 10.0, PortStatus::Cable)],
      vec![
        port(20.0, 10.0, PortStatus::Empty),
        port(20.0, 30.0, PortStatus::Cable),
      ],
    ];
    let (rows, next) = number_columns(columns, 1);
    // 第一列只占下行的 2，第二列仍从 3 起编
    assert_eq!(numbers(&rows.upper), vec![3]);
    assert_eq!(numbers(&rows.lower), vec![2, 4]);
    assert_eq!(next, 5);
  }

  #[test]
  fn rows_sorted_by_port_number() {
    let columns = vec![
      vec![
        port(0.0, 10.0, PortStatus::Cable),
        port(0.0, 30.0, PortStatus::Empty),
      ],
      vec![
        port(40.0, 10.0, PortStatus::Empty),
        port(40.0, 30.0, PortStatus::Cable),
      ],
    ];
    let (rows, _) = number_columns(columns, 1);
    assert_eq!(numbers(&rows.upper), vec![1, 3]);
    assert_eq!(numbers(&rows.lower), vec![2, 4]);
  }

  #[test]
  fn no_columns_leaves_base_untouched() {
    let (rows, next) = number_columns(Vec::new(), 9);
    assert!(rows.upper.is_empty());
    assert!(rows.lower.is_empty());
    assert_eq!(next, 9);
  }
}
