// 该文件是 Wangkou （网口） 项目的一部分。
// src/topology/columns.rs - 端口列聚类
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use tracing::debug;

use crate::config::AssemblerConfig;
use crate::topology::PortPoint;

/// 把一个端口排内的端口按中心点 x 坐标贪心聚成竖列。
///
/// 阈值取当前端口排自身的平均横向间距乘以配置系数，而不是固定像素值，
/// 同一套参数可以适应不同拍摄距离下的端口间距。间距信息不可用时
/// （端口不足两个或平均间距为零）退回固定阈值。
/// 单个端口自然形成独立一列。
pub fn cluster_columns(
  mut ports: Vec<PortPoint>,
  config: &AssemblerConfig,
) -> Vec<Vec<PortPoint>> {
  if ports.is_empty() {
    return Vec::new();
  }
  ports.sort_by(|a, b| a.x.total_cmp(&b.x));

  let gaps: Vec<f32> = ports.windows(2).map(|pair| pair[1].x - pair[0].x).collect();
  let avg_gap = if gaps.is_empty() {
    0.0
  } else {
    gaps.iter().sum::<f32>() / gaps.len() as f32
  };
  let threshold = if avg_gap > 0.0 {
    avg_gap * config.column_gap_ratio
  } else {
    config.column_fallback_gap
  };

  // 单趟扫描：与前一个端口的间距超过阈值即另起一列
  let mut columns: Vec<Vec<PortPoint>> = Vec::new();
  let mut current = vec![ports[0]];
  for i in 1..ports.len() {
    if ports[i].x - ports[i - 1].x <= threshold {
      current.push(ports[i]);
    } else {
      columns.push(std::mem::take(&mut current));
      current.push(ports[i]);
    }
  }
  columns.push(current);

  debug!(
    "列聚类: {} 个端口 -> {} 列，平均间距 {:.2}，阈值 {:.2}",
    ports.len(),
    columns.len(),
    avg_gap,
    threshold
  );
  columns
}
