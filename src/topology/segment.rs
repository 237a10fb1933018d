// 该文件是 Wangkou （网口） 项目的一部分。
// src/topology/segment.rs - 交换机切分
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use tracing::{debug, info};

use crate::config::AssemblerConfig;
use crate::detection::Detection;
use crate::topology::columns::cluster_columns;
use crate::topology::filter::ports_in_stack;
use crate::topology::numbering::number_columns;
use crate::topology::{StackRecord, SwitchRecord};

fn switch_id(seq: u32) -> String {
  format!("Switch_{seq}")
}

fn stack_id(seq: u32) -> String {
  format!("Stack_{seq}")
}

/// 交换机切分的累积状态。
///
/// 逐个接收按 y_min 升序排好的端口排，纵向间距超过阈值时收尾
/// 当前交换机并另起一台。收尾动作由显式的 `finish` 承担，
/// 不依赖循环退出时的隐式行为。
///
/// 计数器约定：`base_port_number` 随新交换机复位为 1；
/// `stack_seq` 跨交换机连续递增（沿用检测端既有编号行为）。
struct SwitchSegmenter<'a> {
  config: &'a AssemblerConfig,
  switches: Vec<SwitchRecord>,
  current: SwitchRecord,
  switch_start: f32,
  switch_seq: u32,
  stack_seq: u32,
  base_port_number: u32,
}

impl<'a> SwitchSegmenter<'a> {
  fn new(config: &'a AssemblerConfig, first_stack_y: f32) -> Self {
    Self {
      config,
      switches: Vec::new(),
      current: SwitchRecord {
        switch_id: switch_id(1),
        lan_port_stacks: Vec::new(),
      },
      switch_start: first_stack_y,
      switch_seq: 1,
      stack_seq: 1,
      base_port_number: 1,
    }
  }

  /// 处理下一个端口排。端口排内的端口先聚列、再编号，
  /// 然后冻结为 StackRecord 挂到当前交换机。
  /// 没有端口的端口排同样产生一条两行皆空的记录并占用一个编号。
  fn step(&mut self, stack: &Detection, ports: &[&Detection]) {
    let y_min = stack.bbox.y_min;
    if y_min > self.switch_start + self.config.switch_gap {
      self.roll_over(y_min);
    }

    let enclosed = ports_in_stack(stack, ports);
    let columns = cluster_columns(enclosed, self.config);
    let (rows, next_base) = number_columns(columns, self.base_port_number);
    self.base_port_number = next_base;

    debug!(
      "端口排 {}: 上行 {} 个，下行 {} 个",
      self.stack_seq,
      rows.upper.len(),
      rows.lower.len()
    );
    self.current.lan_port_stacks.push(StackRecord {
      stack_id: stack_id(self.stack_seq),
      lan_ports: [rows.upper, rows.lower],
    });
    self.stack_seq += 1;
  }

  /// 收尾当前交换机并另起一台：交换机号递增，
  /// 端口基号复位，切分基准更新为新端口排的 y_min。
  fn roll_over(&mut self, y_min: f32) {
    info!(
      "纵向间距超过 {:.0}，切分新交换机 {}",
      self.config.switch_gap,
      self.switch_seq + 1
    );
    self.switch_seq += 1;
    let finished = std::mem::replace(
      &mut self.current,
      SwitchRecord {
        switch_id: switch_id(self.switch_seq),
        lan_port_stacks: Vec::new(),
      },
    );
    self.switches.push(finished);
    self.switch_start = y_min;
    self.base_port_number = 1;
  }

  /// 结束扫描：无条件收尾最后一台在建的交换机。
  fn finish(mut self) -> Vec<SwitchRecord> {
    self.switches.push(self.current);
    self.switches
  }
}

/// 把全图的端口排切分为交换机并完成端口编号。
/// 端口排按 y_min 升序扫描；没有任何端口排时返回空列表，不算错误。
pub fn segment_switches(
  stacks: &[&Detection],
  ports: &[&Detection],
  config: &AssemblerConfig,
) -> Vec<SwitchRecord> {
  let mut sorted: Vec<&Detection> = stacks.to_vec();
  sorted.sort_by(|a, b| a.bbox.y_min.total_cmp(&b.bbox.y_min));

  let Some(first) = sorted.first() else {
    info!("未检测到端口排");
    return Vec::new();
  };

  let mut segmenter = SwitchSegmenter::new(config, first.bbox.y_min);
  for &stack in &sorted {
    segmenter.step(stack, ports);
  }
  segmenter.finish()
}
