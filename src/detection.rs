// 该文件是 Wangkou （网口） 项目的一部分。
// src/detection.rs - 检测结果数据模型
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use serde::Serialize;
use thiserror::Error;

use crate::geometry::{BoundingBox, GeometryError};

#[derive(Error, Debug)]
pub enum DetectionError {
  #[error("未知的目标类别: {0}")]
  UnknownClass(String),
  #[error(transparent)]
  Geometry(#[from] GeometryError),
}

/// 检测类别，对应检测端 data.yaml 的固定类别表。
/// 类别表是封闭的：任何未列出的编号或名称在摄入阶段即报错，
/// 不会进入后续的聚类流程。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
  /// 0: 已插网线的 LAN 口
  Cable,
  /// 1: 空闲 LAN 口
  EmptyPort,
  /// 2: LAN 口排
  PortStack,
  /// 3: 交换机
  Switch,
}

impl ObjectClass {
  pub fn from_class_id(id: u32) -> Result<Self, DetectionError> {
    match id {
      0 => Ok(ObjectClass::Cable),
      1 => Ok(ObjectClass::EmptyPort),
      2 => Ok(ObjectClass::PortStack),
      3 => Ok(ObjectClass::Switch),
      other => Err(DetectionError::UnknownClass(other.to_string())),
    }
  }

  pub fn from_label(label: &str) -> Result<Self, DetectionError> {
    match label {
      "Cable" => Ok(ObjectClass::Cable),
      "EmptyPort" => Ok(ObjectClass::EmptyPort),
      "PortStack" => Ok(ObjectClass::PortStack),
      "Switch" => Ok(ObjectClass::Switch),
      other => Err(DetectionError::UnknownClass(other.to_string())),
    }
  }

  pub fn to_label_str(&self) -> &'static str {
    match self {
      ObjectClass::Cable => "Cable",
      ObjectClass::EmptyPort => "EmptyPort",
      ObjectClass::PortStack => "PortStack",
      ObjectClass::Switch => "Switch",
    }
  }

  /// 标注图上使用的显示名称
  pub fn display_name(&self) -> &'static str {
    match self {
      ObjectClass::Cable => "有线端口",
      ObjectClass::EmptyPort => "空闲端口",
      ObjectClass::PortStack => "端口排",
      ObjectClass::Switch => "交换机",
    }
  }

  /// 是否为端口级别的类别（有线或空闲）
  pub fn is_port(&self) -> bool {
    matches!(self, ObjectClass::Cable | ObjectClass::EmptyPort)
  }

  /// 端口状态仅由类别派生，端口排与交换机没有状态。
  pub fn port_status(&self) -> Option<PortStatus> {
    match self {
      ObjectClass::Cable => Some(PortStatus::Cable),
      ObjectClass::EmptyPort => Some(PortStatus::Empty),
      ObjectClass::PortStack | ObjectClass::Switch => None,
    }
  }
}

/// 端口状态。序列化字符串沿用检测端既有的交换格式：
/// 有线为 "Cable"，空闲为小写 "empty"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PortStatus {
  Cable,
  #[serde(rename = "empty")]
  Empty,
}

/// 单条检测结果，摄入校验后不再变动。
#[derive(Debug, Clone)]
pub struct Detection {
  pub bbox: BoundingBox,
  pub confidence: f32,
  pub class: ObjectClass,
}

impl Detection {
  pub fn new(bbox: BoundingBox, confidence: f32, class: ObjectClass) -> Self {
    Self {
      bbox,
      confidence,
      class,
    }
  }
}
