// 该文件是 Wangkou （网口） 项目的一部分。
// src/input.rs - 检测结果输入
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

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::detection::{Detection, DetectionError, ObjectClass};
use crate::geometry::BoundingBox;

#[derive(Error, Debug)]
pub enum InputError {
  #[error("读取检测文件失败: {0}")]
  Io(#[from] std::io::Error),
  #[error("解析 JSON 检测文件失败: {0}")]
  Json(#[from] serde_json::Error),
  #[error("第 {line} 行记录格式错误: {reason}")]
  MalformedRecord { line: usize, reason: String },
  #[error(transparent)]
  Detection(#[from] DetectionError),
  #[error("不支持的检测文件格式: .{0}")]
  UnsupportedFormat(String),
}

/// 原始检测记录，字段尚未经过类别与几何校验
#[derive(Debug, Deserialize)]
pub struct RawDetection {
  pub class: ClassTag,
  pub confidence: f32,
  pub bbox: [f32; 4],
}

/// 类别标签，兼容类别编号与类别名称两种写法
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClassTag {
  Id(u32),
  Name(String),
}

impl RawDetection {
  /// 校验类别与几何后转为不可变的 Detection。
  /// 任一校验不通过都在此处直接报错，不进入装配流程。
  pub fn validate(self) -> Result<Detection, InputError> {
    let class = match &self.class {
      ClassTag::Id(id) => ObjectClass::from_class_id(*id)?,
      ClassTag::Name(name) => ObjectClass::from_label(name)?,
    };
    let [x_min, y_min, x_max, y_max] = self.bbox;
    let bbox = BoundingBox::new(x_min, y_min, x_max, y_max).map_err(DetectionError::from)?;
    Ok(Detection::new(bbox, self.confidence, class))
  }
}

/// 读取检测文件，按扩展名分派格式：
/// - `.json`: `[{"class": ..., "confidence": ..., "bbox": [x1, y1, x2, y2]}, ...]`
/// - `.txt` / `.csv`: 检测端记录输出的逐行格式 `label, conf, x1, y1, x2, y2`
pub fn read_detections_file(path: &Path) -> Result<Vec<Detection>, InputError> {
  let ext = path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_ascii_lowercase();
  let text = std::fs::read_to_string(path)?;
  let detections = match ext.as_str() {
    "json" => parse_json(&text)?,
    "txt" | "csv" => parse_records(&text)?,
    other => return Err(InputError::UnsupportedFormat(other.to_string())),
  };
  info!("检测文件读取完成: {} 条记录", detections.len());
  Ok(detections)
}

pub fn parse_json(text: &str) -> Result<Vec<Detection>, InputError> {
  let raw: Vec<RawDetection> = serde_json::from_str(text)?;
  raw.into_iter().map(RawDetection::validate).collect()
}

/// 解析记录行格式。空行跳过；类别字段先按编号解析，
/// 解析不成再按名称处理。
pub fn parse_records(text: &str) -> Result<Vec<Detection>, InputError> {
  let mut detections = Vec::new();
  for (idx, raw_line) in text.lines().enumerate() {
    let line = idx + 1;
    let trimmed = raw_line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() != 6 {
      return Err(InputError::MalformedRecord {
        line,
        reason: format!("期望 6 个字段，实际 {}", fields.len()),
      });
    }

    let class = match fields[0].parse::<u32>() {
      Ok(id) => ObjectClass::from_class_id(id)?,
      Err(_) => ObjectClass::from_label(fields[0])?,
    };
    let confidence = parse_number(fields[1], line)?;
    let x_min = parse_number(fields[2], line)?;
    let y_min = parse_number(fields[3], line)?;
    let x_max = parse_number(fields[4], line)?;
    let y_max = parse_number(fields[5], line)?;

    let bbox = BoundingBox::new(x_min, y_min, x_max, y_max).map_err(DetectionError::from)?;
    detections.push(Detection::new(bbox, confidence, class));
  }
  Ok(detections)
}

fn parse_number(field: &str, line: usize) -> Result<f32, InputError> {
  field.parse::<f32>().map_err(|_| InputError::MalformedRecord {
    line,
    reason: format!("无法解析数值: {field}"),
  })
}
