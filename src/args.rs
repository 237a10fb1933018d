// 该文件是 Wangkou （网口） 项目的一部分。
// src/args.rs - 项目参数配置
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::PathBuf;

use clap::Parser;

/// Wangkou 项目参数配置
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 检测结果文件路径
  /// 支持格式:
  /// - JSON: *.json
  /// - 记录行: *.txt / *.csv （label, conf, x1, y1, x2, y2）
  #[arg(long, value_name = "FILE")]
  pub detections: PathBuf,

  /// 拓扑 JSON 输出路径（省略时打印到标准输出）
  #[arg(long, value_name = "OUTPUT")]
  pub output: Option<PathBuf>,

  /// 原始图像路径，配合 --annotated 绘制标注图
  #[cfg(feature = "save_image_file")]
  #[arg(long, value_name = "IMAGE")]
  pub image: Option<PathBuf>,

  /// 标注图输出路径
  #[cfg(feature = "save_image_file")]
  #[arg(long, value_name = "OUTPUT")]
  pub annotated: Option<PathBuf>,

  /// 标签字体文件路径（省略时只画框不写标签）
  #[cfg(feature = "save_image_file")]
  #[arg(long, value_name = "FONT")]
  pub font: Option<PathBuf>,

  /// 列聚类阈值系数（乘以端口排内的平均横向间距）
  #[arg(long, default_value = "0.5", value_name = "RATIO")]
  pub column_gap_ratio: f32,

  /// 平均间距不可用时的固定列聚类阈值（像素）
  #[arg(long, default_value = "10", value_name = "THRESHOLD")]
  pub column_fallback_gap: f32,

  /// 交换机切分的纵向距离阈值（像素）
  #[arg(long, default_value = "500", value_name = "THRESHOLD")]
  pub switch_gap: f32,
}
