// 该文件是 Wangkou （网口） 项目的一部分。
// src/main.rs - 项目主程序
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use wangkou::config::AssemblerConfig;
use wangkou::input::read_detections_file;
use wangkou::topology::assemble;

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args = args::Args::parse();

  info!("检测文件: {}", args.detections.display());

  // 阈值在启动时统一校验，不合法直接退出
  let config = AssemblerConfig::new(
    args.column_gap_ratio,
    args.column_fallback_gap,
    args.switch_gap,
  )?;

  let detections = read_detections_file(&args.detections)?;
  info!("读取 {} 条检测", detections.len());

  let topology = assemble(&detections, &config);
  let json = topology.to_json_pretty()?;
  match &args.output {
    Some(path) => {
      std::fs::write(path, &json)?;
      info!("拓扑已写入: {}", path.display());
    }
    None => println!("{json}"),
  }

  #[cfg(feature = "save_image_file")]
  if let Some(annotated) = &args.annotated {
    use wangkou::render::{Draw, render_items};

    let Some(image_path) = &args.image else {
      anyhow::bail!("--annotated 需要同时提供 --image");
    };
    let mut canvas = image::open(image_path)?.to_rgb8();
    let draw = match &args.font {
      Some(font) => Draw::with_font_file(font)?,
      None => Draw::default(),
    };
    draw.draw_items_on_image(&mut canvas, &render_items(&detections));
    canvas.save(annotated)?;
    info!("标注图已保存: {}", annotated.display());
  }

  Ok(())
}
