// 该文件是 Wangkou （网口） 项目的一部分。
// src/render/draw.rs - 检测结果标注绘制
//
// 本程序遵循 GNU Affero 通用公共许可证（AGPL）许可协议。
// 本程序的发布旨在提供实用价值，但不作任何形式的担保，
// 包括但不限于对适销性或特定用途适用性的默示担保。
// 更多详情请参阅 GNU 通用公共许可证。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, ETVP

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use thiserror::Error;

use crate::render::RenderItem;

// 文本渲染常量
const LABEL_FONT_SIZE: f32 = 20.0;
const LABEL_TEXT_HEIGHT: i32 = 24;
const LABEL_CHAR_WIDTH: f32 = 11.0; // 每字符平均宽度（粗略估计）
const LABEL_TEXT_VERTICAL_PADDING: i32 = 2;
const BOX_THICKNESS: i32 = 2;

#[derive(Error, Debug)]
pub enum DrawError {
  #[error("读取字体文件失败: {0}")]
  FontIo(#[from] std::io::Error),
  #[error("无效的字体文件")]
  FontInvalid(ab_glyph::InvalidFont),
}

pub struct Draw {
  font_size: f32,
  label_text_height: i32,
  label_char_width: f32,
  label_text_vertical_padding: i32,
  font: Option<FontVec>,
}

impl Default for Draw {
  fn default() -> Self {
    Self {
      font_size: LABEL_FONT_SIZE,
      label_text_height: LABEL_TEXT_HEIGHT,
      label_char_width: LABEL_CHAR_WIDTH,
      label_text_vertical_padding: LABEL_TEXT_VERTICAL_PADDING,
      font: None,
    }
  }
}

impl Draw {
  /// 从字体文件加载标签字体。未加载字体时只画框不写标签。
  pub fn with_font_file(path: &Path) -> Result<Self, DrawError> {
    let data = std::fs::read(path)?;
    let font = FontVec::try_from_vec(data).map_err(DrawError::FontInvalid)?;
    Ok(Self {
      font: Some(font),
      ..Self::default()
    })
  }

  /// 把可见的渲染条目绘制到图像上，不可见条目整体跳过。
  pub fn draw_items_on_image(&self, image: &mut RgbImage, items: &[RenderItem]) {
    for item in items.iter().filter(|item| item.visible) {
      self.draw_item(image, item);
    }
  }

  // 绘制一个条目，bbox 为图像绝对像素坐标
  fn draw_item(&self, image: &mut RgbImage, item: &RenderItem) {
    let (w, h) = (image.width() as i32, image.height() as i32);

    let x_min = (item.bbox.x_min.floor() as i32).clamp(0, w - 1);
    let y_min = (item.bbox.y_min.floor() as i32).clamp(0, h - 1);
    let x_max = (item.bbox.x_max.ceil() as i32).clamp(0, w - 1);
    let y_max = (item.bbox.y_max.ceil() as i32).clamp(0, h - 1);

    if x_min >= x_max || y_min >= y_max {
      return;
    }

    // 边框加粗为 2 像素
    for thickness in 0..BOX_THICKNESS {
      let rect_w = x_max - x_min - 2 * thickness;
      let rect_h = y_max - y_min - 2 * thickness;
      if rect_w <= 0 || rect_h <= 0 {
        break;
      }
      draw_hollow_rect_mut(
        image,
        Rect::at(x_min + thickness, y_min + thickness).of_size(rect_w as u32, rect_h as u32),
        Rgb(item.color),
      );
    }

    let Some(font) = &self.font else {
      return;
    };

    // 估算文本大小（粗略估计）
    let text_width = (item.label.chars().count() as f32 * self.label_char_width) as i32;
    let text_height = self.label_text_height;

    // 标签背景放在边框上方，上方放不下时贴着图像顶端
    let label_x = x_min.max(0);
    let label_y = (y_min - text_height).max(0);

    // 确保标签不超出图像边界
    let max_width = (w - label_x).max(0);
    let label_width = text_width.min(max_width) as u32;
    let label_height = text_height as u32;

    if label_width > 0 && label_height > 0 {
      let rect = Rect::at(label_x, label_y).of_size(label_width, label_height);
      draw_filled_rect_mut(image, rect, Rgb(item.color));

      let scale = PxScale::from(self.font_size);
      let text_color = Rgb([0u8, 0u8, 0u8]); // 黑色文本
      draw_text_mut(
        image,
        text_color,
        label_x,
        label_y + self.label_text_vertical_padding,
        scale,
        font,
        &item.label,
      );
    }
  }
}
