//! # 解码与绘制流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 铺满绘制”集中管理，相当于浏览器里 `<img>` 的 load 事件
//! 加上一次 `drawImage`。解码前先读 header 尺寸做像素上限检查，
//! 避免超大图片在完整解码时占满内存。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. 计算铺满裁剪区域（零尺寸直接拒绝，不绘制）
//! 5. `fast_image_resize` 小数裁剪 + 缩放；失败时回退到 `image::imageops`
//! 6. 整体替换表面像素

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageReader, Rgba, RgbaImage};
use std::io::Cursor;

use super::config::ResizeFilter;
use super::crop::CropRegion;
use super::source::RawImageData;
use super::{PickerConfig, PickerError, RenderSurface};

/// 将原始字节解码为图像。
pub(crate) fn decode_image(raw: RawImageData, config: &PickerConfig) -> Result<DynamicImage, PickerError> {
    let reader = ImageReader::new(Cursor::new(raw.bytes.as_slice()))
        .with_guessed_format()
        .map_err(|e| PickerError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;
    if reader.format().is_none() {
        return Err(PickerError::InvalidFormat(format!("不支持的图片格式（来源：{}）", raw.source_hint)));
    }

    // header 尺寸先过一遍像素预算，超大图片不做完整解码
    let (header_width, header_height) = reader
        .into_dimensions()
        .map_err(|e| PickerError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))?;
    ensure_pixel_budget(header_width, header_height, config.max_decoded_pixels)?;

    let decoded = image::load_from_memory(&raw.bytes)
        .map_err(|e| PickerError::Decode(format!("图片解码失败：{}", e)))?;
    let (width, height) = decoded.dimensions();
    ensure_pixel_budget(width, height, config.max_decoded_pixels)?;

    log::info!("✅ 图片解码成功 - 来源: {} 尺寸: {}x{}", raw.source_hint, width, height);

    Ok(decoded)
}

fn ensure_pixel_budget(width: u32, height: u32, budget: u64) -> Result<(), PickerError> {
    // u32 × u32 不会溢出 u64
    let pixels = width as u64 * height as u64;
    if pixels <= budget {
        return Ok(());
    }

    Err(PickerError::ResourceLimit(format!(
        "{}x{} 共 {} 像素，超过上限 {}",
        width, height, pixels, budget
    )))
}

impl RenderSurface {
    /// 以铺满策略将整张图片绘制到表面，覆盖原有内容。
    ///
    /// 相同输入重复调用得到完全相同的像素。零尺寸图片返回
    /// `DegenerateImage`，表面保持不变。
    pub fn draw_cover(
        &mut self,
        image: &DynamicImage,
        filter: ResizeFilter,
    ) -> Result<CropRegion, PickerError> {
        let (natural_width, natural_height) = image.dimensions();
        let (width, height) = (self.width(), self.height());
        let crop = CropRegion::cover(natural_width, natural_height, width, height)?;

        let mut drawn = match resize_with_fast_image_resize(image, &crop, width, height, filter) {
            Ok(drawn) => drawn,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 绘制失败，回退 image::imageops：{}", err);
                resize_with_imageops(image, &crop, width, height, filter)
            }
        };
        clear_transparent_rgb(&mut drawn);

        self.pixels = drawn;

        log::debug!(
            "🖼️ 已绘制 {}x{} → {}x{}（crop x={:.2} y={:.2} w={:.2} h={:.2}）",
            natural_width,
            natural_height,
            width,
            height,
            crop.source_x,
            crop.source_y,
            crop.source_width,
            crop.source_height
        );

        Ok(crop)
    }
}

fn resize_with_fast_image_resize(
    image: &DynamicImage,
    crop: &CropRegion,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<RgbaImage, PickerError> {
    let src = image.to_rgba8();
    let (src_width, src_height) = src.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.into_raw(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| PickerError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(to_fast_alg(filter))
        .crop(crop.source_x, crop.source_y, crop.source_width, crop.source_height);

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| PickerError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| PickerError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

/// 完全透明的像素 RGB 一律置 0。
///
/// 画布按预乘 alpha 存储，alpha 为 0 时读回的颜色恒为黑色；
/// 统一之后采样结果不再随滤镜变化。
fn clear_transparent_rgb(pixels: &mut RgbaImage) {
    for pixel in pixels.pixels_mut().filter(|p| p[3] == 0) {
        *pixel = Rgba([0, 0, 0, 0]);
    }
}

/// 回退路径：整数裁剪 + `resize_exact`。
fn resize_with_imageops(
    image: &DynamicImage,
    crop: &CropRegion,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> RgbaImage {
    let (natural_width, natural_height) = image.dimensions();
    let (x, y, width, height) = crop.to_pixel_rect(natural_width, natural_height);

    image
        .crop_imm(x, y, width, height)
        .resize_exact(target_width, target_height, filter.into())
        .to_rgba8()
}

fn to_fast_alg(filter: ResizeFilter) -> fr::ResizeAlg {
    match filter {
        ResizeFilter::Nearest => fr::ResizeAlg::Nearest,
        ResizeFilter::Triangle => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        ResizeFilter::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        ResizeFilter::Gaussian => fr::ResizeAlg::Convolution(fr::FilterType::Mitchell),
        ResizeFilter::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
    }
}
