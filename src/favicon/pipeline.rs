//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 多尺寸 RGBA 变体”的过程集中管理，并在关键节点增加
//! 资源上限控制。优先做尺寸检查，再进行完整解码，降低恶意输入触发
//! 高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. 对每个目标尺寸执行 Lanczos 卷积缩放（fast_image_resize），
//!    失败时回退 `image::resize_exact`
//! 5. 转换 RGBA，并校验字节长度一致性

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use std::io::Cursor;

use super::source::{RawImageData, ResizedVariant};
use super::{FaviconConfig, FaviconError, FaviconGenerator};

impl FaviconGenerator {
    /// 将原始字节解码为只读源图。
    pub(super) fn decode_source(
        &self,
        raw: RawImageData,
        config: &FaviconConfig,
    ) -> Result<DynamicImage, FaviconError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        self.validate_pixel_limits(config, header_width, header_height)?;
        self.validate_decoded_memory_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| FaviconError::Decode(format!("源图解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        self.validate_pixel_limits(config, width, height)?;
        self.validate_decoded_memory_limits(config, width, height)?;

        log::info!(
            "✅ 源图解码成功 - 来源: {} 尺寸: {}x{}",
            raw.source_hint,
            width,
            height
        );

        Ok(decoded)
    }

    /// 产出单个目标尺寸的 RGBA 变体。
    ///
    /// 优先走 `fast_image_resize` 的卷积路径以获得确定性的高质量输出；
    /// 构建缓冲失败时回退到 `image::resize_exact`。
    pub(super) fn resize_variant(
        &self,
        source: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<ResizedVariant, FaviconError> {
        let resized =
            match Self::resize_with_fast_image_resize(source, target_width, target_height, filter)
            {
                Ok(resized) => resized,
                Err(err) => {
                    log::warn!(
                        "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                        err
                    );
                    source.resize_exact(target_width, target_height, filter)
                }
            };

        let rgba = resized.to_rgba8();
        let bytes = rgba.into_raw();

        let expected_len = (target_width as usize)
            .checked_mul(target_height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| FaviconError::ResourceLimit("目标尺寸导致内存溢出风险".to_string()))?;

        if bytes.len() != expected_len {
            return Err(FaviconError::Decode("缩放后像素数据长度异常".to_string()));
        }

        Ok(ResizedVariant {
            width: target_width,
            height: target_height,
            rgba: bytes,
        })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), FaviconError> {
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| FaviconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| FaviconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        &self,
        config: &FaviconConfig,
        width: u32,
        height: u32,
    ) -> Result<(), FaviconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| FaviconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(FaviconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        &self,
        config: &FaviconConfig,
        width: u32,
        height: u32,
    ) -> Result<(), FaviconError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| FaviconError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > config.max_decoded_bytes {
            return Err(FaviconError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<DynamicImage, FaviconError> {
        let src = image.to_rgba8();
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.into_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| FaviconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image =
            fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| FaviconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        let rgba = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| FaviconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
