//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `FaviconConfig`，保证运行时行为可观测、可测试。
//! 路径与尺寸列表按产品约定为编译期默认值，不从环境变量或命令行读取。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产使用的固定配置（源 PNG、输出 ICO、四个尺寸）。
//! - `validate` 在生成器构造时执行，拒绝空列表、重复尺寸与乱序尺寸，
//!   保证输出容器“恰好包含配置的每个尺寸、不缺失不重复”的不变量。

use std::path::PathBuf;

use image::imageops::FilterType;

use super::FaviconError;

/// ICO 容器单边允许的最大像素尺寸。
const MAX_ICO_DIMENSION: u32 = 256;

/// favicon 生成配置。
///
/// 字段覆盖了源文件读取、解码与降采样三个阶段。
#[derive(Debug, Clone)]
pub struct FaviconConfig {
    /// 源 PNG 文件路径（相对工作目录）。
    pub input_path: PathBuf,
    /// 输出 ICO 文件路径（相对工作目录），存在时覆盖。
    pub output_path: PathBuf,
    /// 目标尺寸列表，按升序嵌入容器，首个为主图标。
    pub sizes: Vec<(u32, u32)>,
    /// 降采样滤镜策略，默认 Lanczos3 以保证缩小后的视觉质量。
    pub resize_filter: FilterType,
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("public/NextTripAnywhere.PNG"),
            output_path: PathBuf::from("public/favicon.ico"),
            sizes: vec![(16, 16), (32, 32), (48, 48), (64, 64)],
            resize_filter: FilterType::Lanczos3,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}

impl FaviconConfig {
    /// 校验尺寸列表是否满足容器不变量。
    ///
    /// 规则：非空、无重复、按面积严格升序、单边不超过 ICO 上限。
    pub(super) fn validate(&self) -> Result<(), FaviconError> {
        if self.sizes.is_empty() {
            return Err(FaviconError::Config("尺寸列表不能为空".to_string()));
        }

        let mut previous: Option<(u32, u32)> = None;
        for &(width, height) in &self.sizes {
            if width == 0 || height == 0 {
                return Err(FaviconError::Config(format!(
                    "非法尺寸：{}x{}（宽高必须大于 0）",
                    width, height
                )));
            }
            if width > MAX_ICO_DIMENSION || height > MAX_ICO_DIMENSION {
                return Err(FaviconError::Config(format!(
                    "尺寸超出 ICO 上限：{}x{}（单边最大 {}）",
                    width, height, MAX_ICO_DIMENSION
                )));
            }
            if let Some((prev_width, prev_height)) = previous {
                if (width, height) == (prev_width, prev_height) {
                    return Err(FaviconError::Config(format!(
                        "尺寸重复：{}x{}",
                        width, height
                    )));
                }
                if (width as u64) * (height as u64) <= (prev_width as u64) * (prev_height as u64) {
                    return Err(FaviconError::Config(format!(
                        "尺寸列表必须严格升序：{}x{} 出现在 {}x{} 之后",
                        width, height, prev_width, prev_height
                    )));
                }
            }
            previous = Some((width, height));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_product_contract() {
        let config = FaviconConfig::default();

        assert_eq!(config.input_path, PathBuf::from("public/NextTripAnywhere.PNG"));
        assert_eq!(config.output_path, PathBuf::from("public/favicon.ico"));
        assert_eq!(config.sizes, vec![(16, 16), (32, 32), (48, 48), (64, 64)]);
        assert!(matches!(config.resize_filter, FilterType::Lanczos3));
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn validate_rejects_empty_size_list() {
        let mut config = FaviconConfig::default();
        config.sizes.clear();

        assert!(matches!(config.validate(), Err(FaviconError::Config(_))));
    }

    #[test]
    fn validate_rejects_duplicate_sizes() {
        let mut config = FaviconConfig::default();
        config.sizes = vec![(16, 16), (16, 16), (32, 32)];

        assert!(matches!(config.validate(), Err(FaviconError::Config(_))));
    }

    #[test]
    fn validate_rejects_descending_sizes() {
        let mut config = FaviconConfig::default();
        config.sizes = vec![(32, 32), (16, 16)];

        assert!(matches!(config.validate(), Err(FaviconError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_and_oversized_dimensions() {
        let mut config = FaviconConfig::default();
        config.sizes = vec![(0, 16)];
        assert!(matches!(config.validate(), Err(FaviconError::Config(_))));

        config.sizes = vec![(16, 16), (512, 512)];
        assert!(matches!(config.validate(), Err(FaviconError::Config(_))));
    }
}
