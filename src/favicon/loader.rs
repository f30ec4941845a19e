//! # 源文件加载模块
//!
//! ## 设计思路
//!
//! 在完整解码之前完成所有廉价校验：存在性、体积上限、图片签名。
//! 提前拒绝非图片输入，降低恶意或误配输入触发高内存解码的风险。

use std::path::Path;

use super::source::RawImageData;
use super::{FaviconConfig, FaviconError, FaviconGenerator};

impl FaviconGenerator {
    /// 从本地路径加载源图原始字节。
    pub(super) fn load_source(
        &self,
        path: &Path,
        config: &FaviconConfig,
    ) -> Result<RawImageData, FaviconError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(FaviconError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| FaviconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(FaviconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| FaviconError::FileSystem(format!("无法读取源图文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: "file",
        })
    }

    /// 通过魔数签名快速判断字节流是否为已知图片格式。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), FaviconError> {
        image::guess_format(bytes)
            .map_err(|e| FaviconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;
        Ok(())
    }
}
