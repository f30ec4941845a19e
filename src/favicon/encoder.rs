//! # ICO 容器编码模块
//!
//! ## 设计思路
//!
//! 容器先在内存中完整编码，再一次性写盘。输出文件只会在所有变体
//! 就绪且编码成功之后才被创建或覆盖，失败路径不会留下截断的半成品。
//!
//! ## 实现思路
//!
//! 按配置顺序（升序，最小尺寸在前作为主图标）将每个 RGBA 变体
//! PNG 编码为一个目录项，序列化到内存缓冲后 `fs::write` 落盘。

use std::io::Cursor;
use std::path::Path;

use super::source::ResizedVariant;
use super::{FaviconError, FaviconGenerator};

impl FaviconGenerator {
    /// 将全部变体编码为一个内存中的 ICO 容器。
    pub(super) fn encode_container(
        &self,
        variants: &[ResizedVariant],
    ) -> Result<Vec<u8>, FaviconError> {
        let mut dir = ico::IconDir::new(ico::ResourceType::Icon);

        for variant in variants {
            let image =
                ico::IconImage::from_rgba_data(variant.width, variant.height, variant.rgba.clone());
            let entry = ico::IconDirEntry::encode(&image).map_err(|e| {
                FaviconError::Encode(format!(
                    "编码 {}x{} 目录项失败：{}",
                    variant.width, variant.height, e
                ))
            })?;
            dir.add_entry(entry);
        }

        if dir.entries().len() != variants.len() {
            return Err(FaviconError::Encode(format!(
                "容器目录项数量异常：期望 {}，实际 {}",
                variants.len(),
                dir.entries().len()
            )));
        }

        let mut buffer = Cursor::new(Vec::new());
        dir.write(&mut buffer)
            .map_err(|e| FaviconError::Encode(format!("序列化 ICO 容器失败：{}", e)))?;

        Ok(buffer.into_inner())
    }

    /// 将编码完成的容器一次性写入输出路径，存在时覆盖。
    pub(super) fn write_output(&self, path: &Path, encoded: &[u8]) -> Result<(), FaviconError> {
        std::fs::write(path, encoded).map_err(|e| {
            FaviconError::FileSystem(format!("写入输出文件失败（{}）：{}", path.display(), e))
        })
    }
}
