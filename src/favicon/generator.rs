//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `FaviconGenerator` 只负责流程编排与配置持有，不直接与入口绑定。
//! 处理链路固定为：
//! 1. 加载源文件原始字节
//! 2. 解码为只读源图
//! 3. 按配置尺寸列表逐个缩放
//! 4. 内存中编码 ICO 容器
//! 5. 一次性写入输出文件
//!
//! ## 实现思路
//!
//! - 配置在构造时完成校验，生成过程中不再变化。
//! - 记录 `load/decode/resize/encode/write/total` 阶段耗时，便于性能诊断。
//! - 任何阶段失败都立即返回，输出文件不会被创建或破坏。

use std::path::PathBuf;
use std::time::Instant;

use super::{FaviconConfig, FaviconError};

/// favicon 生成器。
///
/// 封装了生成配置，并编排各子模块实现完整流程。
pub struct FaviconGenerator {
    config: FaviconConfig,
}

/// 单次生成的结果报告，供入口层打印确认信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconReport {
    /// 实际写入的输出路径。
    pub output_path: PathBuf,
    /// 按嵌入顺序列出的产出尺寸。
    pub sizes: Vec<(u32, u32)>,
}

impl FaviconReport {
    /// 将尺寸列表格式化为 `[(16, 16), (32, 32), ...]` 形式。
    pub fn sizes_label(&self) -> String {
        let pairs: Vec<String> = self
            .sizes
            .iter()
            .map(|(width, height)| format!("({}, {})", width, height))
            .collect();
        format!("[{}]", pairs.join(", "))
    }
}

impl FaviconGenerator {
    /// 根据配置创建生成器，构造时即校验尺寸列表不变量。
    pub fn new(config: FaviconConfig) -> Result<Self, FaviconError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 当前生效配置的只读视图。
    pub fn config(&self) -> &FaviconConfig {
        &self.config
    }

    /// 生成主入口：加载源图、缩放全部尺寸并写出 ICO 容器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use favicon_gen::favicon::{FaviconConfig, FaviconGenerator};
    ///
    /// let generator = FaviconGenerator::new(FaviconConfig::default())?;
    /// let report = generator.generate()?;
    /// println!("{}", report.sizes_label());
    /// # Ok::<(), favicon_gen::favicon::FaviconError>(())
    /// ```
    pub fn generate(&self) -> Result<FaviconReport, FaviconError> {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_source(&config.input_path, config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let source = self.decode_source(raw, config)?;
        let decode_elapsed = decode_start.elapsed();

        let resize_start = Instant::now();
        let mut variants = Vec::with_capacity(config.sizes.len());
        for &(width, height) in &config.sizes {
            variants.push(self.resize_variant(&source, width, height, config.resize_filter)?);
        }
        let resize_elapsed = resize_start.elapsed();

        let encode_start = Instant::now();
        let encoded = self.encode_container(&variants)?;
        let encode_elapsed = encode_start.elapsed();

        let write_start = Instant::now();
        self.write_output(&config.output_path, &encoded)?;
        let write_elapsed = write_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ favicon 生成完成 - load={}ms decode={}ms resize={}ms encode={}ms write={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(FaviconReport {
            output_path: config.output_path.clone(),
            sizes: config.sizes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
    use proptest::prelude::*;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn unique_test_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "favicon-gen-generator-{}-{}-{}",
            label,
            std::process::id(),
            TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&dir).expect("create test dir failed");
        dir
    }

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            let r = (x % 255) as u8;
            let g = (y % 255) as u8;
            let b = ((x + y) % 255) as u8;
            Rgba([r, g, b, 255])
        });

        let dyn_img = DynamicImage::ImageRgba8(img);
        let mut cursor = Cursor::new(Vec::new());
        dyn_img
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        std::fs::write(path, cursor.into_inner()).expect("write test png failed");
    }

    fn config_for(input: &Path, output: &Path) -> FaviconConfig {
        let mut config = FaviconConfig::default();
        config.input_path = input.to_path_buf();
        config.output_path = output.to_path_buf();
        config
    }

    fn read_entry_dims(ico_bytes: &[u8]) -> Vec<(u32, u32)> {
        let dir = ico::IconDir::read(Cursor::new(ico_bytes)).expect("read back ico failed");
        dir.entries()
            .iter()
            .map(|entry| (entry.width(), entry.height()))
            .collect()
    }

    #[test]
    fn generate_writes_container_with_four_ascending_entries() {
        let dir = unique_test_dir("happy-path");
        let input = dir.join("source.png");
        let output = dir.join("favicon.ico");
        write_test_png(&input, 512, 512);

        let generator =
            FaviconGenerator::new(config_for(&input, &output)).expect("generator init failed");
        let report = generator.generate().expect("generate should succeed");

        assert_eq!(report.output_path, output);
        assert_eq!(report.sizes, vec![(16, 16), (32, 32), (48, 48), (64, 64)]);

        let bytes = std::fs::read(&output).expect("read output failed");
        assert_eq!(
            read_entry_dims(&bytes),
            vec![(16, 16), (32, 32), (48, 48), (64, 64)]
        );
    }

    #[test]
    fn generate_is_byte_for_byte_idempotent() {
        let dir = unique_test_dir("idempotent");
        let input = dir.join("source.png");
        let output = dir.join("favicon.ico");
        write_test_png(&input, 256, 256);

        let generator =
            FaviconGenerator::new(config_for(&input, &output)).expect("generator init failed");

        generator.generate().expect("first run should succeed");
        let first = std::fs::read(&output).expect("read first output failed");

        generator.generate().expect("second run should succeed");
        let second = std::fs::read(&output).expect("read second output failed");

        assert_eq!(first, second);
    }

    #[test]
    fn generate_overwrites_existing_output() {
        let dir = unique_test_dir("overwrite");
        let input = dir.join("source.png");
        let output = dir.join("favicon.ico");
        write_test_png(&input, 128, 128);
        std::fs::write(&output, b"stale content").expect("seed stale output failed");

        let generator =
            FaviconGenerator::new(config_for(&input, &output)).expect("generator init failed");
        generator.generate().expect("generate should succeed");

        let bytes = std::fs::read(&output).expect("read output failed");
        assert_eq!(read_entry_dims(&bytes).len(), 4);
    }

    #[test]
    fn generate_fails_on_missing_input_without_touching_output() {
        let dir = unique_test_dir("missing-input");
        let input = dir.join("no-such-source.png");
        let output = dir.join("favicon.ico");

        let generator =
            FaviconGenerator::new(config_for(&input, &output)).expect("generator init failed");
        let result = generator.generate();

        assert!(matches!(result, Err(FaviconError::FileSystem(_))));
        assert!(!output.exists());
    }

    #[test]
    fn generate_fails_on_non_image_input_without_touching_output() {
        let dir = unique_test_dir("non-image-input");
        let input = dir.join("renamed.PNG");
        let output = dir.join("favicon.ico");
        std::fs::write(&input, "this is a text file").expect("write fixture failed");

        let generator =
            FaviconGenerator::new(config_for(&input, &output)).expect("generator init failed");
        let result = generator.generate();

        assert!(matches!(result, Err(FaviconError::InvalidFormat(_))));
        assert!(!output.exists());
    }

    #[test]
    fn generate_fails_on_unwritable_output_directory() {
        let dir = unique_test_dir("unwritable-output");
        let input = dir.join("source.png");
        let output = dir.join("does-not-exist").join("favicon.ico");
        write_test_png(&input, 128, 128);

        let generator =
            FaviconGenerator::new(config_for(&input, &output)).expect("generator init failed");
        let result = generator.generate();

        assert!(matches!(result, Err(FaviconError::FileSystem(_))));
        assert!(!output.exists());
    }

    #[test]
    fn sizes_label_matches_console_contract() {
        let report = FaviconReport {
            output_path: PathBuf::from("public/favicon.ico"),
            sizes: vec![(16, 16), (32, 32), (48, 48), (64, 64)],
        };

        assert_eq!(
            report.sizes_label(),
            "[(16, 16), (32, 32), (48, 48), (64, 64)]"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn any_source_at_least_64px_yields_exactly_four_entries(
            width in 64_u32..=320,
            height in 64_u32..=320,
        ) {
            let dir = unique_test_dir("property");
            let input = dir.join("source.png");
            let output = dir.join("favicon.ico");
            write_test_png(&input, width, height);

            let generator = FaviconGenerator::new(config_for(&input, &output))
                .expect("generator init failed");
            generator.generate().expect("generate should succeed");

            let bytes = std::fs::read(&output).expect("read output failed");
            prop_assert_eq!(
                read_entry_dims(&bytes),
                vec![(16, 16), (32, 32), (48, 48), (64, 64)]
            );
        }
    }
}
