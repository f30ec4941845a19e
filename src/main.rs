//! # favicon 生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化、生成器调用与退出码处理。
//! 业务逻辑分布在 `favicon` 子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use favicon_gen::favicon::{FaviconConfig, FaviconGenerator};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = match FaviconGenerator::new(FaviconConfig::default()) {
        Ok(generator) => generator,
        Err(err) => {
            log::error!("生成器初始化失败: {err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match generator.generate() {
        Ok(report) => {
            // 对外约定的成功输出：一行确认信息，列出产出尺寸
            println!(
                "Successfully created {} with sizes: {}",
                report.output_path.display(),
                report.sizes_label()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("favicon 生成失败: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
