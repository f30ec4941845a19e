//! # favicon 生成模块（favicon）
//!
//! ## 设计思路
//!
//! 该模块将“源文件加载 → 解码校验 → 多尺寸缩放 → 容器编码 → 落盘”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `generator`：编排整条生成流水线，对外暴露 [`FaviconGenerator`]
//! - `loader`：负责源文件加载与体积/签名安全校验
//! - `pipeline`：负责解码、像素限制、降采样
//! - `encoder`：负责 ICO 容器编码与一次性落盘
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 所有变体在内存中全部就绪并完成容器编码之后才创建输出文件，
//! 保证失败路径不会留下截断的半成品。
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! generator.rs（配置校验 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 / 体积 / 签名校验）
//!    ├─ pipeline.rs（头部尺寸探测 + 解码 + Lanczos 缩放）
//!    └─ encoder.rs（IconDir 内存编码 + fs::write）
//!    ↓
//! FaviconReport
//! ```

mod config;
mod encoder;
mod error;
mod generator;
mod loader;
mod pipeline;
mod source;

pub use config::FaviconConfig;
pub use error::FaviconError;
pub use generator::{FaviconGenerator, FaviconReport};
