//! # favicon 生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! main.rs（日志初始化 + 退出码）
//!    ↓
//! generator.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（源文件加载 + 体积/签名校验）
//!    ├─ pipeline.rs（解码 + 像素限制 + Lanczos 缩放）
//!    └─ encoder.rs（ICO 容器内存编码 + 一次性落盘）
//!    ↓
//! FaviconReport（输出路径 + 尺寸列表）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`favicon`] | 从 PNG 源图生成多分辨率 favicon.ico 的完整流水线 |
//!
//! 工具为单次执行模型：读取一张源图，按固定尺寸列表
//! （16×16 / 32×32 / 48×48 / 64×64）降采样四次，全部就绪后
//! 一次性写出 ICO 容器文件。任何阶段失败都立即终止，
//! 不产生截断的输出文件。

pub mod favicon;
