//! # 中间数据模型模块
//!
//! 定义流水线各阶段之间传递的数据结构，均为一次性产物：
//! 加载产出原始字节，缩放产出 RGBA 变体，进程退出后全部丢弃。

/// 加载阶段产出的原始图片字节。
pub(super) struct RawImageData {
    pub(super) bytes: Vec<u8>,
    /// 来源提示，仅用于日志展示。
    pub(super) source_hint: &'static str,
}

/// 单个目标尺寸的缩放结果。
///
/// `rgba` 为紧凑的 RGBA8 像素数据，长度恒等于 `width * height * 4`，
/// 由流水线在产出时校验。创建后不再修改。
pub(super) struct ResizedVariant {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) rgba: Vec<u8>,
}
