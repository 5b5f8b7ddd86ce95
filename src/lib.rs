//! envprep - 配置文件准备工具
//!
//! 流程：读取 dev.env → 校验必需变量 → 替换 config.yaml 中的变量引用 →
//! 写出临时配置文件

pub mod cli;
pub mod env_file;
pub mod error;
pub mod prepare;
pub mod substitute;
pub mod types;

// 重新导出常用类型
pub use error::{PrepError, Result};
pub use types::{EnvEntry, EnvMap, OutputFormat};
