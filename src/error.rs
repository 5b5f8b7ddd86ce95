//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("未找到环境变量文件 {0}")]
    MissingEnvFile(PathBuf),

    #[error("必需的环境变量 {name} 未设置")]
    MissingVariable { name: String, env_file: PathBuf },

    #[error("文件不存在: {0}")]
    FileNotFound(PathBuf),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrepError {
    /// 报告错误，支持详细/安静模式
    ///
    /// 诊断信息和补救提示总是打印；verbose = true 时额外打印级联错误链
    pub fn report(&self, verbose: bool) {
        eprintln!("错误: {self}");

        // 补救提示 (透明原则：告诉用户下一步怎么做)
        match self {
            PrepError::MissingEnvFile(path) => {
                eprintln!(
                    "请复制 dev.env.example 为 {} 并填入真实配置信息",
                    path.display()
                );
            }
            PrepError::MissingVariable { env_file, .. } => {
                eprintln!("请检查 {} 文件中的配置", env_file.display());
            }
            _ => {}
        }

        if verbose {
            // 详细模式：打印完整错误链
            // (thiserror 支持自动的 source() 链)
            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PrepError>;
