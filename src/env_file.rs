//! dev.env 格式解析器 (简单原则：透明的文本解析)

use crate::error::{PrepError, Result};
use crate::types::EnvMap;
use std::fs;
use std::path::Path;

/// env 文件解析器
pub struct EnvFileParser;

impl EnvFileParser {
    /// 解析 env 文件内容
    ///
    /// 规则：
    /// - 忽略空行和以 # 开头的注释行
    /// - 格式：KEY=VALUE，只在第一个 = 处分割
    /// - 键和值两侧的空白会被去除
    /// - 值两侧一对匹配的 " 或 ' 引号会被去除，内部字符不做转义
    /// - 没有 = 的行被跳过，保持兼容性
    pub fn parse(content: &str) -> Vec<(String, String)> {
        let mut vars = Vec::new();

        for line in content.lines() {
            let line = line.trim();

            // 跳过空行和注释
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // 解析 KEY=VALUE
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            let value = strip_quotes(value.trim());
            vars.push((key.to_string(), value.to_string()));
        }

        vars
    }

    /// 加载 env 文件并写入 `EnvMap`，返回写入的赋值条数
    ///
    /// 同名键按文件顺序覆盖（最后一次赋值生效）。
    ///
    /// # Errors
    ///
    /// 文件不存在时返回 `MissingEnvFile`。
    pub fn load(path: &Path, env: &mut EnvMap) -> Result<usize> {
        if !path.exists() {
            return Err(PrepError::MissingEnvFile(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let vars = Self::parse(&content);
        let count = vars.len();

        for (key, value) in vars {
            env.set(key, value);
        }

        Ok(count)
    }
}

/// 去除值两侧一对匹配的引号
///
/// 只处理首尾字符相同且为 " 或 ' 的情况，单个引号字符不算一对。
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
