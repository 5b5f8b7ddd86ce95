//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::Serialize;
use std::collections::HashMap;

/// 环境变量映射
///
/// 显式传递的不可变快照构建结果，不污染进程环境。
/// 以宿主环境变量为种子，env 文件的赋值按顺序覆盖（后写的赢）。
#[derive(Debug, Clone, Default)]
pub struct EnvMap {
    vars: HashMap<String, String>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以当前进程环境为种子
    pub fn from_system() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// 写入变量，覆盖同名旧值
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// 读取变量，未设置时返回默认值
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// 环境变量条目（用于 JSON 输出）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

/// 输出格式类型
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    ENV,
    JSON,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::ENV
    }
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::JSON,
            _ => OutputFormat::ENV,
        }
    }
}
