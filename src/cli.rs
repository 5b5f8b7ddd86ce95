//! CLI 参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// envprep - 配置文件准备工具
#[derive(Parser)]
#[command(
    name = "envprep",
    version = "0.1.0",
    about = "配置文件准备工具",
    long_about = "加载 dev.env 中的环境变量，校验必需配置，替换 config.yaml 模板中的变量引用并生成临时配置文件"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 加载环境变量并生成临时配置文件
    Prepare {
        /// 环境变量文件路径
        #[arg(long, default_value = "dev.env")]
        env_file: PathBuf,

        /// 配置模板路径
        #[arg(long, default_value = "config.yaml")]
        config: PathBuf,

        /// 输出路径（默认为模板路径追加 .tmp 后缀）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 检查环境变量文件与必需变量
    Check {
        /// 环境变量文件路径
        #[arg(long, default_value = "dev.env")]
        env_file: PathBuf,

        /// 输出格式 (env/json)
        #[arg(short, long, default_value = "env")]
        format: String,
    },

    /// 渲染模板到标准输出（不写文件）
    Render {
        /// 环境变量文件路径
        #[arg(long, default_value = "dev.env")]
        env_file: PathBuf,

        /// 配置模板路径
        #[arg(long, default_value = "config.yaml")]
        config: PathBuf,
    },
}
