//! 配置准备流程编排
//!
//! 加载 → 校验 → 替换 → 写出，任何一步失败都终止进程，不产生半成品输出。

use crate::env_file::EnvFileParser;
use crate::error::{PrepError, Result};
use crate::substitute;
use crate::types::{EnvEntry, EnvMap, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// 必需的环境变量（声明式列表，缺一即终止）
pub const REQUIRED_VARS: [&str; 2] = [
    "APPLE_MUSIC_MEDIA_USER_TOKEN_CN",
    "APPLE_MUSIC_AUTH_TOKEN_CN",
];

/// 可选的功能开关变量及其默认值
pub const LOCAL_DEV_VAR: &str = "LOCAL_DEVELOPMENT";
pub const LOCAL_DEV_DEFAULT: &str = "false";

/// prepare 命令的路径配置
pub struct PrepareOptions {
    pub env_file: PathBuf,
    pub config_file: PathBuf,
    pub output_file: PathBuf,
}

/// 默认输出路径：模板文件名追加 .tmp 后缀
pub fn default_output_path(config_file: &Path) -> PathBuf {
    let mut name = config_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    config_file.with_file_name(name)
}

/// 构建环境映射：进程环境为种子，env 文件覆盖
pub fn load_environment(env_file: &Path) -> Result<EnvMap> {
    let mut env = EnvMap::from_system();
    EnvFileParser::load(env_file, &mut env)?;
    Ok(env)
}

/// 校验必需变量，报告第一个缺失项
pub fn check_required(env: &EnvMap, env_file: &Path) -> Result<()> {
    for name in REQUIRED_VARS {
        if !env.contains(name) {
            return Err(PrepError::MissingVariable {
                name: name.to_string(),
                env_file: env_file.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// 主流程：生成临时配置文件并打印使用说明
///
/// 成功后临时文件留在磁盘上，由调用方消费并自行删除，这里从不清理。
pub fn run(opts: &PrepareOptions) -> Result<()> {
    println!("正在加载环境变量...");
    let env = load_environment(&opts.env_file)?;

    // 必须在写出任何文件之前校验
    check_required(&env, &opts.env_file)?;

    println!("正在处理配置文件...");
    let content = read_template(&opts.config_file)?;
    let resolved = substitute::substitute(&content, &env);
    fs::write(&opts.output_file, resolved)?;

    println!("环境变量加载完成");
    println!("临时配置文件已创建: {}", opts.output_file.display());
    println!("程序可以使用此临时配置文件运行");
    println!();
    println!("已加载的环境变量:");
    for name in REQUIRED_VARS {
        println!("- {name}: 已设置");
    }
    println!(
        "- {}: {}",
        LOCAL_DEV_VAR,
        env.get_or(LOCAL_DEV_VAR, LOCAL_DEV_DEFAULT)
    );
    println!();
    println!("使用说明:");
    println!(
        "1. 程序启动时请使用临时配置文件: {}",
        opts.output_file.display()
    );
    println!("2. 或者直接在程序中引用环境变量");
    println!("3. 程序运行结束后可删除临时配置文件");

    Ok(())
}

/// render 命令：替换后写到标准输出，不落盘，不做必需变量校验
pub fn render(env_file: &Path, config_file: &Path) -> Result<()> {
    let env = load_environment(env_file)?;
    let content = read_template(config_file)?;
    print!("{}", substitute::substitute(&content, &env));
    Ok(())
}

/// check 命令：报告必需/可选变量状态并列出文件内的变量
///
/// 列表只包含 env 文件自身的变量；必需性校验用合并后的完整环境。
pub fn check(env_file: &Path, format: &OutputFormat, verbose: bool) -> Result<()> {
    if !env_file.exists() {
        return Err(PrepError::MissingEnvFile(env_file.to_path_buf()));
    }

    let content = fs::read_to_string(env_file)?;
    let file_vars = EnvFileParser::parse(&content);

    let mut env = EnvMap::from_system();
    for (key, value) in &file_vars {
        env.set(key.clone(), value.clone());
    }

    match format {
        OutputFormat::JSON => {
            let entries: Vec<EnvEntry> = file_vars
                .iter()
                .map(|(key, value)| EnvEntry {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::ENV => {
            println!("环境变量文件: {}", env_file.display());
            println!("文件内变量: {} 个", file_vars.len());
            if verbose {
                for (key, value) in &file_vars {
                    println!("  {key}={value}");
                }
            }
            for name in REQUIRED_VARS {
                let status = if env.contains(name) {
                    "已设置"
                } else {
                    "未设置"
                };
                println!("- {name}: {status}");
            }
            println!(
                "- {}: {}",
                LOCAL_DEV_VAR,
                env.get_or(LOCAL_DEV_VAR, LOCAL_DEV_DEFAULT)
            );
        }
    }

    check_required(&env, env_file)
}

fn read_template(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PrepError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
