//! envprep 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 错误处理：统一出口，诊断 + 补救提示，--verbose 查看错误链
//! - 退出码：成功 0，缺文件/缺变量/IO 失败 1

use clap::Parser;
use envprep::cli::{Cli, Commands};
use envprep::error::Result;
use envprep::prepare::{self, PrepareOptions};
use envprep::types::OutputFormat;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run_command(cli.command, verbose) {
        e.report(verbose);
        std::process::exit(1);
    }
}

/// 运行具体命令
fn run_command(command: Commands, verbose: bool) -> Result<()> {
    match command {
        Commands::Prepare {
            env_file,
            config,
            output,
        } => {
            let output_file = output.unwrap_or_else(|| prepare::default_output_path(&config));
            prepare::run(&PrepareOptions {
                env_file,
                config_file: config,
                output_file,
            })
        }

        Commands::Check { env_file, format } => {
            let format = OutputFormat::from(format.as_str());
            prepare::check(&env_file, &format, verbose)
        }

        Commands::Render { env_file, config } => prepare::render(&env_file, &config),
    }
}
