//! cli-root 主程序入口
//!
//! 根命令与进程身份检查工具

use anyhow::{Context, Result};
use cli_root::cli::args::{Args, Commands};
use cli_root::cli::commands::{
    Command, IdentityCommand, InitCommand, TreeCommand, ValidateCommand, VersionCommand,
};
use cli_root::config::CliConfig;
use cli_root::identity::register_entry_build;
use cli_root::logging::{parse_level, LogConfig, LoggingSystem};
use log::LevelFilter;
use tracing::{debug, error};

fn main() -> Result<()> {
    // 在首次访问进程身份之前注册入口程序
    register_entry_build(cli_root::build_info!()).context("注册入口程序失败")?;

    // 解析命令行参数
    let args = Args::parse_args();

    // init 命令不需要读取现有配置
    let config = match &args.command {
        Commands::Init { .. } => CliConfig::default(),
        _ => args.load_config().context("加载配置失败")?,
    };

    // 初始化日志系统
    let log_config = LogConfig {
        level: effective_log_level(&args, &config),
        json_format: config.logging.json,
    };
    let _logging_system = LoggingSystem::setup_logging(log_config).context("初始化日志系统失败")?;

    debug!("{} v{} 启动", cli_root::APP_NAME, cli_root::VERSION);

    // 执行命令
    if let Err(e) = execute_command(&args) {
        error!("命令执行失败: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// 命令行参数优先，其次是配置文件
fn effective_log_level(args: &Args, config: &CliConfig) -> LevelFilter {
    match &args.log_level {
        Some(level) => level.clone().into(),
        None => parse_level(&config.logging.level).unwrap_or(LevelFilter::Info),
    }
}

/// 执行CLI命令
fn execute_command(args: &Args) -> cli_root::Result<()> {
    match &args.command {
        Commands::Identity { .. } => IdentityCommand.execute(args),
        Commands::Tree { .. } => TreeCommand.execute(args),
        Commands::Version { .. } => VersionCommand.execute(args),
        Commands::Init { .. } => InitCommand.execute(args),
        Commands::Validate { .. } => ValidateCommand.execute(args),
    }
}
