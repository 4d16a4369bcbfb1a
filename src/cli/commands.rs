//! 命令处理逻辑
//!
//! 实现各种CLI命令的处理逻辑

use crate::cli::args::{Args, Commands, OutputFormat};
use crate::config::{ConfigLoader, TomlConfigLoader, SAMPLE_CONFIG};
use crate::error::Result;
use crate::identity::ProcessIdentity;
use crate::root::RootCommand;
use std::fmt::Write as _;
use std::path::Path;

/// 命令处理器trait
pub trait Command {
    /// 执行命令
    fn execute(&self, args: &Args) -> Result<()>;
}

/// 进程身份命令
pub struct IdentityCommand;

impl Command for IdentityCommand {
    fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Identity { format } = &args.command {
            println!("{}", render_identity(ProcessIdentity::global(), *format)?);
        }
        Ok(())
    }
}

/// 渲染进程身份
pub fn render_identity(identity: &ProcessIdentity, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "path": identity.executable_path(),
                "name": identity.executable_name(),
                "version": identity.executable_version(),
                "host": identity.host().name(),
            });
            Ok(serde_json::to_string_pretty(&info)?)
        }
        OutputFormat::Text => Ok(format!(
            "路径: {}\n名称: {}\n版本: {}\n宿主: {}",
            identity.executable_path(),
            identity.executable_name(),
            identity.executable_version(),
            identity.host().name()
        )),
    }
}

/// 根命令结构命令
pub struct TreeCommand;

impl Command for TreeCommand {
    fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Tree { format } = &args.command {
            let config = args.load_config()?;
            let root = RootCommand::from_config(&config)?;
            println!("{}", render_tree(&root, *format)?);
        }
        Ok(())
    }
}

/// 渲染根命令的选项和指令
pub fn render_tree(root: &RootCommand, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(root)?),
        OutputFormat::Text => tree_text(root).map_err(|e| anyhow::Error::from(e).into()),
    }
}

/// 文本格式的根命令结构
fn tree_text(root: &RootCommand) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    if root.description().is_empty() {
        writeln!(out, "{}", root.name())?;
    } else {
        writeln!(out, "{} - {}", root.name(), root.description())?;
    }
    writeln!(out, "区分大小写: {}", root.is_case_sensitive())?;

    writeln!(out, "\n选项:")?;
    for option in root.options() {
        let mut tokens = vec![option.name().to_string()];
        tokens.extend(option.aliases().iter().cloned());
        writeln!(out, "  {:<28} {}", tokens.join(", "), option.description())?;
    }

    if !root.subcommands().is_empty() {
        writeln!(out, "\n子命令:")?;
        for command in root.subcommands() {
            writeln!(out, "  {:<28} {}", command.name(), command.description())?;
        }
    }

    write!(out, "\n指令:")?;
    for directive in root.directives() {
        let hidden = if directive.is_hidden() { " (隐藏)" } else { "" };
        write!(
            out,
            "\n  {:<28} {}{}",
            directive.token(),
            directive.description(),
            hidden
        )?;
    }
    Ok(out)
}

/// 版本命令
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Version { format } = &args.command {
            println!("{}", render_version(ProcessIdentity::global(), *format)?);
        }
        Ok(())
    }
}

/// 渲染版本信息
pub fn render_version(identity: &ProcessIdentity, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let version_info = serde_json::json!({
                "name": identity.executable_name(),
                "version": identity.executable_version(),
            });
            Ok(serde_json::to_string_pretty(&version_info)?)
        }
        OutputFormat::Text => Ok(format!(
            "{} {}",
            identity.executable_name(),
            identity.executable_version()
        )),
    }
}

/// 初始化命令
pub struct InitCommand;

impl Command for InitCommand {
    fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Init { config_path, force } = &args.command {
            if create_config_file(config_path, *force)? {
                println!("配置文件已创建: {}", config_path.display());
            } else {
                eprintln!("配置文件已存在: {}", config_path.display());
                eprintln!("使用 --force 参数覆盖现有文件");
            }
        }
        Ok(())
    }
}

/// 写出示例配置文件，文件已存在且未指定 `force` 时返回 `false`
pub fn create_config_file(config_path: &Path, force: bool) -> Result<bool> {
    if config_path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(config_path, SAMPLE_CONFIG)?;
    tracing::info!("写出示例配置: {}", config_path.display());
    Ok(true)
}

/// 验证命令
pub struct ValidateCommand;

impl Command for ValidateCommand {
    fn execute(&self, args: &Args) -> Result<()> {
        if let Commands::Validate { config_path } = &args.command {
            let path = config_path
                .clone()
                .unwrap_or_else(|| args.get_config_path());

            let loader = TomlConfigLoader::default();
            let config = loader.load_from_file(&path)?;

            println!("配置文件验证通过: {}", path.display());
            if args.is_verbose() {
                println!("描述: {}", config.root.description);
                println!("区分大小写: {}", config.root.case_sensitive);
                println!("自定义指令数: {}", config.directives.len());
            }
        }
        Ok(())
    }
}
