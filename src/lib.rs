//! cli-root - 命令行解析框架的根命令与进程身份
//!
//! 提供：
//! - 根命令：内置帮助和版本选项，独立于子命令的指令列表
//! - 进程身份：可执行文件路径、名称和版本的一次性解析与缓存
//! - 声明式的根命令配置
//! - 结构化日志记录

pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod root;
pub mod symbol;

// 重新导出主要类型
pub use error::{CliRootError, Result};
pub use identity::{BuildInfo, HostDescriptor, ProcessIdentity};
pub use root::RootCommand;
pub use symbol::{CliOption, Command, Directive, DirectiveList};

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 应用程序描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
