//! 错误处理模块
//!
//! 定义应用程序的统一错误类型

use thiserror::Error;

/// cli-root 的主要错误类型
#[derive(Error, Debug)]
pub enum CliRootError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 符号（命令、选项、指令）定义错误
    #[error("符号错误: {0}")]
    Symbol(#[from] SymbolError),

    /// 进程身份相关错误
    #[error("进程身份错误: {0}")]
    Identity(#[from] IdentityError),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON序列化/反序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置文件解析错误
    #[error("配置文件解析失败: {0}")]
    ParseError(String),

    /// 配置验证错误
    #[error("配置验证失败: {0}")]
    ValidationError(String),

    /// 配置文件不存在
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    /// 环境变量替换错误
    #[error("环境变量替换失败: {var}")]
    EnvVarError { var: String },
}

/// 符号错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// 名称为空
    #[error("名称不能为空")]
    EmptyName,

    /// 名称包含非法字符
    #[error("无效的名称 {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
}

/// 进程身份错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// 入口程序描述已经注册过
    #[error("入口程序描述已经注册，不能重复注册")]
    EntryHostAlreadyRegistered,

    /// 宿主程序已经解析完成，注册来得太晚
    #[error("宿主程序已被解析为 {resolved}，注册必须在首次访问进程身份之前完成")]
    HostAlreadyResolved { resolved: String },
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, CliRootError>;
