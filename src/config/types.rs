//! 配置数据结构定义
//!
//! 以声明方式描述根命令的配置结构体和验证逻辑

use crate::symbol::validate_directive_name;
use serde::{Deserialize, Serialize};

/// 主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// 根命令配置
    #[serde(default)]
    pub root: RootConfig,
    /// 追加在内置指令之后的指令
    #[serde(default)]
    pub directives: Vec<DirectiveConfig>,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 根命令配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RootConfig {
    /// 帮助中显示的描述
    #[serde(default)]
    pub description: String,
    /// 名称匹配是否区分大小写
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            case_sensitive: default_case_sensitive(),
        }
    }
}

/// 指令配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectiveConfig {
    /// 指令名称
    pub name: String,
    /// 指令描述
    #[serde(default)]
    pub description: String,
    /// 是否在帮助中隐藏
    #[serde(default)]
    pub hidden: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 是否使用JSON格式
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// 默认值函数
fn default_case_sensitive() -> bool {
    true
}
fn default_log_level() -> String {
    "info".to_string()
}

/// 配置验证函数
///
/// # 参数
/// * `config` - 要验证的配置
///
/// # 返回
/// * `Result<(), String>` - 验证结果，错误时返回错误信息
pub fn validate_config(config: &CliConfig) -> Result<(), String> {
    // 验证日志级别
    let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
    let level = config.logging.level.to_ascii_lowercase();
    if !valid_log_levels.contains(&level.as_str()) {
        return Err(format!(
            "无效的日志级别: {}，支持的级别: {:?}",
            config.logging.level, valid_log_levels
        ));
    }

    // 验证指令名称，重名交给解析器处理
    for directive in &config.directives {
        validate_directive_name(&directive.name)
            .map_err(|e| format!("指令 {:?} 无效: {}", directive.name, e))?;
    }

    Ok(())
}
