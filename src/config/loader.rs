//! 配置加载器实现
//!
//! 提供TOML配置文件解析、环境变量替换和错误处理功能

use crate::config::types::{validate_config, CliConfig};
use crate::error::{ConfigError, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// 示例配置，`init` 命令写出的内容
pub const SAMPLE_CONFIG: &str = r#"# cli-root 配置文件

[root]
# 帮助中显示的描述
description = "示例命令行工具"
# 选项和子命令名称是否区分大小写
case_sensitive = true

# 追加在内置 [suggest] 指令之后的指令
[[directives]]
name = "diagram"
description = "显示命令行的解析结果"
hidden = false

[logging]
level = "info"
json = false
"#;

/// 配置加载器trait，定义配置加载接口
pub trait ConfigLoader {
    /// 从文件加载配置
    ///
    /// # 参数
    /// * `path` - 配置文件路径
    ///
    /// # 返回
    /// * `Result<CliConfig>` - 加载的配置或错误
    fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<CliConfig>;

    /// 从字符串加载配置
    fn load_from_string(&self, content: &str) -> Result<CliConfig>;

    /// 验证配置
    fn validate(&self, config: &CliConfig) -> Result<()>;
}

/// TOML配置加载器实现
#[derive(Debug, Clone)]
pub struct TomlConfigLoader {
    /// 是否启用环境变量替换
    enable_env_substitution: bool,
}

impl TomlConfigLoader {
    /// 创建新的TOML配置加载器
    ///
    /// # 参数
    /// * `enable_env_substitution` - 是否启用环境变量替换
    pub fn new(enable_env_substitution: bool) -> Self {
        Self {
            enable_env_substitution,
        }
    }

    /// 替换字符串中的环境变量
    fn substitute_env_vars(&self, content: &str) -> Result<String> {
        if !self.enable_env_substitution {
            return Ok(content.to_string());
        }

        // 匹配 ${VAR_NAME} 格式的环境变量
        let env_var_regex = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
            .map_err(|e| ConfigError::ParseError(format!("正则表达式错误: {}", e)))?;

        // 整行注释保持原样，替换结果不再参与匹配
        let mut missing: Option<String> = None;
        let result: String = content
            .split_inclusive('\n')
            .map(|line| {
                if line.trim_start().starts_with('#') {
                    return Cow::Borrowed(line);
                }
                env_var_regex.replace_all(line, |captures: &Captures| {
                    std::env::var(&captures[1]).unwrap_or_else(|_| {
                        missing.get_or_insert_with(|| captures[1].to_string());
                        String::new()
                    })
                })
            })
            .collect();

        match missing {
            Some(var) => Err(ConfigError::EnvVarError { var }.into()),
            None => Ok(result),
        }
    }

    /// 解析TOML内容
    fn parse_toml(&self, content: &str) -> Result<CliConfig> {
        let processed_content = self.substitute_env_vars(content)?;

        let config: CliConfig = toml::from_str(&processed_content)
            .map_err(|e| ConfigError::ParseError(format!("TOML解析失败: {}", e)))?;

        Ok(config)
    }
}

impl Default for TomlConfigLoader {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConfigLoader for TomlConfigLoader {
    fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<CliConfig> {
        let path = path.as_ref();

        // 检查文件是否存在
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(format!("读取文件失败: {}", e)))?;

        let config = self.parse_toml(&content)?;
        self.validate(&config)?;

        tracing::info!("成功加载配置文件: {}", path.display());
        tracing::debug!("配置内容: {:?}", config);

        Ok(config)
    }

    fn load_from_string(&self, content: &str) -> Result<CliConfig> {
        let config = self.parse_toml(content)?;
        self.validate(&config)?;

        tracing::debug!("成功解析配置字符串");

        Ok(config)
    }

    fn validate(&self, config: &CliConfig) -> Result<()> {
        validate_config(config).map_err(|e| ConfigError::ValidationError(e).into())
    }
}

/// 获取默认配置文件路径
///
/// 当前目录存在 `cli-root.toml` 时使用它，否则使用用户配置目录下的 `cli-root/config.toml`。
pub fn get_default_config_path() -> PathBuf {
    let local = PathBuf::from("cli-root.toml");
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|config_dir| config_dir.join("cli-root").join("config.toml"))
        .unwrap_or(local)
}
