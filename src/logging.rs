//! 日志系统模块
//!
//! 提供结构化日志配置和管理功能

use log::LevelFilter;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tracing_subscriber::{fmt, prelude::*, registry, reload, EnvFilter, Layer, Registry};

/// 全局日志初始化状态
#[derive(Debug, Default)]
struct GlobalLoggingState {
    /// 已安装订阅者的过滤器句柄
    filter_handle: Option<reload::Handle<EnvFilter, Registry>>,
    /// 当前生效的配置
    current_config: Option<LogConfig>,
}

/// 全局日志状态管理器
static GLOBAL_LOGGING_STATE: OnceLock<Mutex<GlobalLoggingState>> = OnceLock::new();

/// 日志配置结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// 日志级别
    pub level: LevelFilter,
    /// 是否使用JSON格式
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            json_format: false,
        }
    }
}

/// 日志系统管理器
#[derive(Debug)]
pub struct LoggingSystem {
    /// 配置
    config: LogConfig,
}

impl LoggingSystem {
    fn new(config: LogConfig) -> Self {
        Self { config }
    }

    /// 初始化日志系统
    ///
    /// # 参数
    /// * `config` - 日志配置
    ///
    /// # 返回
    /// * `Result<LoggingSystem, anyhow::Error>` - 初始化结果
    ///
    /// 已经初始化过时不做任何改动，返回的实例携带当前生效的配置。
    pub fn setup_logging(config: LogConfig) -> anyhow::Result<Self> {
        Self::setup_logging_with_options(config, false)
    }

    /// 初始化日志系统（带选项）
    ///
    /// # 参数
    /// * `config` - 日志配置
    /// * `force_reinit` - 已初始化时是否改用新的日志级别
    ///
    /// 输出格式在订阅者安装后无法更换，强制重新初始化时要求格式一致。
    pub fn setup_logging_with_options(
        config: LogConfig,
        force_reinit: bool,
    ) -> anyhow::Result<Self> {
        let state_mutex =
            GLOBAL_LOGGING_STATE.get_or_init(|| Mutex::new(GlobalLoggingState::default()));
        let mut state = lock_state(state_mutex);

        let active = match (&state.filter_handle, &state.current_config) {
            (Some(handle), Some(active)) => Some((handle.clone(), active.clone())),
            _ => None,
        };

        match active {
            None => {
                let handle = Self::perform_initialization(&config)?;
                state.filter_handle = Some(handle);
                state.current_config = Some(config.clone());
                tracing::debug!("日志系统初始化完成: {:?}", config);
                Ok(Self::new(config))
            }
            Some((_, active)) if !force_reinit || active == config => Ok(Self::new(active)),
            Some((_, active)) if active.json_format != config.json_format => {
                Err(anyhow::anyhow!(
                    "日志输出格式在初始化后不能更换: json_format = {}",
                    active.json_format
                ))
            }
            Some((handle, _)) => {
                handle
                    .reload(Self::build_filter(config.level)?)
                    .map_err(|e| anyhow::anyhow!("日志级别重新加载失败: {}", e))?;
                state.current_config = Some(config.clone());
                tracing::debug!("日志级别已切换为: {}", config.level);
                Ok(Self::new(config))
            }
        }
    }

    /// 执行实际的日志系统初始化
    fn perform_initialization(
        config: &LogConfig,
    ) -> anyhow::Result<reload::Handle<EnvFilter, Registry>> {
        Self::init_log_tracer()?;
        Self::init_tracing_subscriber(config)
    }

    /// 初始化 LogTracer（log crate 到 tracing 的桥接）
    fn init_log_tracer() -> anyhow::Result<()> {
        use tracing_log::LogTracer;

        static LOG_TRACER_INIT: OnceLock<Result<(), String>> = OnceLock::new();

        let result = LOG_TRACER_INIT.get_or_init(|| LogTracer::init().map_err(|e| e.to_string()));

        result
            .as_ref()
            .map_err(|e| anyhow::anyhow!("LogTracer初始化失败: {}", e))?;
        Ok(())
    }

    /// 环境变量 `RUST_LOG` 之上叠加配置的级别
    fn build_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
        Ok(EnvFilter::from_default_env().add_directive(Self::level_to_string(level).parse()?))
    }

    /// 安装 tracing subscriber，返回可以替换过滤器的句柄
    fn init_tracing_subscriber(
        config: &LogConfig,
    ) -> anyhow::Result<reload::Handle<EnvFilter, Registry>> {
        let (filter, handle) = reload::Layer::new(Self::build_filter(config.level)?);

        let fmt_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .boxed()
        } else {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_target(true)
                .with_writer(std::io::stderr)
                .boxed()
        };

        registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("tracing subscriber初始化失败: {}", e))?;

        Ok(handle)
    }

    /// 将 log::LevelFilter 转换为字符串
    fn level_to_string(level: LevelFilter) -> &'static str {
        match level {
            LevelFilter::Off => "off",
            LevelFilter::Error => "error",
            LevelFilter::Warn => "warn",
            LevelFilter::Info => "info",
            LevelFilter::Debug => "debug",
            LevelFilter::Trace => "trace",
        }
    }

    /// 本实例对应的配置
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// 检查日志系统是否已初始化
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGING_STATE
            .get()
            .map(|state_mutex| lock_state(state_mutex).filter_handle.is_some())
            .unwrap_or(false)
    }

    /// 获取当前生效的日志配置（如果已初始化）
    pub fn current_config() -> Option<LogConfig> {
        GLOBAL_LOGGING_STATE
            .get()
            .and_then(|state_mutex| lock_state(state_mutex).current_config.clone())
    }
}

/// 获取状态锁，持锁线程 panic 后仍继续使用内部数据
fn lock_state(state_mutex: &Mutex<GlobalLoggingState>) -> MutexGuard<'_, GlobalLoggingState> {
    state_mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 将配置文件中的级别名称转换为 LevelFilter
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}
