//! 进程身份
//!
//! 提供"这是哪个程序、在哪里、是什么版本"的权威答案。每个字段在首次访问时计算一次，
//! 之后在整个进程生命周期内保持不变。

use crate::error::IdentityError;
use crate::identity::host::{BuildInfo, EntryHost, ExecutingHost, HostDescriptor};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// 全局宿主槽位：启动时注册的入口程序，或首次解析时写入的回退组件
///
/// 注册和解析竞争同一个槽位，先写入者生效。
static ENTRY_HOST: OnceLock<HostSlot> = OnceLock::new();

/// 全局进程身份
static GLOBAL_IDENTITY: OnceLock<ProcessIdentity> = OnceLock::new();

/// 启动参数来源
#[derive(Debug, Clone)]
enum LaunchSource {
    /// 当前进程的真实启动参数
    Process,
    /// 固定的启动参数
    Fixed(Vec<String>),
}

/// 全局宿主槽位中的值
#[derive(Debug)]
enum HostSlot {
    /// 通过 [`register_entry_host`] 注册
    Registered(Arc<dyn HostDescriptor>),
    /// 解析时没有注册，使用当前执行组件
    Fallback(Arc<dyn HostDescriptor>),
}

impl HostSlot {
    fn host(&self) -> &Arc<dyn HostDescriptor> {
        match self {
            HostSlot::Registered(host) | HostSlot::Fallback(host) => host,
        }
    }
}

/// 宿主程序来源
#[derive(Debug, Clone)]
enum HostSource {
    /// 读取全局注册的入口程序
    Registered,
    /// 显式指定的入口程序
    Explicit(Option<Arc<dyn HostDescriptor>>),
}

/// 进程身份
///
/// 路径、显示名称和版本相互独立地缓存，可以按任意顺序、从任意线程访问。
#[derive(Debug)]
pub struct ProcessIdentity {
    launch: LaunchSource,
    host_source: HostSource,
    host: OnceLock<Arc<dyn HostDescriptor>>,
    executable_path: OnceLock<String>,
    executable_name: OnceLock<String>,
    executable_version: OnceLock<String>,
}

impl ProcessIdentity {
    fn with_sources(launch: LaunchSource, host_source: HostSource) -> Self {
        Self {
            launch,
            host_source,
            host: OnceLock::new(),
            executable_path: OnceLock::new(),
            executable_name: OnceLock::new(),
            executable_version: OnceLock::new(),
        }
    }

    /// 获取全局进程身份，首次调用时创建
    pub fn global() -> &'static ProcessIdentity {
        GLOBAL_IDENTITY
            .get_or_init(|| Self::with_sources(LaunchSource::Process, HostSource::Registered))
    }

    /// 创建独立的进程身份构建器（用于嵌入和测试）
    pub fn builder() -> ProcessIdentityBuilder {
        ProcessIdentityBuilder::default()
    }

    /// 可执行文件路径，即第一个启动参数
    ///
    /// # Panics
    /// 启动参数为空时 panic：这是宿主运行时违反了前置条件。
    pub fn executable_path(&self) -> &str {
        self.executable_path.get_or_init(|| {
            let path = self.first_launch_argument();
            debug!("解析可执行文件路径: {}", path);
            path
        })
    }

    /// 可执行文件的显示名称：去掉目录和扩展名，并移除所有空格
    pub fn executable_name(&self) -> &str {
        self.executable_name.get_or_init(|| {
            let name = display_name_from_path(self.executable_path());
            debug!("解析可执行文件名称: {}", name);
            name
        })
    }

    /// 可执行文件版本
    ///
    /// 优先使用信息版本，其次使用结构化包版本，都没有时为空字符串。
    pub fn executable_version(&self) -> &str {
        self.executable_version.get_or_init(|| {
            let version = resolve_version(self.host().as_ref());
            debug!("解析可执行文件版本: {:?}", version);
            version
        })
    }

    /// 宿主程序：已注册的入口程序，否则为当前执行组件
    pub fn host(&self) -> &Arc<dyn HostDescriptor> {
        self.host.get_or_init(|| {
            let host = match &self.host_source {
                HostSource::Registered => ENTRY_HOST
                    .get_or_init(|| HostSlot::Fallback(Arc::new(ExecutingHost::new())))
                    .host()
                    .clone(),
                HostSource::Explicit(Some(host)) => host.clone(),
                HostSource::Explicit(None) => Arc::new(ExecutingHost::new()),
            };
            debug!("解析宿主程序: {}", host.name());
            host
        })
    }

    fn first_launch_argument(&self) -> String {
        let first = match &self.launch {
            LaunchSource::Process => std::env::args_os()
                .next()
                .map(|arg| arg.to_string_lossy().into_owned()),
            LaunchSource::Fixed(args) => args.first().cloned(),
        };

        first.unwrap_or_else(|| panic!("进程启动参数为空：宿主运行时没有提供可执行文件路径"))
    }
}

/// 进程身份构建器
#[derive(Debug, Default)]
pub struct ProcessIdentityBuilder {
    launch_args: Option<Vec<String>>,
    entry_host: Option<Arc<dyn HostDescriptor>>,
}

impl ProcessIdentityBuilder {
    /// 使用固定的启动参数代替进程的真实参数
    pub fn launch_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.launch_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// 指定入口程序描述；不指定时回退到当前执行组件
    pub fn entry_host<H: HostDescriptor + 'static>(mut self, host: H) -> Self {
        self.entry_host = Some(Arc::new(host));
        self
    }

    pub fn build(self) -> ProcessIdentity {
        let launch = match self.launch_args {
            Some(args) => LaunchSource::Fixed(args),
            None => LaunchSource::Process,
        };
        ProcessIdentity::with_sources(launch, HostSource::Explicit(self.entry_host))
    }
}

/// 注册全局入口程序描述
///
/// 必须在首次访问全局进程身份的版本或宿主之前调用，且只能调用一次。
/// 宿主已经回退到当前执行组件时返回 [`IdentityError::HostAlreadyResolved`]。
pub fn register_entry_host<H: HostDescriptor + 'static>(host: H) -> Result<(), IdentityError> {
    let name = host.name().to_string();
    let mut registered = false;
    let slot = ENTRY_HOST.get_or_init(|| {
        registered = true;
        HostSlot::Registered(Arc::new(host))
    });

    if !registered {
        return Err(match slot {
            HostSlot::Registered(_) => IdentityError::EntryHostAlreadyRegistered,
            HostSlot::Fallback(resolved) => IdentityError::HostAlreadyResolved {
                resolved: resolved.name().to_string(),
            },
        });
    }

    debug!("已注册入口程序: {}", name);
    Ok(())
}

/// 用构建元数据注册全局入口程序，通常配合 [`build_info!`](crate::build_info) 使用
pub fn register_entry_build(build: BuildInfo) -> Result<(), IdentityError> {
    register_entry_host(EntryHost::new(build))
}

/// 从路径计算显示名称
pub fn display_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace(' ', ""))
        .unwrap_or_default()
}

/// 按信息版本、包版本、空字符串的顺序解析版本
pub fn resolve_version(host: &dyn HostDescriptor) -> String {
    match host.informational_version() {
        Some(version) => version.to_string(),
        None => host
            .package_version()
            .map(|version| version.to_string())
            .unwrap_or_default(),
    }
}
