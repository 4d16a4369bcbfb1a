//! 宿主程序描述
//!
//! 描述"正在运行的是哪个程序"：入口程序（由应用在启动时注册的构建元数据）
//! 或当前执行组件（本库自身的构建元数据，作为兜底）。

use std::fmt;

/// 结构化的数字版本号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageVersion {
    /// 主版本号
    pub major: u64,
    /// 次版本号
    pub minor: u64,
    /// 修订号
    pub patch: u64,
}

impl PackageVersion {
    /// 创建版本号
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// 解析版本字符串的数字部分
    ///
    /// 预发布和构建元数据（`-` 或 `+` 之后的内容）被忽略，缺失的次版本号和修订号按 0 处理。
    ///
    /// # 参数
    /// * `version` - 版本字符串，如 `1.4.2-beta.1+g3f2a`
    ///
    /// # 返回
    /// * `Option<PackageVersion>` - 数字部分无法解析时返回 `None`
    pub fn parse(version: &str) -> Option<Self> {
        let core = version.trim().split(['-', '+']).next()?;
        let mut parts = core.split('.');

        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// 编译进程序的构建元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// 包名
    pub name: String,
    /// 信息版本（自由格式，由构建过程嵌入）
    pub informational_version: Option<String>,
    /// 结构化的包版本
    pub package_version: Option<PackageVersion>,
}

impl BuildInfo {
    /// 创建只有名称的构建元数据
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            informational_version: None,
            package_version: None,
        }
    }

    /// 设置信息版本
    pub fn with_informational_version(mut self, version: impl Into<String>) -> Self {
        self.informational_version = Some(version.into());
        self
    }

    /// 设置可选的信息版本，`None` 时保持不变
    pub fn with_optional_informational_version(self, version: Option<&str>) -> Self {
        match version {
            Some(version) => self.with_informational_version(version),
            None => self,
        }
    }

    /// 设置结构化包版本
    pub fn with_package_version(mut self, version: PackageVersion) -> Self {
        self.package_version = Some(version);
        self
    }

    /// 从版本字符串设置包版本，解析失败时保持不变
    pub fn with_package_version_str(self, version: &str) -> Self {
        match PackageVersion::parse(version) {
            Some(version) => self.with_package_version(version),
            None => self,
        }
    }
}

/// 捕获调用方 crate 的构建元数据
///
/// 在调用方 crate 中展开，读取其 `CARGO_PKG_NAME`、`CARGO_PKG_VERSION`，
/// 以及编译期可选的 `CLI_ROOT_INFORMATIONAL_VERSION` 环境变量。
///
/// ```
/// let build = cli_root::build_info!();
/// assert_eq!(build.name, "cli-root");
/// assert!(build.package_version.is_some());
/// ```
#[macro_export]
macro_rules! build_info {
    () => {
        $crate::identity::BuildInfo::new(env!("CARGO_PKG_NAME"))
            .with_package_version_str(env!("CARGO_PKG_VERSION"))
            .with_optional_informational_version(option_env!("CLI_ROOT_INFORMATIONAL_VERSION"))
    };
}

/// 宿主程序描述trait
pub trait HostDescriptor: Send + Sync + fmt::Debug {
    /// 宿主名称，用于诊断输出
    fn name(&self) -> &str;

    /// 构建时嵌入的信息版本
    fn informational_version(&self) -> Option<&str>;

    /// 结构化包版本
    fn package_version(&self) -> Option<PackageVersion>;
}

/// 入口程序：由应用在启动时用自身构建元数据注册
#[derive(Debug, Clone)]
pub struct EntryHost {
    build: BuildInfo,
}

impl EntryHost {
    /// 创建入口程序描述
    pub fn new(build: BuildInfo) -> Self {
        Self { build }
    }
}

impl HostDescriptor for EntryHost {
    fn name(&self) -> &str {
        &self.build.name
    }

    fn informational_version(&self) -> Option<&str> {
        self.build.informational_version.as_deref()
    }

    fn package_version(&self) -> Option<PackageVersion> {
        self.build.package_version
    }
}

/// 当前执行组件：没有注册入口程序时的兜底（本库自身）
#[derive(Debug, Clone)]
pub struct ExecutingHost {
    build: BuildInfo,
}

impl ExecutingHost {
    pub fn new() -> Self {
        Self {
            build: crate::build_info!(),
        }
    }
}

impl Default for ExecutingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDescriptor for ExecutingHost {
    fn name(&self) -> &str {
        &self.build.name
    }

    fn informational_version(&self) -> Option<&str> {
        self.build.informational_version.as_deref()
    }

    fn package_version(&self) -> Option<PackageVersion> {
        self.build.package_version
    }
}
