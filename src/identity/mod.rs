//! 进程身份模块
//!
//! 提供可执行文件路径、显示名称和版本的延迟解析与缓存

pub mod host;
pub mod process;

// 重新导出主要类型
pub use host::{BuildInfo, EntryHost, ExecutingHost, HostDescriptor, PackageVersion};
pub use process::{
    display_name_from_path, register_entry_build, register_entry_host, resolve_version,
    ProcessIdentity, ProcessIdentityBuilder,
};
