//! # Pages To PDF
//!
//! 一个用于批量将网页打印为 PDF 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageDriver` - 唯一的 page owner，提供导航 / eval / 打印 PDF 能力
//!
//! ### ② 业务能力层（Output）
//! - `output/` - 描述"我能做什么"，只处理单个 PDF 文件
//! - `PdfStore` - 准备输出目录、清理旧文件、落盘 PDF 字节
//!
//! ### ③ 流程层（Sequencer）
//! - `sequencer/` - 定义"一个页面任务"的完整处理流程
//! - `SessionState` - 会话状态封装（序号 + 当前任务 + 是否耗尽）
//! - `PageSequencer` - 流程编排（navigate → load → eval → print → save → advance）
//!
//! ### ④ 编排层（App）
//! - `app` - 应用生命周期：准备目录、启动浏览器、运行序列、关闭会话
//!
//! ## 模块结构

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod output;
pub mod sequencer;
pub mod utils;

// 重新导出常用类型
pub use browser::{connect_to_browser, launch_headless_browser};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::PageDriver;
pub use models::{load_page_jobs, PageJob, PageJobList};
pub use output::PdfStore;
pub use sequencer::{pdf_filename, PageSequencer, SessionState};
