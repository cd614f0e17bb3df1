//! 应用编排层
//!
//! 管理应用生命周期：准备输出目录 → 启动浏览器 → 运行序列器 → 关闭会话

use crate::browser;
use crate::config::Config;
use crate::infrastructure::PageDriver;
use crate::models;
use crate::output::PdfStore;
use crate::sequencer::PageSequencer;
use crate::utils::logging::{log_jobs_loaded, log_startup, print_final_stats};
use anyhow::Result;
use chromiumoxide::Browser;
use tracing::warn;

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    driver: PageDriver,
    store: PdfStore,
}

impl App {
    /// 初始化应用
    ///
    /// 目录准备失败或浏览器启动失败都在任何任务处理之前中止程序
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 准备输出目录：创建并清理遗留的 PDF
        let store = PdfStore::new(&config.pdf_dir);
        store.prepare().await?;

        // 启动浏览器；指定了 ATTACH_PORT 时改为连接已在运行的实例
        let (browser, page) = match config.attach_port {
            Some(port) => browser::connect_to_browser(port).await?,
            None => browser::launch_headless_browser(&config).await?,
        };
        let driver = PageDriver::new(page);

        Ok(Self {
            config,
            browser,
            driver,
            store,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(mut self) -> Result<()> {
        // 加载页面任务列表
        let jobs = models::load_page_jobs(&self.config.pages_file).await?;

        if jobs.is_empty() {
            warn!("⚠️ 任务列表为空，不打印任何页面");
        } else {
            log_jobs_loaded(jobs.len());
        }

        // 逐个处理任务，任何失败直接中止整个批次
        let sequencer = PageSequencer::new(&self.driver, &self.store, self.config.script_delay_ms);
        let final_state = sequencer.run(jobs).await?;

        // 任务源耗尽后关闭会话并结束浏览器进程，终止只发生一次
        self.browser.close().await?;
        let _ = self.browser.wait().await;

        print_final_stats(final_state.sequence_number(), &self.config.pdf_dir);

        Ok(())
    }
}
