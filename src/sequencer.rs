//! 页面序列器 - 流程层
//!
//! 定义"一个页面任务"的完整处理流程：
//! navigate → load → eval(脚本) → print → save → advance
//!
//! 严格串行：同一时刻最多一个任务在处理中，上一个 PDF 落盘完成后
//! 才会请求下一个任务。浏览器会话只有一个页面上下文，并行没有意义。

use crate::infrastructure::PageDriver;
use crate::models::PageJob;
use crate::output::PdfStore;
use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// 会话状态
///
/// 由序列器独占持有的单个可变实例，不使用全局变量
#[derive(Debug, Default)]
pub struct SessionState {
    /// 完成序号：从 0 开始，每完成一次捕获恰好加 1
    sequence_number: u32,
    /// 当前在处理中的任务（首个任务前 / 耗尽后为空）
    current_job: Option<PageJob>,
    /// 任务源是否已耗尽
    iterator_exhausted: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub fn current_job(&self) -> Option<&PageJob> {
        self.current_job.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.iterator_exhausted
    }

    /// 将任务设为当前任务
    pub fn begin_job(&mut self, job: PageJob) {
        self.current_job = Some(job);
    }

    /// 捕获完成：序号加 1，返回本次捕获的序号（1 起）
    pub fn complete_capture(&mut self) -> u32 {
        self.sequence_number += 1;
        self.sequence_number
    }

    /// 当前任务处理完毕，清空在处理标记
    pub fn finish_job(&mut self) -> Option<PageJob> {
        self.current_job.take()
    }

    /// 任务源耗尽，进入终态
    pub fn mark_exhausted(&mut self) {
        self.iterator_exhausted = true;
    }
}

/// 根据完成序号和页面标题推导输出文件名
///
/// 序号保证了即使标题重复文件名也唯一；标题不做字符清洗
pub fn pdf_filename(sequence_number: u32, title: &str) -> String {
    format!("p{}_{}.pdf", sequence_number, title)
}

/// 页面序列器
///
/// 职责：
/// - 按输入顺序逐个驱动页面任务，不跳过、不重复、不重排
/// - 独占使用 PageDriver（唯一的页面上下文）
/// - 任何一步出错直接向上传播，中止整个批次
pub struct PageSequencer<'a> {
    driver: &'a PageDriver,
    store: &'a PdfStore,
    /// 每条脚本执行后的静置延迟
    ///
    /// 注意：这是一个经验性的等待窗口，不是有完成信号的同步点，
    /// 脚本副作用超过该窗口时可能产生不稳定的输出
    script_delay: Duration,
    state: SessionState,
}

impl<'a> PageSequencer<'a> {
    pub fn new(driver: &'a PageDriver, store: &'a PdfStore, script_delay_ms: u64) -> Self {
        Self {
            driver,
            store,
            script_delay: Duration::from_millis(script_delay_ms),
            state: SessionState::new(),
        }
    }

    /// 按顺序处理所有页面任务
    ///
    /// 空任务列表直接进入终态，不产生任何文件。
    /// 返回终态的会话状态（序号即成功打印的页面数）
    pub async fn run(mut self, jobs: impl IntoIterator<Item = PageJob>) -> Result<SessionState> {
        for job in jobs {
            info!("");
            self.state.begin_job(job.clone());
            self.process_job(&job).await?;
            self.state.finish_job();
        }

        // 任务源耗尽，终态只进入一次
        self.state.mark_exhausted();
        info!("");
        Ok(self.state)
    }

    /// 处理单个页面任务：导航 → 等待加载 → 执行脚本 → 打印 → 落盘
    async fn process_job(&mut self, job: &PageJob) -> Result<()> {
        self.driver.goto_and_wait(&job.url).await?;
        info!("  已加载页面 : {}", job.url);

        if job.has_scripts() {
            self.run_scripts(&job.scripts).await?;
        }

        let bytes = self.driver.print_to_pdf().await?;

        let seq = self.state.complete_capture();
        let file_name = pdf_filename(seq, &job.title);

        // 下一个任务只在写入返回之后才会被请求，保证输出文件不会并发写
        let path = self.store.write_pdf(&file_name, &bytes).await?;
        info!("  PDF 文件已保存: {}", path.display());

        Ok(())
    }

    /// 按列出顺序执行脚本片段，每条之后静置一个延迟窗口
    async fn run_scripts(&self, scripts: &[String]) -> Result<()> {
        for (index, script) in scripts.iter().enumerate() {
            debug!("  执行脚本 {}/{}", index + 1, scripts.len());
            self.driver.eval(script.clone()).await?;
            sleep(self.script_delay).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str) -> PageJob {
        PageJob {
            url: format!("https://{}.example", title.to_lowercase()),
            title: title.to_string(),
            scripts: Vec::new(),
        }
    }

    #[test]
    fn test_pdf_filename_format() {
        assert_eq!(pdf_filename(1, "A"), "p1_A.pdf");
        assert_eq!(pdf_filename(12, "周报"), "p12_周报.pdf");
    }

    #[test]
    fn test_pdf_filename_keeps_title_verbatim() {
        // 标题不做清洗，重复标题靠序号区分
        assert_eq!(pdf_filename(1, "a/b"), "p1_a/b.pdf");
        assert_eq!(pdf_filename(2, "A"), "p2_A.pdf");
        assert_eq!(pdf_filename(3, "A"), "p3_A.pdf");
    }

    #[test]
    fn test_session_state_initial() {
        let state = SessionState::new();
        assert_eq!(state.sequence_number(), 0);
        assert!(state.current_job().is_none());
        assert!(!state.is_exhausted());
    }

    #[test]
    fn test_sequence_number_increments_once_per_capture() {
        let mut state = SessionState::new();
        assert_eq!(state.complete_capture(), 1);
        assert_eq!(state.complete_capture(), 2);
        assert_eq!(state.complete_capture(), 3);
        assert_eq!(state.sequence_number(), 3);
    }

    #[test]
    fn test_single_job_in_flight() {
        let mut state = SessionState::new();

        state.begin_job(job("A"));
        assert_eq!(state.current_job().unwrap().title, "A");

        let finished = state.finish_job().unwrap();
        assert_eq!(finished.title, "A");
        assert!(state.current_job().is_none());

        state.begin_job(job("B"));
        assert_eq!(state.current_job().unwrap().title, "B");
    }

    #[test]
    fn test_exhausted_is_terminal_flag() {
        let mut state = SessionState::new();
        state.mark_exhausted();
        assert!(state.is_exhausted());
        assert!(state.current_job().is_none());
    }
}
