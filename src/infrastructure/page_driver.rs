//! 页面驱动器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"导航 / 执行 JS / 打印 PDF"的能力

use crate::error::AppError;
use anyhow::Result;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use serde_json::Value as JsonValue;

/// 页面驱动器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 goto_and_wait() / eval() / print_to_pdf() 能力
/// - 不认识 PageJob
/// - 不处理业务流程
pub struct PageDriver {
    page: Page,
}

impl PageDriver {
    /// 创建新的页面驱动器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 导航到指定 URL 并等待 load 事件
    ///
    /// 返回时页面已加载完成，对应协议层的 loadEventFired
    pub async fn goto_and_wait(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        Ok(())
    }

    /// 执行 JS 代码并返回 JSON 结果
    ///
    /// # 参数
    /// - `js_code`: 要执行的 JavaScript 代码
    ///
    /// # 返回
    /// 返回 JSON 值（表达式无返回值时为 null）
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self
            .page
            .evaluate(js_code.into())
            .await
            .map_err(AppError::from)?;
        let json_value = result.value().cloned().unwrap_or(JsonValue::Null);
        Ok(json_value)
    }

    /// 将当前页面打印为 PDF 字节流
    ///
    /// 使用协议默认的打印参数（整页、纵向）
    pub async fn print_to_pdf(&self) -> Result<Vec<u8>> {
        let bytes = self
            .page
            .pdf(PrintToPdfParams::default())
            .await
            .map_err(AppError::print_failed)?;
        Ok(bytes)
    }
}
