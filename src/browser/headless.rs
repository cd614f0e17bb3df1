use crate::config::Config;
use crate::error::AppError;
use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 启动调试浏览器并创建一个空白页面
///
/// 窗口大小、是否无头、调试端口均由配置决定
pub async fn launch_headless_browser(config: &Config) -> Result<(Browser, Page)> {
    info!("🚀 启动浏览器...");
    debug!(
        "无头模式: {}, 窗口: {}x{}",
        config.headless, config.window_width, config.window_height
    );

    let mut args = vec![
        format!("--window-size={},{}", config.window_width, config.window_height),
        "--disable-gpu".to_string(), // 无头模式下禁用 GPU
    ];
    // 默认让浏览器自动选择调试端口，配置中可强制指定
    match config.debug_port {
        Some(port) => args.push(format!("--remote-debugging-port={}", port)),
        None => args.push("--remote-debugging-port=0".to_string()),
    }

    let mut builder = BrowserConfig::builder()
        .args(args.iter().map(|s| s.as_str()).collect::<Vec<_>>());

    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };

    let browser_config = builder.build().map_err(|e| {
        error!("配置浏览器失败: {}", e);
        anyhow::anyhow!("配置浏览器失败: {}", e)
    })?;

    // 启动浏览器
    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        AppError::launch_failed(e)
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    // 创建空白页面，后续导航由序列器驱动
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        anyhow::anyhow!("创建页面失败: {}", e)
    })?;

    info!("✅ 浏览器就绪");

    Ok((browser, page))
}
