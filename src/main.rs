use anyhow::Result;
use pages_to_pdf::app::App;
use pages_to_pdf::config::Config;
use pages_to_pdf::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
