/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否以无头模式启动浏览器
    pub headless: bool,
    /// 浏览器窗口宽度
    pub window_width: u32,
    /// 浏览器窗口高度
    pub window_height: u32,
    /// 强制使用的调试端口（None 表示让浏览器自动选择）
    pub debug_port: Option<u16>,
    /// 连接到已在运行的浏览器而不是自己启动（调试用）
    pub attach_port: Option<u16>,
    /// PDF 输出目录
    pub pdf_dir: String,
    /// 页面任务列表文件（TOML）
    pub pages_file: String,
    /// 每条脚本执行后的静置延迟（毫秒）
    pub script_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 412,
            window_height: 732,
            debug_port: None,
            attach_port: None,
            pdf_dir: "pdfs".to_string(),
            pages_file: "pages.toml".to_string(),
            script_delay_ms: 250,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            headless: std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            window_width: std::env::var("WINDOW_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.window_width),
            window_height: std::env::var("WINDOW_HEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.window_height),
            debug_port: std::env::var("DEBUG_PORT").ok().and_then(|v| v.parse().ok()).or(default.debug_port),
            attach_port: std::env::var("ATTACH_PORT").ok().and_then(|v| v.parse().ok()).or(default.attach_port),
            pdf_dir: std::env::var("PDF_DIR").unwrap_or(default.pdf_dir),
            pages_file: std::env::var("PAGES_FILE").unwrap_or(default.pages_file),
            script_delay_ms: std::env::var("SCRIPT_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.script_delay_ms),
        }
    }
}
