use serde::{Deserialize, Serialize};

/// 页面任务：一个 URL、一个用于生成文件名的标题、以及可选的脚本列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageJob {
    /// 导航目标 URL
    pub url: String,
    /// 页面标题（用于生成输出文件名，不做任何字符清洗）
    pub title: String,
    /// 加载完成后按顺序执行的 JS 片段（缺省表示不执行）
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl PageJob {
    pub fn has_scripts(&self) -> bool {
        !self.scripts.is_empty()
    }
}

/// 页面任务列表（TOML 文件的顶层结构）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageJobList {
    #[serde(default)]
    pub pages: Vec<PageJob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_job_without_scripts() {
        let toml_str = r#"
            [[pages]]
            url = "https://a.example"
            title = "A"
        "#;

        let list: PageJobList = toml::from_str(toml_str).unwrap();
        assert_eq!(list.pages.len(), 1);
        assert_eq!(list.pages[0].url, "https://a.example");
        assert_eq!(list.pages[0].title, "A");
        assert!(!list.pages[0].has_scripts());
    }

    #[test]
    fn test_parse_page_job_with_scripts() {
        let toml_str = r#"
            [[pages]]
            url = "https://b.example"
            title = "B"
            scripts = ["document.title='x'", "window.scrollTo(0, 999)"]
        "#;

        let list: PageJobList = toml::from_str(toml_str).unwrap();
        assert_eq!(list.pages[0].scripts.len(), 2);
        assert_eq!(list.pages[0].scripts[0], "document.title='x'");
        assert!(list.pages[0].has_scripts());
    }

    #[test]
    fn test_parse_empty_page_list() {
        let list: PageJobList = toml::from_str("").unwrap();
        assert!(list.pages.is_empty());
    }

    #[test]
    fn test_jobs_keep_listed_order() {
        let toml_str = r#"
            [[pages]]
            url = "https://a.example"
            title = "A"

            [[pages]]
            url = "https://b.example"
            title = "B"

            [[pages]]
            url = "https://c.example"
            title = "C"
        "#;

        let list: PageJobList = toml::from_str(toml_str).unwrap();
        let titles: Vec<&str> = list.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
