use crate::error::{AppError, FileError};
use crate::models::page_job::{PageJob, PageJobList};
use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载页面任务列表
pub async fn load_page_jobs(pages_file: impl AsRef<Path>) -> Result<Vec<PageJob>> {
    let path = pages_file.as_ref();
    let content = fs::read_to_string(path).await.map_err(|e| {
        AppError::File(FileError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    })?;

    let list: PageJobList = toml::from_str(&content).map_err(|e| {
        AppError::File(FileError::TomlParseFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    })?;

    tracing::info!("成功加载 {} 个页面任务", list.pages.len());

    Ok(list.pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_page_jobs_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [[pages]]
            url = "https://a.example"
            title = "A"

            [[pages]]
            url = "https://b.example"
            title = "B"
            scripts = ["document.title='x'"]
            "#
        )
        .unwrap();

        let jobs = load_page_jobs(file.path()).await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "A");
        assert_eq!(jobs[1].scripts.len(), 1);
    }

    #[tokio::test]
    async fn test_load_page_jobs_missing_file() {
        let result = load_page_jobs("no_such_pages.toml").await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no_such_pages.toml"));
    }

    #[tokio::test]
    async fn test_load_page_jobs_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pages = 'not a list'").unwrap();

        let err = load_page_jobs(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("TOML解析失败"));
    }
}
