//! PDF 落盘服务 - 业务能力层
//!
//! 只负责"准备输出目录"和"写单个 PDF 文件"能力，不关心流程

use crate::error::{AppError, FileError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// PDF 落盘服务
///
/// 职责：
/// - 创建输出目录（已存在时不报错）
/// - 清理上一次运行遗留的 *.pdf 文件
/// - 将单个 PDF 字节流写入指定文件名
/// - 不出现 Vec<PageJob>
/// - 不关心处理顺序
pub struct PdfStore {
    pdf_dir: PathBuf,
}

impl PdfStore {
    /// 创建新的 PDF 落盘服务
    pub fn new(pdf_dir: impl Into<PathBuf>) -> Self {
        Self {
            pdf_dir: pdf_dir.into(),
        }
    }

    /// 输出目录路径
    pub fn dir(&self) -> &Path {
        &self.pdf_dir
    }

    /// 准备输出目录：创建目录并删除遗留的 PDF 文件
    ///
    /// # 返回
    /// 返回被删除的文件路径列表
    pub async fn prepare(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.pdf_dir).await.map_err(|e| {
            AppError::File(FileError::DirectoryCreateFailed {
                path: self.pdf_dir.display().to_string(),
                source: Box::new(e),
            })
        })?;

        let deleted = self.delete_stale_pdfs().await?;

        if deleted.is_empty() {
            debug!("输出目录没有遗留的 PDF 文件");
        } else {
            info!("🧹 已删除 {} 个遗留的 PDF 文件:", deleted.len());
            for path in &deleted {
                info!("   {}", path.display());
            }
        }

        Ok(deleted)
    }

    /// 将 PDF 字节流写入输出目录下的指定文件
    ///
    /// 写入失败是致命错误，由调用方向上传播并中止整个批次
    pub async fn write_pdf(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.pdf_dir.join(file_name);
        fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
        debug!("写入 {} 字节到 {}", bytes.len(), path.display());
        Ok(path)
    }

    /// 删除输出目录中所有 *.pdf 文件
    async fn delete_stale_pdfs(&self) -> Result<Vec<PathBuf>> {
        let mut deleted = Vec::new();
        let mut entries = fs::read_dir(&self.pdf_dir)
            .await
            .with_context(|| format!("无法读取输出目录: {}", self.pdf_dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
                fs::remove_file(&path).await.map_err(|e| {
                    AppError::File(FileError::DeleteFailed {
                        path: path.display().to_string(),
                        source: Box::new(e),
                    })
                })?;
                deleted.push(path);
            }
        }

        Ok(deleted)
    }
}
