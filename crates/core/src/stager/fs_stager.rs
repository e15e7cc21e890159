//! File system stager implementation.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::fs::Permissions;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::debug;

use super::error::StagerError;
use super::traits::Stager;
use super::types::{StagedCopy, StagedFile, StagingJob};
use crate::config::StagingConfig;

/// Copies directory trees with plain file system operations.
///
/// Symlinks in the source are followed, so the staged tree holds the content
/// they point to. Permission bits are carried over.
pub struct FsStager {
    buffer_size: usize,
}

impl FsStager {
    /// Creates a stager with the copy buffer from the staging configuration.
    pub fn new(config: &StagingConfig) -> Self {
        Self {
            buffer_size: config.buffer_size.max(1),
        }
    }

    /// Creates a stager with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&StagingConfig::default())
    }

    /// Copies a file with optional checksum calculation.
    async fn copy_file(
        &self,
        source: &Path,
        destination: &Path,
        calculate_checksum: bool,
    ) -> Result<(u64, Option<String>), StagerError> {
        let source_file = File::open(source).await.map_err(|e| {
            StagerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        let dest_file = File::create(destination).await.map_err(|e| {
            StagerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        let mut reader = BufReader::with_capacity(self.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.buffer_size, dest_file);

        let mut hasher = if calculate_checksum {
            Some(Sha256::new())
        } else {
            None
        };

        let mut total_bytes = 0u64;
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            let bytes_read = reader.read(&mut buffer).await.map_err(|e| {
                StagerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            if bytes_read == 0 {
                break;
            }

            if let Some(ref mut h) = hasher {
                h.update(&buffer[..bytes_read]);
            }

            writer.write_all(&buffer[..bytes_read]).await.map_err(|e| {
                StagerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
            })?;

            total_bytes += bytes_read as u64;
        }

        writer.flush().await.map_err(|e| {
            StagerError::copy_failed(source.to_path_buf(), destination.to_path_buf(), e)
        })?;

        let checksum = hasher.map(|h| format!("{:x}", h.finalize()));

        Ok((total_bytes, checksum))
    }

    /// Creates the staged root, failing if anything is already there.
    async fn create_root(&self, destination: &Path) -> Result<(), StagerError> {
        if fs::symlink_metadata(destination).await.is_ok() {
            return Err(StagerError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    StagerError::DirectoryCreationFailed {
                        path: parent.to_path_buf(),
                        source: e,
                    }
                })?;
            }
        }

        // create_dir fails on a path that appeared since the check above
        fs::create_dir(destination).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                StagerError::DestinationExists {
                    path: destination.to_path_buf(),
                }
            } else {
                StagerError::DirectoryCreationFailed {
                    path: destination.to_path_buf(),
                    source: e,
                }
            }
        })
    }
}

#[async_trait]
impl Stager for FsStager {
    fn name(&self) -> &str {
        "fs"
    }

    async fn stage(&self, job: StagingJob) -> Result<StagedCopy, StagerError> {
        let start = Instant::now();

        let source_meta = fs::metadata(&job.source).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StagerError::SourceNotFound {
                    path: job.source.clone(),
                }
            } else {
                StagerError::Io(e)
            }
        })?;
        if !source_meta.is_dir() {
            return Err(StagerError::SourceNotDirectory {
                path: job.source.clone(),
            });
        }

        self.create_root(&job.destination).await?;

        let mut files = Vec::new();
        let mut directories = 0usize;
        let mut total_bytes = 0u64;
        // Applied last so read-only source directories can still be filled
        let mut dir_permissions: Vec<(PathBuf, Permissions)> =
            vec![(job.destination.clone(), source_meta.permissions())];

        let mut pending = vec![PathBuf::new()];
        while let Some(relative_dir) = pending.pop() {
            let source_dir = job.source.join(&relative_dir);
            let mut entries =
                fs::read_dir(&source_dir)
                    .await
                    .map_err(|e| StagerError::ReadDirFailed {
                        path: source_dir.clone(),
                        source: e,
                    })?;

            while let Some(entry) =
                entries
                    .next_entry()
                    .await
                    .map_err(|e| StagerError::ReadDirFailed {
                        path: source_dir.clone(),
                        source: e,
                    })?
            {
                let relative_path = relative_dir.join(entry.file_name());
                let source_path = entry.path();
                let dest_path = job.destination.join(&relative_path);

                let meta = fs::metadata(&source_path).await.map_err(|e| {
                    StagerError::copy_failed(source_path.clone(), dest_path.clone(), e)
                })?;

                if meta.is_dir() {
                    fs::create_dir(&dest_path).await.map_err(|e| {
                        StagerError::DirectoryCreationFailed {
                            path: dest_path.clone(),
                            source: e,
                        }
                    })?;
                    directories += 1;
                    dir_permissions.push((dest_path, meta.permissions()));
                    pending.push(relative_path);
                    continue;
                }

                let (size_bytes, checksum) = self
                    .copy_file(&source_path, &dest_path, job.verify_checksums)
                    .await?;
                fs::set_permissions(&dest_path, meta.permissions())
                    .await
                    .map_err(|e| {
                        StagerError::copy_failed(source_path.clone(), dest_path.clone(), e)
                    })?;

                debug!("Staged {} ({} bytes)", relative_path.display(), size_bytes);

                total_bytes += size_bytes;
                files.push(StagedFile {
                    relative_path,
                    size_bytes,
                    checksum,
                });
            }
        }

        // Children before parents
        for (path, permissions) in dir_permissions.into_iter().rev() {
            fs::set_permissions(&path, permissions).await?;
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(StagedCopy {
            destination: job.destination,
            files,
            directories,
            total_bytes,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
