use super::backend::{ByteStore, StorageBackend};
use super::WriteMode;
use crate::error::Result;
use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct FsBackend {
    write_mode: WriteMode,
}

impl FsBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }
}

impl StorageBackend for FsBackend {
    type Handle = FileHandle;

    fn open(&self, path: &Path) -> Result<FileHandle> {
        let file = open_rw(path)?;
        debug!(path = %path.display(), "opened backing file");
        Ok(FileHandle {
            path: path.to_path_buf(),
            file,
            write_mode: self.write_mode,
        })
    }
}

fn open_rw(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
}

/// Handle on an open backing file. The descriptor is closed on drop.
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
    file: File,
    write_mode: WriteMode,
}

impl FileHandle {
    fn rewrite_in_place(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(bytes)?;
        self.file.flush()?;
        Ok(())
    }

    fn rewrite_via_rename(&mut self, bytes: &[u8]) -> Result<()> {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = self
            .path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()));

        let permissions = self.file.metadata()?.permissions();
        if let Err(e) = write_synced(&tmp_path, bytes, permissions) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        // The old descriptor still points at the replaced inode.
        self.file = open_rw(&self.path)?;
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8], permissions: Permissions) -> std::io::Result<()> {
    let mut tmp = File::create(path)?;
    tmp.set_permissions(permissions)?;
    tmp.write_all(bytes)?;
    tmp.sync_all()
}

impl ByteStore for FileHandle {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut buf = Vec::new();
        self.file.read_to_end(&mut buf)?;
        debug!(path = %self.path.display(), bytes = buf.len(), "read backing file");
        Ok(buf)
    }

    fn rewrite(&mut self, bytes: &[u8]) -> Result<()> {
        match self.write_mode {
            WriteMode::Truncate => self.rewrite_in_place(bytes)?,
            WriteMode::AtomicRename => self.rewrite_via_rename(bytes)?,
        }
        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            mode = ?self.write_mode,
            "rewrote backing file"
        );
        Ok(())
    }
}
