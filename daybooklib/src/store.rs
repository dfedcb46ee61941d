//! Загрузка и атомарная перезапись документа на диске.

use crate::{
    error::Result,
    formats::markdown::Markdown,
    model::LedgerDocument,
    traits::{ReadFormat, WriteFormat},
};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Отсутствующий файл — это пустой документ, а не ошибка.
pub fn load(path: &Path) -> Result<LedgerDocument> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LedgerDocument::default()),
        Err(e) => return Err(e.into()),
    };
    Markdown::read(BufReader::new(file))
}

/// Пишет во временный файл рядом и переименовывает поверх `path`:
/// на диске всегда либо старая, либо новая версия целиком.
pub fn save(path: &Path, doc: &LedgerDocument) -> Result<()> {
    let mut buf = Vec::new();
    Markdown::write(&mut buf, doc)?;

    let parent = path
        .parent()
        .ok_or_else(|| io::Error::other("document path has no parent"))?;
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("document path has no file name"))?
        .to_string_lossy();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let temp_path = parent.join(format!(".{name}.tmp-{}-{nanos}", std::process::id()));

    if let Err(err) = write_new(&temp_path, &buf).and_then(|()| replace_file(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }
    Ok(())
}

fn write_new(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(content)?;
    file.sync_all()
}

// на Windows rename не перезаписывает существующий файл
fn replace_file(temp_path: &Path, path: &Path) -> io::Result<()> {
    match fs::rename(temp_path, path) {
        Ok(()) => Ok(()),
        Err(err) => {
            #[cfg(windows)]
            {
                if err.kind() == io::ErrorKind::AlreadyExists {
                    fs::remove_file(path)?;
                    return fs::rename(temp_path, path);
                }
            }
            Err(err)
        }
    }
}
