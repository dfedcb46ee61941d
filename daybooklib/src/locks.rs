//! Взаимное исключение по пути файла: чтение, слияние и запись одного
//! документа не должны перемежаться между потоками.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct PathLocks {
    inner: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Возвращает замок для `path`; один и тот же, пока им кто-то владеет.
    pub fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        // замки прошлых дней никому не нужны
        map.retain(|_, lock| Arc::strong_count(lock) > 1);
        map.entry(path.to_path_buf()).or_default().clone()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Запись атомарна, поэтому отравленный замок безопасно подхватить.
pub fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_path_same_lock() {
        let locks = PathLocks::new();
        let a = locks.lock_for(Path::new("/v/a.md"));
        let b = locks.lock_for(Path::new("/v/a.md"));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(locks.len(), 1);
    }

    #[test]
    fn released_locks_are_dropped() {
        let locks = PathLocks::new();
        drop(locks.lock_for(Path::new("/v/a.md")));
        let _b = locks.lock_for(Path::new("/v/b.md"));
        assert_eq!(locks.len(), 1);
    }
}
