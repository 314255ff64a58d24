/// Releases a host resource (observer, listener, timer) when dropped.
///
/// The release closure runs at most once.
pub struct CancelGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl CancelGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for CancelGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}
