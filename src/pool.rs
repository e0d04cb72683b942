/// Escaping works through a scratch buffer when the worst-case expansion does
/// not fit on the stack. Buffers are rented from this per-writer pool and
/// returned on every exit path; because they hold caller string data, they
/// are scrubbed before going back so pooled reuse can never expose stale
/// bytes.
#[derive(Debug, Default)]
pub struct ScratchPool {
    free: Vec<Vec<u8>>,
}

/// Worst-case sizes at or below this use a stack buffer instead of the pool.
pub(crate) const STACK_SCRATCH_SIZE: usize = 256;

impl ScratchPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rents a buffer of at least `min` bytes. The returned guard gives the
    /// buffer back (zeroed) when dropped.
    pub(crate) fn rent(&mut self, min: usize) -> ScratchGuard<'_> {
        let mut buf = match self.free.iter().position(|b| b.capacity() >= min) {
            Some(i) => self.free.swap_remove(i),
            None => Vec::new(),
        };
        buf.resize(min, 0);
        ScratchGuard { pool: self, buf }
    }
}

pub(crate) struct ScratchGuard<'a> {
    pool: &'a mut ScratchPool,
    buf: Vec<u8>,
}

impl ScratchGuard<'_> {
    #[inline]
    pub(crate) fn buf(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        self.buf.fill(0);
        self.pool.free.push(std::mem::take(&mut self.buf));
    }
}
