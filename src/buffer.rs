//! Shared pool of scratch buffers for Base64URL decoding.
//!
//! The decode step needs a writable byte buffer sized to the worst-case
//! decoded length. Pooling keeps the hot path free of per-call heap
//! allocations once the pool is warm. The pool is bounded in both entry
//! count and per-buffer capacity so oversized adversarial tokens do not
//! pin memory after the call that needed them.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Pool entries kept at rest.
const MAX_POOLED_BUFFERS: usize = 16;

/// Buffers grown beyond this capacity are dropped instead of returned.
const MAX_POOLED_CAPACITY: usize = 64 * 1024;

static POOL: Lazy<Mutex<Vec<Vec<u8>>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Scratch buffer checked out of the shared pool.
///
/// Returned to the pool on drop, on every exit path including panic
/// unwinds. The buffer is never visible to another call while checked
/// out.
pub(crate) struct ScratchBuffer {
    buf: Vec<u8>,
}

impl ScratchBuffer {
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.buf
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        if self.buf.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        if let Ok(mut pool) = POOL.lock() {
            if pool.len() < MAX_POOLED_BUFFERS {
                pool.push(std::mem::take(&mut self.buf));
            }
        }
    }
}

/// Check a buffer of at least `min_len` writable bytes out of the pool.
///
/// Falls back to a fresh allocation when the pool is empty or its lock
/// is poisoned.
pub(crate) fn acquire(min_len: usize) -> ScratchBuffer {
    let mut buf = POOL
        .lock()
        .ok()
        .and_then(|mut pool| pool.pop())
        .unwrap_or_default();
    if buf.len() < min_len {
        buf.resize(min_len, 0);
    }
    ScratchBuffer { buf }
}
