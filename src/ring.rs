//! Bounded-memory retention of the last N lines of a byte stream.
//!
//! [`LineTracker`] consumes a reader in chunks, reassembles logical lines
//! and pushes each completed line into a fixed-capacity [`RingBuffer`],
//! overwriting the oldest retained line once the ring is full. Lines longer
//! than [`MAX_LINE_LEN`] - 1 bytes are cut there; the remainder up to the
//! next newline is discarded so memory stays bounded even for input with no
//! newlines at all.

use std::cmp::min;
use std::io::{self, Read, Write};

use arrayvec::ArrayVec;
use log::{debug, warn};

/// Line-length bound. A line of `MAX_LINE_LEN - 1` bytes is kept whole;
/// anything longer is truncated to that length with a warning.
pub const MAX_LINE_LEN: usize = 1024;

const CHUNK_SIZE: usize = 8192;

/// Fixed-capacity history of the most recently inserted lines.
///
/// Slot `total % capacity` receives the next insertion, so once `total`
/// reaches the capacity every insertion evicts the oldest line. The evictee
/// is dropped by the slot assignment itself.
pub struct RingBuffer {
    slots: Box<[Option<Box<[u8]>>]>,
    total: usize,
}

impl RingBuffer {
    /// Allocate `capacity` empty slots. `capacity` must be at least 1; a
    /// requested count of zero is handled before any ring exists.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be at least 1");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        RingBuffer {
            slots: slots.into_boxed_slice(),
            total: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Lines ever inserted, evicted ones included.
    pub fn total(&self) -> usize {
        self.total
    }

    fn insert(&mut self, line: Box<[u8]>) {
        let slot = self.total % self.capacity();
        self.slots[slot] = Some(line);
        self.total += 1;
    }

    /// Retained lines, oldest first.
    ///
    /// The oldest retained line sits at slot `total % capacity` once the
    /// ring has wrapped, at slot 0 before that.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let n = self.capacity();
        let count = min(self.total, n);
        let start = if self.total >= n { self.total % n } else { 0 };
        (0..count).filter_map(move |i| self.slots[(start + i) % n].as_deref())
    }

    /// Write the retained lines in order, a terminator after each one.
    /// Best effort: the caller decides what a write failure means.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Streaming line reassembly feeding a [`RingBuffer`].
pub struct LineTracker {
    ring: RingBuffer,
    builder: ArrayVec<u8, { MAX_LINE_LEN - 1 }>,
    truncating: bool,
    truncated: usize,
}

impl LineTracker {
    pub fn new(capacity: usize) -> Self {
        LineTracker {
            ring: RingBuffer::new(capacity),
            builder: ArrayVec::new(),
            truncating: false,
            truncated: 0,
        }
    }

    /// Consume the whole stream and return the final ring.
    ///
    /// Reads are chunked to amortize syscall overhead; the byte-level logic
    /// in [`feed`](Self::feed) does not depend on the chunk size. A read
    /// error ends ingestion the same way a clean end-of-stream does.
    pub fn ingest<R: Read>(mut self, mut reader: R) -> RingBuffer {
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => self.feed(&chunk[..n]),
                Err(err) => {
                    debug!("read ended early: {}", err);
                    break;
                }
            }
        }
        self.finish()
    }

    /// Process one chunk of the stream.
    pub fn feed(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            if self.truncating {
                // Discarding the tail of an overlong line. The newline that
                // ends it is the delimiter of the line already flushed, so
                // it does not open a new empty line.
                if byte == b'\n' {
                    self.truncating = false;
                }
            } else if byte == b'\n' {
                self.flush_line();
            } else if self.builder.try_push(byte).is_err() {
                // Accumulator is full: cut the line here. This byte and
                // everything up to the next newline is dropped.
                warn!(
                    "line {} longer than {} bytes, truncated",
                    self.ring.total() + 1,
                    MAX_LINE_LEN - 1
                );
                self.truncated += 1;
                self.flush_line();
                self.truncating = true;
            }
        }
    }

    /// Flush any unterminated final line and hand over the ring.
    pub fn finish(mut self) -> RingBuffer {
        if !self.builder.is_empty() {
            self.flush_line();
        }
        debug!(
            "{} lines seen, {} truncated, {} retained",
            self.ring.total(),
            self.truncated,
            min(self.ring.total(), self.ring.capacity())
        );
        self.ring
    }

    fn flush_line(&mut self) {
        self.ring.insert(self.builder.as_slice().into());
        self.builder.clear();
    }
}
