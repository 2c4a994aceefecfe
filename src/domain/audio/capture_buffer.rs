//! Ordered audio chunk accumulation

/// Accumulates audio chunks during capture and assembles them into a single
/// payload. Chunks are concatenated in exactly the order they were pushed;
/// out-of-order concatenation would corrupt the encoded audio stream.
#[derive(Debug, Default)]
pub struct CaptureBuffer {
    chunks: Vec<Vec<u8>>,
}

impl CaptureBuffer {
    /// Create an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk. Arrival order is preserved.
    pub fn push(&mut self, chunk: Vec<u8>) {
        self.chunks.push(chunk);
    }

    /// Number of chunks accumulated so far
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total payload size in bytes across all chunks
    pub fn total_len(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Whether no audio has been captured
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Discard all accumulated chunks
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Concatenate all chunks into the final payload, in push order.
    /// Leaves the buffer empty.
    pub fn assemble(&mut self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.total_len());
        for chunk in self.chunks.drain(..) {
            payload.extend_from_slice(&chunk);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buffer = CaptureBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.chunk_count(), 0);
        assert_eq!(buffer.total_len(), 0);
    }

    #[test]
    fn assemble_preserves_order() {
        let mut buffer = CaptureBuffer::new();
        buffer.push(vec![1, 2]);
        buffer.push(vec![3]);
        buffer.push(vec![4, 5, 6]);

        assert_eq!(buffer.assemble(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn assembled_length_is_sum_of_chunk_lengths() {
        let chunks = [vec![0u8; 7], vec![0u8; 13], vec![0u8; 42], vec![0u8; 1]];
        let expected: usize = chunks.iter().map(Vec::len).sum();

        let mut buffer = CaptureBuffer::new();
        for chunk in chunks {
            buffer.push(chunk);
        }

        assert_eq!(buffer.total_len(), expected);
        assert_eq!(buffer.assemble().len(), expected);
    }

    #[test]
    fn assemble_drains_buffer() {
        let mut buffer = CaptureBuffer::new();
        buffer.push(vec![1, 2, 3]);

        let payload = buffer.assemble();
        assert_eq!(payload.len(), 3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.assemble(), Vec::<u8>::new());
    }

    #[test]
    fn empty_chunks_are_kept_but_add_nothing() {
        let mut buffer = CaptureBuffer::new();
        buffer.push(vec![]);
        buffer.push(vec![9]);

        assert_eq!(buffer.chunk_count(), 2);
        assert_eq!(buffer.assemble(), vec![9]);
    }

    #[test]
    fn clear_discards_chunks() {
        let mut buffer = CaptureBuffer::new();
        buffer.push(vec![1, 2, 3]);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
