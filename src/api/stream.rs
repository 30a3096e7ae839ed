use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};

use crate::auth::Session;

use super::error::{Result, StorageError};

/// Default upper bound on streamed chunk size (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 20;

/// Streamed object body with an upper bound on chunk size.
///
/// Network chunks larger than the bound are re-sliced before being yielded;
/// smaller ones pass through unchanged, so chunk sizes are a bound, not a
/// promise. The stream is finite and single-pass. It keeps a handle to the
/// session it was opened with, so the transfer survives the client closing
/// its stored session mid-download.
pub struct ObjectStream {
    inner: Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>,
    _session: Session,
}

impl ObjectStream {
    pub(crate) fn new(session: Session, response: reqwest::Response, chunk_size: usize) -> Self {
        let bound = chunk_size.max(1);
        let inner = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(StorageError::from))
            .flat_map(move |chunk| stream::iter(split_chunk(chunk, bound)))
            .boxed();

        Self {
            inner,
            _session: session,
        }
    }
}

impl Stream for ObjectStream {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for ObjectStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectStream").finish_non_exhaustive()
    }
}

/// Slice one network chunk into pieces no larger than `bound` bytes.
fn split_chunk(chunk: Result<Bytes>, bound: usize) -> Vec<Result<Bytes>> {
    match chunk {
        Ok(mut chunk) => {
            let mut parts = Vec::with_capacity(chunk.len() / bound + 1);
            while chunk.len() > bound {
                parts.push(Ok(chunk.split_to(bound)));
            }
            if !chunk.is_empty() {
                parts.push(Ok(chunk));
            }
            parts
        }
        Err(err) => vec![Err(err)],
    }
}
