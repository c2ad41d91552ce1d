//! Per-connection timeout policy and enforcement.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::time::Sleep;

/// Fixed timeout policy bounding what any one connection can cost.
///
/// The defaults are the policy. Each knob is enforced at its natural
/// layer: `read_header` by hyper, `read` as a deadline over the
/// dispatcher, `idle` and `write` by [`TimedStream`].
#[derive(Debug, Clone, Copy)]
pub struct TimeoutPolicy {
    /// Drop a keep-alive connection after this long without inbound
    /// bytes.
    pub idle: Duration,

    /// Whole-request deadline: reading the body and producing the
    /// response must finish within this window.
    pub read: Duration,

    /// Stricter sub-deadline for just the request line and headers,
    /// cutting off slow-header clients early.
    pub read_header: Duration,

    /// Deadline for a single stalled write toward the client.
    pub write: Duration,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            idle: Duration::from_secs(30),
            read: Duration::from_secs(10),
            read_header: Duration::from_secs(5),
            write: Duration::from_secs(10),
        }
    }
}

/// Stream adapter enforcing the `idle` and `write` deadlines of a
/// [`TimeoutPolicy`] on the raw connection.
///
/// A read left pending past `idle`, or a write left pending past
/// `write`, fails the connection with `TimedOut`. Deadlines re-arm
/// whenever the underlying stream makes progress, so active
/// connections are never cut.
pub struct TimedStream<S> {
    inner: S,
    idle: Duration,
    write: Duration,
    read_deadline: Option<Pin<Box<Sleep>>>,
    write_deadline: Option<Pin<Box<Sleep>>>,
}

impl<S> TimedStream<S> {
    pub fn new(inner: S, policy: &TimeoutPolicy) -> Self {
        Self {
            inner,
            idle: policy.idle,
            write: policy.write,
            read_deadline: None,
            write_deadline: None,
        }
    }
}

fn poll_expired(deadline: &mut Pin<Box<Sleep>>, cx: &mut Context<'_>, what: &str) -> Poll<io::Error> {
    match deadline.as_mut().poll(cx) {
        Poll::Ready(()) => Poll::Ready(io::Error::new(io::ErrorKind::TimedOut, what.to_string())),
        Poll::Pending => Poll::Pending,
    }
}

impl<S: AsyncRead + Unpin> AsyncRead for TimedStream<S> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        match Pin::new(&mut this.inner).poll_read(cx, buf) {
            Poll::Ready(result) => {
                this.read_deadline = None;
                Poll::Ready(result)
            }
            Poll::Pending => {
                let idle = this.idle;
                let deadline = this
                    .read_deadline
                    .get_or_insert_with(|| Box::pin(tokio::time::sleep(idle)));
                poll_expired(deadline, cx, "connection idle past deadline").map(Err)
            }
        }
    }
}

impl<S: AsyncWrite + Unpin> AsyncWrite for TimedStream<S> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        match Pin::new(&mut this.inner).poll_write(cx, buf) {
            Poll::Ready(result) => {
                this.write_deadline = None;
                Poll::Ready(result)
            }
            Poll::Pending => {
                let write = this.write;
                let deadline = this
                    .write_deadline
                    .get_or_insert_with(|| Box::pin(tokio::time::sleep(write)));
                poll_expired(deadline, cx, "write stalled past deadline").map(Err)
            }
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        match Pin::new(&mut this.inner).poll_flush(cx) {
            Poll::Ready(result) => {
                this.write_deadline = None;
                Poll::Ready(result)
            }
            Poll::Pending => {
                let write = this.write;
                let deadline = this
                    .write_deadline
                    .get_or_insert_with(|| Box::pin(tokio::time::sleep(write)));
                poll_expired(deadline, cx, "flush stalled past deadline").map(Err)
            }
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_shutdown(cx)
    }
}
