//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};

use crate::context::TimingContext;
use crate::RuntimeError;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying sink type so it works with any
/// `Sink<Vec<u8>>` implementation, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), RuntimeError> {
        if self.state != SinkState::Initial {
            return Err(RuntimeError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| RuntimeError::StreamError(e.to_string()))?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), RuntimeError> {
        match self.state {
            SinkState::Initial => return Err(RuntimeError::ShellNotSent),
            SinkState::Completed => {
                return Err(RuntimeError::StreamError(
                    "Sink already completed".to_string(),
                ))
            }
            SinkState::ShellSent => {}
        }

        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| RuntimeError::StreamError(e.to_string()))?;
        self.timing.mark(&format!("section_{}_sent", name));
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Mark the response complete.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
    }

    /// Sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    /// Collects sent chunks into a Vec for assertions.
    struct VecSink(Vec<Vec<u8>>);

    impl Sink<Vec<u8>> for VecSink {
        type Error = std::convert::Infallible;

        fn poll_ready(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Result<(), Self::Error>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn start_send(
            mut self: std::pin::Pin<&mut Self>,
            item: Vec<u8>,
        ) -> Result<(), Self::Error> {
            self.0.push(item);
            Ok(())
        }

        fn poll_flush(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Result<(), Self::Error>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn poll_close(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Result<(), Self::Error>> {
            std::task::Poll::Ready(Ok(()))
        }
    }

    #[test]
    fn test_shell_before_sections() {
        let mut sink = StreamingSink::new(VecSink(Vec::new()), TimingContext::new());
        let err = block_on(sink.send_section("products", "<div></div>"));
        assert!(matches!(err, Err(RuntimeError::ShellNotSent)));
    }

    #[test]
    fn test_shell_then_sections() {
        let mut sink = StreamingSink::new(VecSink(Vec::new()), TimingContext::new());
        block_on(sink.send_shell("<html>")).unwrap();
        block_on(sink.send_section("header", "<header>")).unwrap();
        block_on(sink.send_section("products", "<div>")).unwrap();
        assert_eq!(sink.sections_sent(), ["header", "products"]);
    }

    #[test]
    fn test_shell_only_once() {
        let mut sink = StreamingSink::new(VecSink(Vec::new()), TimingContext::new());
        block_on(sink.send_shell("<html>")).unwrap();
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }

    #[test]
    fn test_no_sections_after_complete() {
        let mut sink = StreamingSink::new(VecSink(Vec::new()), TimingContext::new());
        block_on(sink.send_shell("<html>")).unwrap();
        sink.complete();
        assert!(block_on(sink.send_section("late", "")).is_err());
    }
}
