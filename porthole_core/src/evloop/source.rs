//! Pointer event sources.

use crate::event::PointerEvent;
use crate::event::parse_script_line;
use crate::evloop::msg::EventLoopMessage;
use crate::prelude::*;

use futures::Stream;
use futures::StreamExt;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc::Sender;

/// Read pointer events from a script, one event per line.
///
/// Blank lines and `#` comments are skipped, malformed lines are logged and
/// skipped. The stream ends at EOF or on the first I/O error.
pub fn script_stream<R>(reader: R) -> impl Stream<Item = PointerEvent>
where
  R: AsyncBufRead + Unpin,
{
  futures::stream::unfold(
    (reader.lines(), 0_usize),
    |(mut lines, mut lineno)| async move {
      loop {
        lineno += 1;
        match lines.next_line().await {
          Ok(Some(line)) => match parse_script_line(&line) {
            Some(Ok(event)) => return Some((event, (lines, lineno))),
            Some(Err(e)) => warn!("Skipped line {}:{}", lineno, e),
            None => {}
          },
          Ok(None) => return None,
          Err(e) => {
            error!("Failed to read line {}:{:?}", lineno, e);
            return None;
          }
        }
      }
    },
  )
}

/// Send all events of a stream to the event loop, in order. Returns how many
/// events are sent, it stops early if the event loop is gone.
pub async fn forward_events<S>(stream: S, sender: Sender<EventLoopMessage>) -> usize
where
  S: Stream<Item = PointerEvent>,
{
  futures::pin_mut!(stream);
  let mut sent = 0_usize;
  while let Some(event) = stream.next().await {
    if sender.send(EventLoopMessage::Pointer(event)).await.is_err() {
      debug!("Event loop is closed, stop forwarding");
      break;
    }
    sent += 1;
  }
  sent
}
