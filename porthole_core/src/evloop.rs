//! Event loop.

use crate::constant::DEFAULT_CANVAS_HEIGHT;
use crate::constant::DEFAULT_CANVAS_WIDTH;
use crate::dispatch::MouseDispatch;
use crate::envar;
use crate::event::PointerEvent;
use crate::evloop::msg::EventLoopMessage;
use crate::evloop::source::forward_events;
use crate::prelude::*;
use crate::ui::canvas::Canvas;
use crate::ui::canvas::CanvasArc;
use crate::ui::canvas::Surface;
use crate::ui::canvas::SurfaceGuard;
use crate::ui::defaults::Defaults;
use crate::ui::tree::Tree;
use crate::ui::tree::TreeArc;

use futures::Stream;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::channel;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

pub mod msg;
pub mod source;

#[derive(Debug, Copy, Clone, derive_builder::Builder)]
/// Event loop options.
pub struct EventLoopOptions {
  #[builder(default = envar::CHANNEL_BUF_SIZE())]
  channel_buf_size: usize,

  #[builder(default = DEFAULT_CANVAS_WIDTH)]
  width: u32,

  #[builder(default = DEFAULT_CANVAS_HEIGHT)]
  height: u32,
}

impl EventLoopOptions {
  pub fn channel_buf_size(&self) -> usize {
    self.channel_buf_size
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }
}

/// The event loop owns the tree and the canvas. It consumes pointer events
/// in the order they're sent, dispatches each one to the tree, then redraws
/// the whole tree onto the canvas.
///
/// Event sources run in spawned tasks and send
/// [`EventLoopMessage`]s through the channel. The loop ends when every sender
/// is closed, or when it receives [`EventLoopMessage::Quit`].
pub struct EventLoop {
  /// Interactor tree.
  pub tree: TreeArc,
  /// Canvas for UI.
  pub canvas: CanvasArc,

  /// Default draw/pick, consulted on every pass.
  pub defaults: Defaults,

  /// Mouse dispatch state machine.
  pub dispatch: MouseDispatch,

  /// Cancellation token to notify the main loop to exit.
  pub cancellation_token: CancellationToken,
  /// Task tracker for event sources.
  pub detached_tracker: TaskTracker,

  /// Sender: sources => event loop.
  ///
  /// NOTE: This sender is stored here only for cloning to event sources, it's
  /// dropped when the loop starts running, so the channel closes once all the
  /// sources are gone.
  pub sender: Option<Sender<EventLoopMessage>>,
  /// Receiver: event loop <= sources.
  pub receiver: Receiver<EventLoopMessage>,
}

impl EventLoop {
  /// Make new event loop with an empty tree.
  pub fn new(options: EventLoopOptions) -> Self {
    Self::with_tree(options, Tree::new())
  }

  /// Make new event loop with an already built tree.
  pub fn with_tree(options: EventLoopOptions, tree: Tree) -> Self {
    let canvas = Canvas::to_arc(Canvas::new(options.width(), options.height()));
    let tree = Tree::to_arc(tree);
    let (sender, receiver) = channel(options.channel_buf_size().max(1));

    Self {
      tree,
      canvas,
      defaults: Defaults::default(),
      dispatch: MouseDispatch::new(),
      cancellation_token: CancellationToken::new(),
      detached_tracker: TaskTracker::new(),
      sender: Some(sender),
      receiver,
    }
  }

  /// A new sender to the event loop, `None` once the loop has started.
  pub fn sender(&self) -> Option<Sender<EventLoopMessage>> {
    self.sender.clone()
  }

  /// Spawn an event source. It holds a sender until the stream is
  /// exhausted, the loop ends after all the sources are exhausted.
  pub fn spawn_source<S>(&self, stream: S)
  where
    S: Stream<Item = PointerEvent> + Send + 'static,
  {
    let Some(sender) = self.sender() else {
      warn!("Event loop already started, source is ignored");
      return;
    };
    self.detached_tracker.spawn(async move {
      let sent = forward_events(stream, sender).await;
      trace!("Event source exhausted after {} event(s)", sent);
    });
  }

  /// Dispatch one pointer event, the event is in the surface space.
  ///
  /// Dispatch errors are logged and reset the dispatch state, they never
  /// stop the loop.
  pub fn process_one(&mut self, event: &PointerEvent) {
    let mut tree = lock!(self.tree);
    let root_pos = match tree.root_id().and_then(|id| tree.coordinates(id)) {
      Some(coords) => coords.pos(),
      None => {
        warn!("Dropped {}, tree doesn't have a root", event);
        return;
      }
    };
    let event = event.relative_to(root_pos);
    trace!("Process {}", event);
    if let Err(e) = self.dispatch.handle(&mut tree, &self.defaults, &event) {
      error!("Failed to dispatch {}:{:?}", event, e);
      self.dispatch.reset();
    }
  }

  /// Start a new canvas frame and draw the whole tree onto it.
  pub fn render(&mut self) -> TheResult<()> {
    let tree = lock!(self.tree);
    let mut canvas = lock!(self.canvas);
    canvas.begin_frame();

    let root_id = tree.root_id().ok_or(TheErr::NoRoot)?;
    let root_pos = tree
      .coordinates(root_id)
      .ok_or(TheErr::NodeNotFound(root_id))?
      .pos();
    let surface: &mut dyn Surface = &mut *canvas;
    let mut guard = SurfaceGuard::new(surface);
    guard.translate(root_pos.x(), root_pos.y());
    tree.draw(&mut *guard, &self.defaults)
  }

  async fn process_message(&mut self, msg: Option<EventLoopMessage>) {
    match msg {
      Some(EventLoopMessage::Pointer(event)) => self.process_one(&event),
      Some(EventLoopMessage::Redraw) => trace!("Redraw requested"),
      Some(EventLoopMessage::Quit) => {
        trace!("Quit requested, exit loop");
        self.cancellation_token.cancel();
      }
      None => {
        trace!("All event sources are closed, exit loop");
        self.cancellation_token.cancel();
      }
    }
  }

  async fn process_cancellation_notify(&mut self) {
    trace!("Receive cancellation token, exit loop");
    self.detached_tracker.close();
  }

  /// Running the loop, it repeatedly does following steps:
  ///
  /// 1. Receives a message from the event sources, or the cancellation
  ///    request (which tells this event loop to quit). The loop's own sender
  ///    is dropped first, so closing all the sources also ends the loop.
  /// 2. Dispatches the pointer event to the tree.
  /// 3. Redraws the canvas. A failed frame is logged and the loop goes on.
  pub async fn run(&mut self) -> TheResult<()> {
    self.sender = None;
    self.render_or_log();
    loop {
      tokio::select! {
        biased;

        // Receive cancellation notify
        _ = self.cancellation_token.cancelled() => {
          self.process_cancellation_notify().await;
          break;
        }
        // Receive pointer events
        msg = self.receiver.recv() => {
          self.process_message(msg).await;
        }
      }

      self.render_or_log();
    }

    Ok(())
  }

  fn render_or_log(&mut self) {
    if let Err(e) = self.render() {
      error!("Failed to render frame:{:?}", e);
    }
  }
}
