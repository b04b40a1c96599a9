//! Replay pointer events on a demo scene.
//!
//! See [porthole_core] for more details.

use porthole_core::cli::CliOptions;
use porthole_core::evloop::EventLoop;
use porthole_core::evloop::EventLoopOptionsBuilder;
use porthole_core::evloop::source::script_stream;
use porthole_core::log;
use porthole_core::prelude::*;
use porthole_core::ui::canvas::Color;
use porthole_core::ui::tree::Tree;
use porthole_core::ui::widget::Block;
use porthole_core::ui::widget::Container;
use porthole_core::ui::widget::Picture;
use porthole_core::ui::widget::Porthole;
use porthole_core::ui::widget::RootContainer;

use tokio::io::BufReader;

const MOON: &str = "moon";

/// Demo scene:
///
/// ```text
/// RootContainer
/// |- Container
/// |  |- Block (steelblue)
/// |  `- Block (tomato)
/// `- Porthole
///    `- Picture (moon)
/// ```
fn make_demo_tree(width: u32, height: u32) -> TheResult<Tree> {
  let mut tree = Tree::new();
  let root_id =
    tree.add_root(Coordinates::new(0, 0, width, height), RootContainer::default())?;

  let panel_id =
    tree.insert(root_id, Coordinates::new(20, 20, 300, 200), Container::new())?;
  tree.insert(
    panel_id,
    Coordinates::new(10, 10, 80, 60),
    Block::new(Color::new("steelblue")),
  )?;
  tree.insert(
    panel_id,
    Coordinates::new(120, 40, 80, 60),
    Block::new(Color::new("tomato")),
  )?;

  let porthole_id = tree.insert_single(
    root_id,
    Coordinates::new(360, 40, 160, 160),
    Porthole::with_border(Color::new("#333333")),
  )?;
  tree.insert(
    porthole_id,
    Coordinates::new(-20, -20, 200, 200),
    Picture::new(MOON),
  )?;

  Ok(tree)
}

fn main() -> IoResult<()> {
  log::init()?;
  let cli_opt = CliOptions::from_env();
  trace!("cli_opt: {:?}", cli_opt);

  let tree = make_demo_tree(cli_opt.width(), cli_opt.height()).map_err(IoErr::other)?;
  let options = EventLoopOptionsBuilder::default()
    .width(cli_opt.width())
    .height(cli_opt.height())
    .build()
    .map_err(IoErr::other)?;

  // Explicitly create tokio runtime for the EventLoop.
  let evloop_tokio_runtime = tokio::runtime::Runtime::new()?;
  evloop_tokio_runtime.block_on(async {
    // Create event loop.
    let mut event_loop = EventLoop::with_tree(options, tree);
    lock!(event_loop.canvas).register_image(MOON, 200, 200);

    // Start reading pointer events.
    match cli_opt.script() {
      Some(script) => {
        let file = tokio::fs::File::open(script).await?;
        event_loop.spawn_source(script_stream(BufReader::new(file)));
      }
      None => {
        event_loop.spawn_source(script_stream(BufReader::new(tokio::io::stdin())));
      }
    }

    // Run loop.
    event_loop.run().await.map_err(IoErr::other)?;

    // Print the final scene.
    let tree = lock!(event_loop.tree);
    for id in tree.iter() {
      if let (Some(node), Some(coords)) = (tree.node(id), tree.coordinates(id)) {
        println!(
          "{} {} x:{} y:{} width:{} height:{}",
          id,
          node.name(),
          coords.x(),
          coords.y(),
          coords.width(),
          coords.height()
        );
      }
    }
    let canvas = lock!(event_loop.canvas);
    println!(
      "frames:{} last frame commands:{}",
      canvas.frame_count(),
      canvas.entries().len()
    );

    Ok::<(), IoErr>(())
  })
}
