//! Demo: drive a five-step story from top to bottom and print the boards.
//!
//! Simulates the original rats-vs-newyorkers page headlessly: a story
//! declaration, a scroller over five laid-out steps, and a scroll from the
//! top of the document to the bottom and half-way back. Prints the
//! scoreboard at each checkpoint and the final SVG boards.
//!
//! Run with: `cargo run --example story_page`
//! Set `RUST_LOG=debug` to watch the ledger mutations.

use anyhow::Result;
use inktally::prelude::*;

const STORY: &str = r#"{
    "seed": 1837,
    "steps": [
        {"step": 1, "winner": "a"},
        {"step": 2, "winner": "b"},
        {"step": 3, "winner": "a"},
        {"step": 4, "winner": "a"},
        {"step": 5, "winner": "a"}
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let story = Story::from_json(STORY)?;
    let mut engine = StoryEngine::new(story)?;

    let extents: Vec<StepExtent> = (0..5)
        .map(|i| StepExtent {
            top: 1200.0 + i as f64 * 500.0,
            height: 500.0,
        })
        .collect();
    let mut scroller = Scroller::new(ScrollerConfig::default(), extents)?;

    // Scroll down the page in 100px increments, then back up half-way.
    let down = (0..40).map(|i| i as f64 * 100.0);
    let up = (20..39).rev().map(|i| i as f64 * 100.0);

    for scroll_y in down.chain(up) {
        let events = scroller.observe(scroll_y);
        for event in events {
            engine.handle(event);
        }
        if scroller.active().is_some() {
            let scores = engine.scoreboard();
            println!("y={scroll_y:>6.0}  a={} b={}", scores.a, scores.b);
        }
    }

    let frame = engine.render();
    println!("\nfinal score: a={} b={}", frame.scoreboard.a, frame.scoreboard.b);
    println!("\nboard A:\n{}", frame.board_a.to_svg_string());
    println!("\nboard B:\n{}", frame.board_b.to_svg_string());

    Ok(())
}
