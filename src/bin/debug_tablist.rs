// Debug script to trace a tab selection change frame by frame
//
// Usage: debug-tablist [variant] [from] [to]
//   variant  primary | secondary | vertical | navigation (default primary)
//   from/to  tab indices (default 0 and 2)

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use md_components::{
    Palette, Platform, RectRegistry, SelectionGroup, Tab, TabList, ToggleElement, SELECTION_DURATION,
};
use md_gallery::logging::init_stderr_logging;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Sampling step for the printed frames
const STEP: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    init_stderr_logging("warn")?;

    let mut args = std::env::args().skip(1);
    let variant = args.next().unwrap_or_else(|| "primary".to_string());
    let from: usize = args.next().map(|s| s.parse()).transpose().context("invalid 'from' index")?.unwrap_or(0);
    let to: usize = args.next().map(|s| s.parse()).transpose().context("invalid 'to' index")?.unwrap_or(2);

    let tabs = vec![
        Tab::new("inbox", "Inbox"),
        Tab::new("docs", "Documents"),
        Tab::new("archive", "Archive"),
        Tab::new("settings", "Settings"),
    ];
    if from >= tabs.len() || to >= tabs.len() {
        bail!("indices must be below {}", tabs.len());
    }

    let mut list = TabList::new("debug", tabs)
        .with_variant(variant.as_str())
        .with_selected(Some(from));
    let area = if list.variant().is_vertical() {
        Rect::new(0, 0, 16, 4)
    } else {
        Rect::new(0, 0, 56, 2)
    };
    let mut registry = RectRegistry::new();
    let platform = Platform::detect(false);
    let palette = Palette::default();

    // first render, then one frame so the items may animate
    let t0 = Instant::now();
    list.layout(area, &mut registry);
    list.update(&registry, platform, t0);
    list.frame_tick(t0);

    println!("=== LAYOUT ({variant}) ===");
    for tab in list.items() {
        let name = tab.item().element_name();
        let indicator = tab.item().indicator_name();
        println!(
            "  {:<10} box {:?}  indicator {:?}",
            tab.item().id(),
            registry.get_metrics_by_name(&name),
            registry.get_metrics_by_name(&indicator)
        );
    }
    println!();

    let start = t0 + Duration::from_millis(16);
    list.set_selected(Some(to));
    list.layout(area, &mut registry);
    list.update(&registry, platform, start);

    println!("=== KEYFRAMES {from} -> {to} ===");
    for (index, tab) in list.items().iter().enumerate() {
        for animation in tab.indicator_animations().all() {
            let [first, last] = animation.keyframes();
            println!("  [{index}] {first:?}");
            println!("  [{index}] {last:?}");
        }
    }
    if platform.prefers_reduced_motion {
        println!("  (reduced motion: no animation)");
    }
    println!();

    println!("=== FRAMES ===");
    let mut elapsed = Duration::ZERO;
    while elapsed <= SELECTION_DURATION + STEP {
        let now = start + elapsed;
        list.frame_tick(now);
        let style = list
            .selected_item()
            .and_then(|tab| tab.indicator_style(now));
        let mut buffer = Buffer::empty(area);
        list.widget(&registry, &palette, now).render(area, &mut buffer);
        // the indicator track: bottom row, or the first column when vertical
        let line: String = if list.variant().is_vertical() {
            (area.top()..area.bottom())
                .map(|y| buffer[(area.left(), y)].symbol().to_string())
                .collect()
        } else {
            let row = area.bottom() - 1;
            (area.left()..area.right())
                .map(|x| buffer[(x, row)].symbol().to_string())
                .collect()
        };
        match style {
            Some(style) => println!(
                "  {:>4}ms opacity {:.2} translate {:>6.2} scale {:.2} |{line}|",
                elapsed.as_millis(),
                style.opacity,
                style.transform.translate,
                style.transform.scale
            ),
            None => println!("  {:>4}ms settled |{line}|", elapsed.as_millis()),
        }
        elapsed += STEP;
    }
    Ok(())
}
