//! Probe a handful of well-known fonts and font stacks against the fonts
//! actually installed on this machine.
//!
//! Run with `cargo run -p fontprobe-shaper --example font_check`.

use fontprobe::FontProbe;
use fontprobe_shaper::ShapedTextProvider;

const FONT_STACKS: &[&str] = &[
    "",
    "Fake",
    "Arial, Helvetica, sans-serif",
    "Helvetica, Arial, sans-serif",
    "Consolas, Menlo, Monaco, 'Lucida Console', 'DejaVu Sans Mono', 'Courier New', monospace",
    "Palatino Linotype, Book Antiqua, Palatino, serif",
    "Tahoma, Geneva, sans-serif",
    "Times New Roman, Times, serif",
    "Comic Sans MS, cursive",
    "Impact, Charcoal, sans-serif",
];

const FONT_NAMES: &[&str] = &[
    "Arial",
    "Comic Sans MS",
    "Consolas",
    "Courier New",
    "DejaVu Sans",
    "Georgia",
    "Helvetica",
    "Impact",
    "Liberation Sans",
    "Menlo",
    "Noto Sans",
    "Times New Roman",
    "Verdana",
    "Totally Fake Font Name",
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let probe = FontProbe::new(ShapedTextProvider::new()?);
    println!("default font: {}", probe.default_font_family()?);
    println!("opposite generic: {}\n", probe.default_font_opposite()?);

    println!("used font per stack:");
    for stack in FONT_STACKS {
        match probe.find_used_font(stack)? {
            Some(used) => println!("  {stack:?} -> {used}"),
            None => println!("  {stack:?} -> no match"),
        }
    }

    println!("\navailability:");
    for name in FONT_NAMES {
        let mark = if probe.is_font_available(name)? { "yes" } else { "no" };
        println!("  {name}: {mark}");
    }

    Ok(())
}
