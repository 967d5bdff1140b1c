use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use glide_components::slider::{EnterEffect, Motion, Slider, SliderArgs};
use glide_ui::{
    StyleProperty,
    headless::{HeadlessDocument, HeadlessElement},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "glide-demo")]
#[command(version, about = "Drive a slider on an in-memory page", long_about = None)]
struct Cli {
    /// Width of the slider container in px
    #[arg(long, default_value_t = 1000.0)]
    container_width: f32,
    /// Width of one item in px
    #[arg(long, default_value_t = 300.0)]
    item_width: f32,
    /// Column gap between items in px
    #[arg(long, default_value_t = 20.0)]
    gap: f32,
    /// Number of items in the strip
    #[arg(long, default_value_t = 6)]
    items: usize,
    /// Disable the pop effect on the entering item
    #[arg(long)]
    plain: bool,
    /// Steps to run: next, prev, go=<i>, jump=<i>, resize=<px>, frame, remove
    steps: Vec<Step>,
}

#[derive(Clone, Debug)]
enum Step {
    /// Click the "next" control.
    Next,
    /// Click the "previous" control.
    Prev,
    /// Animated move to an index.
    Go(isize),
    /// Instant move to an index.
    Jump(isize),
    /// Resize the container.
    Resize(f32),
    /// Run one animation frame.
    Frame,
    /// Remove the container from the page.
    Remove,
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (s, None),
        };
        let number = || value.ok_or_else(|| format!("step `{name}` needs a value, e.g. `{name}=2`"));
        match name {
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "frame" => Ok(Self::Frame),
            "remove" => Ok(Self::Remove),
            "go" => number()?.parse().map(Self::Go).map_err(|e| format!("go: {e}")),
            "jump" => number()?.parse().map(Self::Jump).map_err(|e| format!("jump: {e}")),
            "resize" => number()?
                .parse()
                .map(Self::Resize)
                .map_err(|e| format!("resize: {e}")),
            other => Err(format!("unknown step `{other}`")),
        }
    }
}

struct DemoPage {
    document: HeadlessDocument,
    container: HeadlessElement,
    list: HeadlessElement,
    prev: HeadlessElement,
    next: HeadlessElement,
}

impl DemoPage {
    fn build(cli: &Cli) -> Self {
        let document = HeadlessDocument::new();
        let container = HeadlessElement::new("div")
            .class("slider")
            .width(cli.container_width);
        let prev = HeadlessElement::new("button").attr("data-slider-prevBtn", "");
        let next = HeadlessElement::new("button").attr("data-slider-nextBtn", "");
        let list = HeadlessElement::new("ul")
            .class("slider-list")
            .computed("gap", format!("{}px", cli.gap));
        for _ in 0..cli.items {
            list.append(
                &HeadlessElement::new("li")
                    .class("slider-list__item")
                    .width(cli.item_width),
            );
        }
        container.append(&prev);
        container.append(&list);
        container.append(&next);
        document.body().append(&container);
        Self {
            document,
            container,
            list,
            prev,
            next,
        }
    }
}

fn run(step: &Step, page: &DemoPage, slider: &Slider) -> String {
    match *step {
        Step::Next => click_note(page.next.click()),
        Step::Prev => click_note(page.prev.click()),
        Step::Go(target) => {
            slider.go_to(target, Motion::Animated);
            String::new()
        }
        Step::Jump(target) => {
            slider.go_to(target, Motion::Instant);
            String::new()
        }
        Step::Resize(width) => {
            page.container.set_width(width);
            String::new()
        }
        Step::Frame => format!("ran {}", page.document.run_frame()),
        Step::Remove => {
            page.container.remove();
            // A removed element reports a zero size to its observers.
            page.container.set_width(0.0);
            String::new()
        }
    }
}

fn click_note(dispatched: bool) -> String {
    if dispatched {
        String::new()
    } else {
        "ignored (disabled)".to_string()
    }
}

fn report(label: &str, note: &str, page: &DemoPage, slider: &Slider) {
    let state = slider.state();
    let flag = |disabled: bool| if disabled { "off" } else { "on" };
    println!(
        "{label:<12} index={:<3} max={:<3} prev={:<3} next={:<3} transform={:<18} {note}",
        state.current_index(),
        state.max_index(),
        flag(page.prev.is_disabled()),
        flag(page.next.is_disabled()),
        page.list
            .style(StyleProperty::Transform)
            .unwrap_or_else(|| "-".to_string()),
    );
}

fn main() -> Result<()> {
    glide_ui::logging::init_tracing();
    let cli = Cli::parse();

    let page = DemoPage::build(&cli);
    let enter_effect = if cli.plain {
        EnterEffect::None
    } else {
        EnterEffect::Pop
    };
    let slider = Slider::try_attach(
        page.document.to_ref(),
        SliderArgs::default().enter_effect(enter_effect),
    )
    .context("failed to attach the slider")?;
    info!(items = cli.items, "demo page ready");

    report("attach", "", &page, &slider);
    for (i, step) in cli.steps.iter().enumerate() {
        let note = run(step, &page, &slider);
        let label = format!("{}:{step:?}", i + 1);
        report(&label, &note, &page, &slider);
        if !slider.is_attached() {
            println!("slider detached; remaining steps skipped");
            break;
        }
    }
    Ok(())
}
