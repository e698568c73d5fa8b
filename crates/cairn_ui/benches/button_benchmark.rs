//! # Button Benchmark
//!
//! Construction composites every state up front so rendering is a single
//! blit. Measures both sides of that trade.
//!
//! Run with: cargo bench --package cairn_ui --bench button_benchmark

#![allow(missing_docs)]

use cairn_render::{Filter, PixelSurface, SoftwareRenderer, Surface, SurfaceFactory};
use cairn_ui::style::PALETTE_UNITS;
use cairn_ui::{
    BlockFont, Button, ButtonState, FontStyle, IndexedFrame, Palette, SoftwareAssets, SpriteSheet,
    StyleRegistry,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const WIDE: &str = "/data/global/ui/FrontEnd/WideButtonBlank.dc6";

/// Front-end sized wide button: 2x1 grid, 4 states.
fn wide_assets() -> SoftwareAssets {
    let frames = (0..8u8)
        .map(|i| IndexedFrame::solid(if i % 2 == 0 { 128 } else { 144 }, 35, i + 1))
        .collect();

    SoftwareAssets::new()
        .with_sheet(WIDE, SpriteSheet::new(frames))
        .with_palette(PALETTE_UNITS, Palette::default())
        .with_font(FontStyle::Exocet10, BlockFont::new(9, 10))
}

fn benchmark_create(c: &mut Criterion) {
    let styles = StyleRegistry::builtin();
    let assets = wide_assets();
    let renderer = SoftwareRenderer::new();

    c.bench_function("create_wide_button_4_states", |b| {
        b.iter(|| {
            let button: Button<PixelSurface> =
                Button::create(black_box("SINGLE PLAYER"), "wide", &styles, &assets, &renderer)
                    .unwrap();
            black_box(button)
        });
    });
}

fn benchmark_render(c: &mut Criterion) {
    let renderer = SoftwareRenderer::new();
    let mut button: Button<PixelSurface> = Button::create(
        "SINGLE PLAYER",
        "wide",
        &StyleRegistry::builtin(),
        &wide_assets(),
        &renderer,
    )
    .unwrap();
    let mut screen = renderer.new_surface(800, 600, Filter::Nearest).unwrap();

    c.bench_function("render_wide_button", |b| {
        let mut pressed = false;
        b.iter(|| {
            pressed = !pressed;
            button.set_state(if pressed { ButtonState::Pressed } else { ButtonState::Default });

            screen.push_translation(264, 290);
            button.render(&mut screen).unwrap();
            screen.pop().unwrap();
            black_box(&screen);
        });
    });
}

criterion_group!(benches, benchmark_create, benchmark_render);
criterion_main!(benches);
