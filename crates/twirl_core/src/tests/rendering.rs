use crate::{
    ColorMode, ColorStyler, CompositionEngine, FrameAnimator, FrameSource, MessageAnimator,
    PartKind, Settings, SpinnerPreset, StyleTable,
};

fn plain_engine(frames: &[&str]) -> CompositionEngine {
    let source = FrameSource::new(frames.iter().copied()).unwrap();
    CompositionEngine::new(
        ColorStyler::plain(),
        FrameAnimator::new(source, 0),
        MessageAnimator::new(" ", ""),
    )
}

/// Splits a render into its visible part and the cursor-back count.
fn split_render(out: &str) -> (&str, usize) {
    let Some(start) = out.rfind("\x1b[") else {
        return (out, 0);
    };
    let count = out[start + 2..out.len() - 1].parse().unwrap();
    (&out[..start], count)
}

#[test]
fn test_shrink_pads_exactly_the_delta() {
    let mut engine = plain_engine(&["⠋", "⠙"]);
    engine.message_mut().set("loading", None);
    let first = engine.render();
    assert_eq!(first, "⠋ Loading...\x1b[12D");

    engine.message_mut().clear();
    engine.advance_frame();
    let rendered = engine.render();
    let (visible, back) = split_render(&rendered);
    assert_eq!(visible, format!("⠙{}", " ".repeat(11)));
    assert_eq!(back, 12);
}

#[test]
fn test_erase_width_tracks_any_update_sequence() {
    let mut engine = plain_engine(&["⠋", "⠙", "⠹"]);
    let messages = ["loading", "", "fetching remote index", "ok", "", "x"];
    let percents = [None, Some(0.5), Some(1.0), None, Some(0.07), Some(0.999)];

    let mut previous: usize = 0;
    for step in 0..24 {
        match messages[step % messages.len()] {
            "" => engine.message_mut().clear(),
            text => engine.message_mut().set(text, None),
        }
        match percents[step % percents.len()] {
            Some(p) => {
                engine.progress_mut().set(p);
            }
            None => engine.progress_mut().clear(),
        }
        engine.set_inline(step % 5 == 0);
        engine.advance_frame();

        let out = engine.render();
        let current = engine.previous_width();
        let (visible, back) = split_render(&out);
        let trailing = visible.len() - visible.trim_end_matches(' ').len();
        let delta = previous.saturating_sub(current);

        assert!(trailing >= delta, "step {step}: {out:?}");
        assert_eq!(visible.chars().count(), current + delta, "step {step}");
        assert_eq!(back, current + delta, "step {step}");
        previous = current;
    }
}

#[test]
fn test_no_color_is_identity_for_every_table() {
    let tables = [
        StyleTable::default(),
        StyleTable::disabled(),
        SpinnerPreset::Dice.styles(),
        SpinnerPreset::Moon.styles(),
    ];
    for table in &tables {
        let styler = ColorStyler::new(table, ColorMode::NoColor).unwrap();
        for kind in PartKind::ALL {
            for text in ["", "⠋", "Loading...", "100%", "ᚹädm漢字"] {
                assert_eq!(styler.style(kind, text, 7), text);
            }
        }
    }
}

#[test]
fn test_256_colors_cycle_with_the_glyph() {
    let settings = Settings::from_toml_str(
        r#"
        frames = ["a", "b", "c", "d"]
        color = "256"

        [styles.frames]
        color256 = [196, 202, 208, 214]
        "#,
    )
    .unwrap();
    let styler = ColorStyler::new(&settings.styles, ColorMode::Ansi256).unwrap();
    let source = FrameSource::new(settings.frames).unwrap();
    let mut engine = CompositionEngine::new(
        styler,
        FrameAnimator::new(source, 0),
        MessageAnimator::new(" ", ""),
    );

    let mut seen = Vec::new();
    for _ in 0..8 {
        seen.push(engine.render());
        engine.advance_frame();
    }
    assert_eq!(seen[0], "\x1b[38;5;196ma\x1b[0m\x1b[1D");
    assert_eq!(seen[1], "\x1b[38;5;202mb\x1b[0m\x1b[1D");
    assert_eq!(seen[3], "\x1b[38;5;214md\x1b[0m\x1b[1D");
    assert_eq!(seen[4], seen[0]);
    assert_eq!(seen[7], seen[3]);
}

#[test]
fn test_wide_glyph_presets_erase_both_cells() {
    let settings = SpinnerPreset::Moon.settings();
    let source = FrameSource::new(settings.frames).unwrap();
    let mut engine = CompositionEngine::new(
        ColorStyler::plain(),
        FrameAnimator::new(source, settings.erasing_shift),
        MessageAnimator::new(" ", ""),
    );
    assert_eq!(engine.render(), "🌘\x1b[2D");
    assert_eq!(engine.erase(), "  \x1b[2D");
}

#[test]
fn test_padded_weather_frames_move_back_two_columns() {
    let settings = SpinnerPreset::Weather.settings();
    assert_eq!(settings.erasing_shift, 0);
    let source = FrameSource::new(settings.frames).unwrap();
    let mut engine = CompositionEngine::new(
        ColorStyler::plain(),
        FrameAnimator::new(source, settings.erasing_shift),
        MessageAnimator::new(" ", ""),
    );
    assert_eq!(engine.render(), "🌤 \x1b[2D");

    engine.set_inline(true);
    assert_eq!(engine.render(), " 🌤 \x1b[3D");

    engine.set_inline(false);
    engine.message_mut().set("raining", None);
    assert_eq!(engine.render(), "🌤  Raining...\x1b[13D");
}

