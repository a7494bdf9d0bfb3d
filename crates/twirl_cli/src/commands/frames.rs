//! `twirl frames <preset>`

use anyhow::Result;
use twirl_core::SpinnerPreset;

use crate::output;

pub fn handle(name: &str) -> Result<()> {
    let preset: SpinnerPreset = name.parse()?;
    let frames = preset.frames();

    if output::is_json() {
        output::data(
            preset.name(),
            &serde_json::json!({
                "name": preset.name(),
                "interval_ms": preset.interval().as_millis() as u64,
                "erasing_shift": preset.erasing_shift(),
                "frames": frames,
            }),
        );
        return Ok(());
    }

    output::header(preset.name());
    output::kv("interval", &format!("{} ms", preset.interval().as_millis()));
    output::kv("frames", &frames.len().to_string());
    for frame in frames {
        println!("{frame}");
    }
    Ok(())
}
