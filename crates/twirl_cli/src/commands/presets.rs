//! `twirl presets`

use anyhow::Result;
use serde::Serialize;
use twirl_core::SpinnerPreset;

use crate::output;

#[derive(Serialize)]
struct PresetInfo {
    name: &'static str,
    interval_ms: u64,
    frames: usize,
    erasing_shift: usize,
    sample: String,
}

impl PresetInfo {
    fn new(preset: SpinnerPreset) -> Self {
        let frames = preset.frames();
        Self {
            name: preset.name(),
            interval_ms: preset.interval().as_millis() as u64,
            frames: frames.len(),
            erasing_shift: preset.erasing_shift(),
            sample: frames.iter().take(4).copied().collect::<Vec<_>>().join(" "),
        }
    }
}

pub fn handle() -> Result<()> {
    let infos: Vec<PresetInfo> = SpinnerPreset::ALL.into_iter().map(PresetInfo::new).collect();

    let mut table = output::table();
    output::table_header(&mut table, &["Preset", "Interval", "Frames", "Sample"]);
    for info in &infos {
        output::table_row(
            &mut table,
            info.name,
            &[
                format!("{} ms", info.interval_ms),
                info.frames.to_string(),
                info.sample.clone(),
            ],
        );
    }
    output::table_print(&table, &infos);
    Ok(())
}
