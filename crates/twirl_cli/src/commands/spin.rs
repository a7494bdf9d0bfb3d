//! `twirl spin`: drives a spinner on a tokio interval.
//!
//! Status messages are announced at fixed fractions of the run: the spinner
//! line is erased, the message printed on its own line, and the spinner picks
//! it up as its own message on the next tick.

use std::io::Write;
use std::time::Duration;

use anyhow::{Result, bail};
use tokio::time::{Instant, MissedTickBehavior};
use twirl_core::{Output, SettingsFile, Spinner};

use crate::cli::SpinArgs;
use crate::config;
use crate::output;

/// (fraction of the run, message)
const STATUS_MESSAGES: &[(f64, &str)] = &[
    (0.0, "initializing"),
    (0.2, "loading configuration"),
    (0.45, "fetching data"),
    (0.7, "processing"),
    (0.9, "finalizing"),
];

/// Text an inline spinner shares its line with.
const INLINE_LABEL: &str = "Working:";

impl SpinArgs {
    fn overrides(&self) -> SettingsFile {
        SettingsFile {
            preset: self.preset.clone(),
            interval_ms: self.interval_ms,
            message: self.message.clone(),
            inline: self.inline.then_some(true),
            color: self.color.clone(),
            ..Default::default()
        }
    }
}

/// Writes a string the spinner returned instead of writing itself.
fn draw(text: String) {
    if let Err(e) = draw_to(&mut std::io::stdout(), &text) {
        tracing::debug!(error = %e, "spinner draw failed");
    }
}

fn draw_to(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

pub async fn handle(args: SpinArgs) -> Result<()> {
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        bail!("--seconds must be a positive number, got {}", args.seconds);
    }
    let file = config::load_settings_file(args.config.as_deref())?.overlay(args.overrides());
    let target = file.output_target()?.unwrap_or(Output::Stdout);
    let announce_messages = file.message.is_none();
    let settings = file.into_settings()?;
    let inline = settings.inline;

    let mut spinner = Spinner::new(settings, target)?;
    tracing::info!(
        spinner = spinner.name(),
        interval_ms = spinner.interval().as_millis() as u64,
        seconds = args.seconds,
        "starting spinner"
    );

    let total = Duration::from_secs_f64(args.seconds);
    let mut ticker = tokio::time::interval(spinner.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    output::hold_logs();
    if inline {
        print!("{INLINE_LABEL}");
    }
    draw(spinner.begin(args.progress.then_some(0.0)));

    let started = Instant::now();
    let mut next_message = 0;
    let mut interrupted = false;
    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                interrupted = true;
                break;
            }
            _ = ticker.tick() => {
                let elapsed = started.elapsed();
                if elapsed >= total {
                    break;
                }
                let fraction = elapsed.as_secs_f64() / total.as_secs_f64();
                if announce_messages {
                    while let Some((at, message)) = STATUS_MESSAGES.get(next_message) {
                        if fraction < *at {
                            break;
                        }
                        draw(spinner.erase());
                        if inline {
                            println!();
                        }
                        output::dim(&format!("{message}..."));
                        if inline {
                            print!("{INLINE_LABEL}");
                        }
                        spinner.message(Some(*message), None);
                        next_message += 1;
                    }
                }
                let percent = args.progress.then_some(fraction);
                draw(spinner.spin_with(percent, None));
            }
        }
    }

    draw(spinner.end());
    if inline {
        println!();
    }
    output::release_logs();

    if interrupted {
        output::warning("Interrupted");
    } else {
        output::success("Done!");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn draw_to_writes_text() {
        let mut buf = Vec::new();
        draw_to(&mut buf, "⠋\x1b[1D").unwrap();
        assert_eq!(buf, "⠋\x1b[1D".as_bytes());
    }

    #[test]
    fn draw_to_reports_write_errors() {
        let err = draw_to(&mut BrokenPipe, "⠋").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert!(draw_to(&mut BrokenPipe, "").is_ok());
    }
}
