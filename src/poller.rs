use std::io::Write;

use chrono::{DateTime, Local, TimeZone};
use tokio::time::{interval, MissedTickBehavior};

use crate::config::Config;
use crate::error::Result;
use crate::sensors::{all_sensors, SensorState};

pub trait StateSink {
    fn publish(&mut self, states: &[SensorState]) -> Result<()>;
}

/// Writes one JSON object per sensor, one per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StateSink for JsonLinesSink<W> {
    fn publish(&mut self, states: &[SensorState]) -> Result<()> {
        for state in states {
            serde_json::to_writer(&mut self.writer, state)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps the most recent batch in memory.
#[derive(Debug, Default)]
pub struct LatestSink {
    pub latest: Vec<SensorState>,
    pub publishes: u64,
}

impl StateSink for LatestSink {
    fn publish(&mut self, states: &[SensorState]) -> Result<()> {
        self.latest = states.to_vec();
        self.publishes += 1;
        Ok(())
    }
}

pub fn poll_once<Tz: TimeZone, S: StateSink + ?Sized>(
    now: &DateTime<Tz>,
    sink: &mut S,
) -> Result<usize> {
    let states = all_sensors(now)?;
    sink.publish(&states)?;
    Ok(states.len())
}

/// Polls on the configured interval against the local clock.
pub async fn run<S: StateSink + ?Sized>(config: &Config, sink: &mut S) -> Result<()> {
    config.validate()?;
    log::info!(
        "polling every {}s (card version {})",
        config.scan_interval.as_secs_f64(),
        config.card_version
    );

    let mut ticker = interval(config.scan_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks: u64 = 0;

    loop {
        ticker.tick().await;

        let now = Local::now();
        match poll_once(&now, sink) {
            Ok(count) => log::debug!("published {count} sensor states at {}", now.to_rfc3339()),
            Err(e) => log::error!("poll at {} failed: {e}", now.to_rfc3339()),
        }

        ticks += 1;
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("stopping after {ticks} polls");
            return Ok(());
        }
    }
}
