//! Timeline sampling and the queries derived from it.
//!
//! Every query re-samples the BAC curve on a fixed 5-minute grid, so results
//! are deterministic for a given session and clock reading.

use crate::tables::{impairment_level, LEGAL_LIMIT};
use crate::{BacPeak, ImpairmentLevel, Session, TimelinePoint};
use chrono::{DateTime, Duration, Utc};

/// Spacing between timeline samples
pub const SAMPLE_INTERVAL_MINUTES: i64 = 5;

/// Horizon scanned for the peak, from session start
pub const PEAK_HORIZON_HOURS: u32 = 6;

/// Horizon scanned for sobriety and legality, from now
pub const RECOVERY_HORIZON_HOURS: u32 = 24;

/// Horizon scanned for reaching the legal limit, from now
pub const LIMIT_HORIZON_HOURS: u32 = 6;

impl Session {
    /// Sample BAC every 5 minutes from `start` through `start + span`, inclusive
    ///
    /// Spans that are not a multiple of 5 minutes end on the last sample
    /// before `start + span`.
    pub fn timeline_span(&self, start: DateTime<Utc>, span: Duration) -> Vec<TimelinePoint> {
        let step = Duration::minutes(SAMPLE_INTERVAL_MINUTES);
        let end = start + span;
        let samples = (span.num_minutes().max(0) / SAMPLE_INTERVAL_MINUTES + 1) as usize;

        let mut points = Vec::with_capacity(samples);
        let mut time = start;
        while time <= end {
            points.push(TimelinePoint {
                time,
                bac: self.bac_at(time),
            });
            time = time + step;
        }
        points
    }

    /// Sample BAC every 5 minutes from `start` through `start + hours`, inclusive
    pub fn timeline_from(&self, start: DateTime<Utc>, hours: u32) -> Vec<TimelinePoint> {
        self.timeline_span(start, Duration::hours(i64::from(hours)))
    }

    /// Sample BAC over `hours`, starting now or at session start
    pub fn timeline(&self, hours: u32, from_now: bool) -> Vec<TimelinePoint> {
        let start = if from_now {
            self.now()
        } else {
            self.start_time()
        };
        self.timeline_from(start, hours)
    }

    /// Highest BAC in the 6 hours after session start
    ///
    /// Ties resolve to the earliest sample; an empty log peaks at zero at
    /// session start.
    pub fn peak_bac(&self) -> BacPeak {
        let mut peak = BacPeak {
            bac: 0.0,
            time: self.start_time(),
        };
        if !self.has_drinks() {
            return peak;
        }

        for point in self.timeline(PEAK_HORIZON_HOURS, false) {
            if point.bac > peak.bac {
                peak = BacPeak {
                    bac: point.bac,
                    time: point.time,
                };
            }
        }
        tracing::debug!("Peak BAC {:.4} at {}", peak.bac, peak.time);
        peak
    }

    /// Minutes from now until BAC is at or below `threshold`
    ///
    /// `None` if that does not happen within 24 hours.
    pub fn time_to_threshold(&self, threshold: f64) -> Option<i64> {
        let now = self.now();
        self.timeline_from(now, RECOVERY_HORIZON_HOURS)
            .into_iter()
            .find(|p| p.bac <= threshold)
            .map(|p| (p.time - now).num_minutes())
    }

    /// Minutes from now until BAC reaches zero
    pub fn time_to_sober(&self) -> Option<i64> {
        self.time_to_threshold(0.0)
    }

    /// Minutes from now until BAC first reaches the legal limit
    ///
    /// `None` if it stays below the limit for the next 6 hours.
    pub fn time_to_legal_limit(&self) -> Option<i64> {
        let now = self.now();
        self.timeline_from(now, LIMIT_HORIZON_HOURS)
            .into_iter()
            .find(|p| p.bac >= LEGAL_LIMIT)
            .map(|p| (p.time - now).num_minutes())
    }

    /// Instant BAC first drops below the legal limit
    ///
    /// `None` when already below the limit, or when it stays above it for
    /// the next 24 hours.
    pub fn time_when_legal(&self) -> Option<DateTime<Utc>> {
        let now = self.now();
        if self.bac_at(now) < LEGAL_LIMIT {
            return None;
        }

        self.timeline_from(now, RECOVERY_HORIZON_HOURS)
            .into_iter()
            .find(|p| p.bac < LEGAL_LIMIT)
            .map(|p| p.time)
    }

    /// Impairment level for the current BAC
    pub fn current_impairment_level(&self) -> &'static ImpairmentLevel {
        impairment_level(self.bac_now())
    }
}
