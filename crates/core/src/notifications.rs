//! Notification delivery aggregation for workflow instances.
//!
//! The upstream workflow engine reports a flat list of per-channel delivery
//! records for an instance. The shell reduces that list into the three
//! summaries the original surface displayed: per-channel counts with a
//! delivery rate, per-stage counts, and an overall rate, plus a bounded
//! most-recent timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::status::{Channel, DeliveryStatus};

/// Default length of the recent-timeline slice.
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// One notification delivery attempt for a workflow instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Channel the notification went out on.
    pub channel: Channel,
    /// Workflow stage that triggered the notification.
    pub stage: String,
    /// Delivery outcome (or `Sent` while still in flight).
    pub status: DeliveryStatus,
    /// When the notification was handed to the channel.
    pub sent_at: DateTime<Utc>,
}

/// Aggregated delivery counts for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub channel: Channel,
    pub total: u32,
    pub delivered: u32,
    pub failed: u32,
    /// Delivered percentage, rounded to the nearest whole percent.
    pub rate: u32,
}

/// Aggregated delivery counts for one workflow stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    pub stage: String,
    pub total: u32,
    pub delivered: u32,
}

/// The full aggregation served for one workflow instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSummary {
    /// Per-channel summaries, in [`Channel::ALL`] order, channels with no
    /// records omitted.
    pub by_channel: Vec<ChannelSummary>,
    /// Per-stage summaries, in first-seen record order.
    pub by_stage: Vec<StageSummary>,
    /// Overall delivered percentage across every record.
    pub overall_rate: u32,
    /// The most recent records, newest first, bounded by the limit the
    /// caller passed to [`summarize`].
    pub recent: Vec<DeliveryRecord>,
}

/// Percentage of `part` in `total`, rounded half-up. Zero when `total` is
/// zero, with no division error.
const fn rate_percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (100 * part + total / 2) / total
    }
}

/// Reduce a flat record list into the display summaries.
///
/// Pure aggregation over already-fetched data; refresh semantics live with
/// the caller.
#[must_use]
pub fn summarize(records: &[DeliveryRecord], recent_limit: usize) -> NotificationSummary {
    let mut channel_counts: Vec<(Channel, u32, u32, u32)> = Vec::new();
    let mut stage_counts: Vec<StageSummary> = Vec::new();

    for record in records {
        let delivered = u32::from(record.status == DeliveryStatus::Delivered);
        let failed = u32::from(record.status == DeliveryStatus::Failed);

        match channel_counts.iter_mut().find(|(c, ..)| *c == record.channel) {
            Some((_, total, del, fail)) => {
                *total += 1;
                *del += delivered;
                *fail += failed;
            }
            None => channel_counts.push((record.channel, 1, delivered, failed)),
        }

        match stage_counts.iter_mut().find(|s| s.stage == record.stage) {
            Some(stage) => {
                stage.total += 1;
                stage.delivered += delivered;
            }
            None => stage_counts.push(StageSummary {
                stage: record.stage.clone(),
                total: 1,
                delivered,
            }),
        }
    }

    let by_channel: Vec<ChannelSummary> = Channel::ALL
        .iter()
        .filter_map(|channel| {
            channel_counts
                .iter()
                .find(|(c, ..)| c == channel)
                .map(|&(channel, total, delivered, failed)| ChannelSummary {
                    channel,
                    total,
                    delivered,
                    failed,
                    rate: rate_percent(delivered, total),
                })
        })
        .collect();

    let total = u32::try_from(records.len()).unwrap_or(u32::MAX);
    let delivered = by_channel
        .iter()
        .map(|c: &ChannelSummary| c.delivered)
        .sum();

    let mut recent: Vec<DeliveryRecord> = records.to_vec();
    recent.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
    recent.truncate(recent_limit);

    NotificationSummary {
        by_channel,
        by_stage: stage_counts,
        overall_rate: rate_percent(delivered, total),
        recent,
    }
}
