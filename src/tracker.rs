use crate::models::{RippleToken, SessionRecord, StoredState};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use std::time::Duration;

pub const UNDO_WINDOW: Duration = Duration::from_secs(5);
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1500);

const RIPPLE_HUE_OFFSET: u16 = 60;

#[derive(Debug, Clone)]
pub struct UndoContext {
    pub token: u64,
    pub previous_total: u64,
    pub delta: i64,
    record_id: Option<i64>,
}

#[derive(Debug)]
pub struct DeltaOutcome {
    pub previous_total: u64,
    pub applied: i64,
    pub undo_token: u64,
    pub ripple: Option<RippleToken>,
}

#[derive(Debug, Default)]
pub struct Tracker {
    total_minutes: u64,
    sessions: Vec<SessionRecord>,
    undo: Option<UndoContext>,
    undo_seq: u64,
    reset_pending: bool,
    ripples: Vec<RippleToken>,
    ripple_seq: u64,
    last_record_id: i64,
}

impl Tracker {
    pub fn from_stored(stored: StoredState) -> Self {
        let last_record_id = stored
            .sessions
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0);
        Self {
            total_minutes: stored.total_minutes,
            sessions: stored.sessions,
            last_record_id,
            ..Self::default()
        }
    }

    pub fn to_stored(&self) -> StoredState {
        StoredState {
            total_minutes: self.total_minutes,
            sessions: self.sessions.clone(),
        }
    }

    pub fn total_minutes(&self) -> u64 {
        self.total_minutes
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn ripples(&self) -> &[RippleToken] {
        &self.ripples
    }

    pub fn undo_context(&self) -> Option<&UndoContext> {
        self.undo.as_ref()
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    pub fn apply_delta(&mut self, minutes: i64) -> DeltaOutcome {
        self.apply_delta_at(Utc::now(), minutes)
    }

    pub fn apply_delta_at(&mut self, now: DateTime<Utc>, minutes: i64) -> DeltaOutcome {
        let previous = self.total_minutes;
        let next = if minutes < 0 {
            previous.saturating_sub(minutes.unsigned_abs())
        } else {
            previous.saturating_add(minutes as u64)
        };
        // The applied delta is the clamped difference, not the requested one.
        let applied = next as i64 - previous as i64;
        self.total_minutes = next;

        let record_id = if applied != 0 {
            let id = self.next_record_id(now);
            self.sessions.insert(
                0,
                SessionRecord {
                    id,
                    date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                    duration: applied,
                },
            );
            Some(id)
        } else {
            None
        };

        let ripple = if minutes > 0 {
            Some(self.spawn_ripple())
        } else {
            None
        };

        self.undo_seq += 1;
        let undo_token = self.undo_seq;
        self.undo = Some(UndoContext {
            token: undo_token,
            previous_total: previous,
            delta: applied,
            record_id,
        });

        DeltaOutcome {
            previous_total: previous,
            applied,
            undo_token,
            ripple,
        }
    }

    pub fn undo(&mut self) -> bool {
        let Some(context) = self.undo.take() else {
            return false;
        };
        // Restore the exact snapshot rather than re-negating the delta.
        self.total_minutes = context.previous_total;
        if let Some(id) = context.record_id {
            self.sessions.retain(|record| record.id != id);
        }
        true
    }

    pub fn expire_undo(&mut self, token: u64) {
        // A stale timer whose context was superseded must leave newer state alone.
        if self
            .undo
            .as_ref()
            .is_some_and(|context| context.token == token)
        {
            self.undo = None;
        }
    }

    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    pub fn cancel_reset(&mut self) {
        self.reset_pending = false;
    }

    pub fn confirm_reset(&mut self) {
        self.total_minutes = 0;
        self.sessions.clear();
        self.undo = None;
        self.reset_pending = false;
    }

    pub fn expire_ripple(&mut self, id: u64) {
        self.ripples.retain(|token| token.id != id);
    }

    fn spawn_ripple(&mut self) -> RippleToken {
        self.ripple_seq += 1;
        let mut rng = rand::thread_rng();
        let base_hue: u16 = rng.gen_range(0..360);
        let offset_hue = (base_hue + RIPPLE_HUE_OFFSET) % 360;
        let token = RippleToken {
            id: self.ripple_seq,
            color_a: format!("hsl({base_hue}, 70%, 60%)"),
            color_b: format!("hsl({offset_hue}, 80%, 60%)"),
        };
        self.ripples.push(token.clone());
        token
    }

    fn next_record_id(&mut self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        let id = if candidate <= self.last_record_id {
            self.last_record_id + 1
        } else {
            candidate
        };
        self.last_record_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap()
    }

    fn tracker_with_total(total: u64) -> Tracker {
        Tracker::from_stored(StoredState {
            total_minutes: total,
            sessions: Vec::new(),
        })
    }

    #[test]
    fn positive_delta_adds_and_records() {
        let mut tracker = tracker_with_total(50);
        let outcome = tracker.apply_delta_at(fixed_now(), 30);

        assert_eq!(tracker.total_minutes(), 80);
        assert_eq!(outcome.applied, 30);
        assert_eq!(outcome.previous_total, 50);
        assert_eq!(tracker.sessions().len(), 1);
        assert_eq!(tracker.sessions()[0].duration, 30);
        assert!(outcome.ripple.is_some());
    }

    #[test]
    fn negative_delta_clamps_at_zero() {
        let mut tracker = tracker_with_total(50);
        tracker.apply_delta_at(fixed_now(), 30);
        let outcome = tracker.apply_delta_at(fixed_now(), -200);

        assert_eq!(tracker.total_minutes(), 0);
        assert_eq!(outcome.applied, -80);
        assert_eq!(tracker.sessions()[0].duration, -80);
        assert!(outcome.ripple.is_none());
    }

    #[test]
    fn total_never_negative_over_any_sequence() {
        let mut tracker = tracker_with_total(0);
        for delta in [-5, 10, -100, 3, -3, -1, 7, i64::MIN] {
            tracker.apply_delta_at(fixed_now(), delta);
        }
        assert_eq!(tracker.total_minutes(), 0);
    }

    #[test]
    fn records_are_prepended_most_recent_first() {
        let mut tracker = tracker_with_total(0);
        tracker.apply_delta_at(fixed_now(), 5);
        tracker.apply_delta_at(fixed_now(), 7);

        let durations: Vec<i64> = tracker
            .sessions()
            .iter()
            .map(|record| record.duration)
            .collect();
        assert_eq!(durations, vec![7, 5]);
    }

    #[test]
    fn record_ids_stay_unique_within_one_instant() {
        let mut tracker = tracker_with_total(0);
        tracker.apply_delta_at(fixed_now(), 5);
        tracker.apply_delta_at(fixed_now(), 5);
        tracker.apply_delta_at(fixed_now(), 5);

        let mut ids: Vec<i64> = tracker.sessions().iter().map(|record| record.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn zero_delta_refreshes_undo_without_a_record() {
        let mut tracker = tracker_with_total(20);
        let first = tracker.apply_delta_at(fixed_now(), 0);

        assert_eq!(tracker.total_minutes(), 20);
        assert_eq!(first.applied, 0);
        assert!(tracker.sessions().is_empty());
        assert!(first.ripple.is_none());
        assert!(tracker.undo_context().is_some());

        let second = tracker.apply_delta_at(fixed_now(), 0);
        assert_ne!(first.undo_token, second.undo_token);
    }

    #[test]
    fn undo_restores_exact_previous_total() {
        let mut tracker = tracker_with_total(40);
        tracker.apply_delta_at(fixed_now(), -200);
        assert_eq!(tracker.total_minutes(), 0);

        assert!(tracker.undo());
        assert_eq!(tracker.total_minutes(), 40);
        assert!(tracker.sessions().is_empty());
        assert!(tracker.undo_context().is_none());
    }

    #[test]
    fn undo_without_context_is_a_noop() {
        let mut tracker = tracker_with_total(15);
        assert!(!tracker.undo());
        assert_eq!(tracker.total_minutes(), 15);
    }

    #[test]
    fn undo_only_removes_the_record_it_created() {
        let mut tracker = tracker_with_total(0);
        tracker.apply_delta_at(fixed_now(), 10);
        tracker.apply_delta_at(fixed_now(), 20);

        assert!(tracker.undo());
        assert_eq!(tracker.total_minutes(), 10);
        assert_eq!(tracker.sessions().len(), 1);
        assert_eq!(tracker.sessions()[0].duration, 10);
    }

    #[test]
    fn expiry_clears_only_the_current_context() {
        let mut tracker = tracker_with_total(0);
        let first = tracker.apply_delta_at(fixed_now(), 10);
        let second = tracker.apply_delta_at(fixed_now(), 5);

        tracker.expire_undo(first.undo_token);
        assert!(tracker.undo_context().is_some());

        tracker.expire_undo(second.undo_token);
        assert!(tracker.undo_context().is_none());

        assert!(!tracker.undo());
        assert_eq!(tracker.total_minutes(), 15);
    }

    #[test]
    fn confirm_reset_zeroes_everything() {
        let mut tracker = tracker_with_total(0);
        tracker.apply_delta_at(fixed_now(), 90);
        tracker.request_reset();

        tracker.confirm_reset();
        assert_eq!(tracker.total_minutes(), 0);
        assert!(tracker.sessions().is_empty());
        assert!(tracker.undo_context().is_none());
        assert!(!tracker.reset_pending());
    }

    #[test]
    fn cancel_reset_changes_nothing_but_the_gate() {
        let mut tracker = tracker_with_total(0);
        tracker.apply_delta_at(fixed_now(), 25);
        tracker.request_reset();
        assert!(tracker.reset_pending());

        tracker.cancel_reset();
        assert!(!tracker.reset_pending());
        assert_eq!(tracker.total_minutes(), 25);
        assert_eq!(tracker.sessions().len(), 1);
    }

    #[test]
    fn stale_undo_timer_after_reset_is_a_noop() {
        let mut tracker = tracker_with_total(0);
        let outcome = tracker.apply_delta_at(fixed_now(), 30);
        tracker.confirm_reset();

        tracker.expire_undo(outcome.undo_token);
        assert_eq!(tracker.total_minutes(), 0);
        assert!(tracker.undo_context().is_none());
    }

    #[test]
    fn ripples_get_distinct_ids_and_offset_hues() {
        let mut tracker = tracker_with_total(0);
        let first = tracker.apply_delta_at(fixed_now(), 5).ripple.unwrap();
        let second = tracker.apply_delta_at(fixed_now(), 5).ripple.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(tracker.ripples().len(), 2);
        assert!(first.color_a.starts_with("hsl("));
        assert!(first.color_a.ends_with(", 70%, 60%)"));
        assert!(first.color_b.ends_with(", 80%, 60%)"));
    }

    #[test]
    fn ripple_expiry_targets_a_single_token() {
        let mut tracker = tracker_with_total(0);
        let first = tracker.apply_delta_at(fixed_now(), 5).ripple.unwrap();
        let second = tracker.apply_delta_at(fixed_now(), 5).ripple.unwrap();

        tracker.expire_ripple(first.id);
        assert_eq!(tracker.ripples().len(), 1);
        assert_eq!(tracker.ripples()[0].id, second.id);

        tracker.expire_ripple(second.id);
        assert!(tracker.ripples().is_empty());
    }

    #[test]
    fn stored_roundtrip_keeps_total_and_sessions() {
        let mut tracker = tracker_with_total(0);
        tracker.apply_delta_at(fixed_now(), 45);
        let stored = tracker.to_stored();

        let reloaded = Tracker::from_stored(stored);
        assert_eq!(reloaded.total_minutes(), 45);
        assert_eq!(reloaded.sessions().len(), 1);
        assert!(reloaded.undo_context().is_none());
        assert!(reloaded.ripples().is_empty());
    }
}
