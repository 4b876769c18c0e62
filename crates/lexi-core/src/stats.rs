//! XP, level, streak and the seven-day history.
//!
//! Every transition is a pure function of the previous [`UserStats`] and the
//! current date; [`StatsTracker`] applies them and hands the result to a
//! [`StatsStore`].

use chrono::{Days, NaiveDate};
use lexi_types::{DayRecord, UserStats};

use crate::error::StoreError;

pub const XP_PER_LEVEL: u32 = 500;
pub const HISTORY_DAYS: u64 = 7;

pub fn level_for(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Stats of a first-ever session
pub fn initial(today: NaiveDate) -> UserStats {
    UserStats {
        words_learned: Default::default(),
        xp: 0,
        streak: 1,
        level: 1,
        history: history_window(today, &[]),
        last_login: Some(today),
    }
}

/// The seven days ending at `today`, oldest first, keeping XP already
/// recorded for those days
pub fn history_window(today: NaiveDate, previous: &[DayRecord]) -> Vec<DayRecord> {
    (0..HISTORY_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|day| DayRecord {
            date: day.format("%a").to_string(),
            full_date: day,
            xp: previous
                .iter()
                .find(|record| record.full_date == day)
                .map(|record| record.xp)
                .unwrap_or(0),
        })
        .collect()
}

/// Session start: move the history window to `today` and update the streak
pub fn roll_forward(prev: &UserStats, today: NaiveDate) -> UserStats {
    let streak = match prev.last_login {
        None => 1,
        Some(last) if last == today => prev.streak,
        Some(last) => match (today - last).num_days().abs() {
            1 => prev.streak + 1,
            _ => 1,
        },
    };

    UserStats {
        history: history_window(today, &prev.history),
        level: level_for(prev.xp),
        streak,
        last_login: Some(today),
        ..prev.clone()
    }
}

/// Credit `amount` XP to today's bucket and the total
pub fn add_xp(prev: &UserStats, amount: u32, today: NaiveDate) -> UserStats {
    let mut history = prev.history.clone();
    if !history.iter().any(|record| record.full_date == today) {
        history = history_window(today, &history);
    }

    for record in history.iter_mut().filter(|r| r.full_date == today) {
        record.xp = record.xp.saturating_add(amount);
    }

    let xp = prev.xp.saturating_add(amount);

    UserStats {
        xp,
        level: level_for(xp),
        history,
        ..prev.clone()
    }
}

pub fn add_words_learned<I, S>(prev: &UserStats, words: I) -> UserStats
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut next = prev.clone();
    next.words_learned
        .extend(words.into_iter().map(|w| w.into().to_lowercase()));
    next
}

/// External persistence for [`UserStats`]
pub trait StatsStore: Send + Sync {
    /// `Ok(None)` when nothing was stored yet
    fn load(&self) -> Result<Option<UserStats>, StoreError>;

    fn save(&self, stats: &UserStats) -> Result<(), StoreError>;
}

/// Owns the current stats and persists after every transition.
///
/// Store failures are logged and ignored; the in-memory value stays
/// authoritative for the session.
pub struct StatsTracker<S: StatsStore> {
    stats: UserStats,
    pub(crate) store: S,
}

impl<S: StatsStore> StatsTracker<S> {
    /// Read the stored stats once and start a session for `today`
    pub fn open(store: S, today: NaiveDate) -> Self {
        let stats = match store.load() {
            Ok(Some(stats)) => roll_forward(&stats, today),
            Ok(None) => {
                tracing::info!("No stored stats, starting fresh");
                initial(today)
            }
            Err(e) => {
                tracing::warn!("Failed to load stats: {}", e);
                initial(today)
            }
        };

        let mut tracker = Self {
            stats: UserStats::default(),
            store,
        };
        tracker.commit(stats);
        tracker
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn start_session(&mut self, today: NaiveDate) {
        let next = roll_forward(&self.stats, today);
        self.commit(next);
    }

    pub fn add_xp(&mut self, amount: u32, today: NaiveDate) {
        let next = add_xp(&self.stats, amount, today);
        self.commit(next);
    }

    pub fn add_words_learned<I, W>(&mut self, words: I)
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let next = add_words_learned(&self.stats, words);
        self.commit(next);
    }

    fn commit(&mut self, next: UserStats) {
        self.stats = next;
        if let Err(e) = self.store.save(&self.stats) {
            tracing::warn!("Failed to save stats: {}", e);
        }
    }
}
