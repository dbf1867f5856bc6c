//! # Habitrack Core Library
//!
//! This library provides the core business logic for the Habitrack habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Habit Model**: daily outcome statuses with toggle semantics and a
//!   sparse per-day log (absent key = no record)
//! - **Tracker**: the single-writer repository over the habit collection,
//!   persisted whole after every mutation
//! - **Streak / Calendar**: pure derived views over one habit's log with
//!   an explicit reference date
//! - **Advisor**: external text-generation boundary that always returns
//!   usable text, falling back on any failure
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: collection owner and mutation mediator
//! - [`HabitStore`]: whole-collection JSON persistence
//! - [`Config`]: application configuration management
//! - [`GeminiAdvisor`]: advisory gateway

pub mod advisor;
pub mod calendar;
pub mod error;
pub mod habit;
pub mod storage;
pub mod streak;
pub mod tracker;

pub use advisor::{AdviceSlot, GeminiAdvisor, RequestToken};
pub use calendar::{history_grid, DayCell, MonthGrid, HISTORY_MONTHS};
pub use error::{AdvisorError, ConfigError, CoreError, StoreError};
pub use habit::{DailyStatus, HabitCategory, HabitDefinition, UserHabit};
pub use storage::{Config, HabitStore};
pub use streak::current_streak;
pub use tracker::HabitTracker;
