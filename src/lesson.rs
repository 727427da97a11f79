use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// レッスンの開始時刻が終了時刻以降になっている場合のエラー。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lesson start time {start} must be earlier than end time {end}")]
pub struct InvalidLessonTimeError {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// 毎週繰り返す1回分のレッスンを表す構造体。
///
/// 順序と同一性は`(曜日, 開始時刻)`のみで決まり、終了時刻と科目名は比較に影響しない。
/// スケジュール上の衝突判定もこのキーで行う。
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawLesson")]
pub struct Lesson {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
    subject: String,
}

/// デシリアライズ時の中間表現。
///
/// 保存されたデータも`Lesson::new`の時刻の検証を通してから復元する。
#[derive(Deserialize)]
struct RawLesson {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
    subject: String,
}

impl TryFrom<RawLesson> for Lesson {
    type Error = InvalidLessonTimeError;

    fn try_from(raw: RawLesson) -> Result<Self, Self::Error> {
        Lesson::new(raw.day, raw.start, raw.end, &raw.subject)
    }
}

impl Lesson {
    /// 新しい`Lesson`を返す。
    ///
    /// 開始時刻が終了時刻以降の場合はエラーを返す。
    ///
    /// # Arguments
    ///
    /// * `day` - レッスンを行う曜日
    /// * `start` - 開始時刻
    /// * `end` - 終了時刻
    /// * `subject` - 科目名
    pub fn new(
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
        subject: &str,
    ) -> Result<Self, InvalidLessonTimeError> {
        if start >= end {
            return Err(InvalidLessonTimeError { start, end });
        }

        Ok(Self {
            day,
            start,
            end,
            subject: subject.to_string(),
        })
    }

    /// レッスンを行う曜日を返す。
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// 終了時刻を返す。
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// 科目名を返す。
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// 曜日を含まない短い表示用文字列を返す。
    ///
    /// 曜日は週間スケジュール側で日毎の見出しとして1度だけ表示するため、ここには含めない。
    pub fn condensed_string(&self) -> String {
        format!(
            "{}-{} {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.subject
        )
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.subject
        )
    }
}

impl Ord for Lesson {
    // 週はMonday始まりとして、(曜日, 開始時刻)のみで順序付ける。
    fn cmp(&self, other: &Self) -> Ordering {
        (self.day.num_days_from_monday(), self.start)
            .cmp(&(other.day.num_days_from_monday(), other.start))
    }
}

impl PartialOrd for Lesson {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Lesson {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Lesson {}
