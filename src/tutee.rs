use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lesson::Lesson;

/// 1人の生徒の記録を表す構造体。
///
/// 週間スケジュールの集計では`name`と`lessons`のみを参照する。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tutee {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub last_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}
