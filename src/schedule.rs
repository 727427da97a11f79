use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use thiserror::Error;

use crate::lesson::Lesson;
use crate::tutee::Tutee;

/// レッスンが既存のスケジュールと衝突した場合のエラー。
///
/// 衝突したレッスンを保持し、利用者向けのメッセージを組み立てる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Schedule clash for the lesson: {0}")]
pub struct ScheduleClashError(pub Lesson);

/// 1週間分のレッスンを集約したスケジュールを表す構造体。
///
/// `(曜日, 開始時刻)`をキーとしてレッスンから生徒名への整列済みマップを保持する。
/// 同一キーのレッスンは衝突として扱い、登録を拒否する。
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    sorted_lessons: BTreeMap<Lesson, String>,
}

impl Schedule {
    /// 空の`Schedule`を返す。
    pub fn new() -> Self {
        Self::default()
    }

    /// 生徒のリストから`Schedule`を構築する。
    ///
    /// 生徒とレッスンを与えられた順に走査し、最初に衝突を検知した時点で
    /// そのレッスンを持つエラーを返す。衝突がある場合、部分的なスケジュールは返さない。
    ///
    /// # Arguments
    ///
    /// * `tutees` - スケジュールへ集約する生徒のリスト
    pub fn from_tutees(tutees: &[Tutee]) -> Result<Self, ScheduleClashError> {
        let mut schedule = Self::new();
        for tutee in tutees {
            for lesson in &tutee.lessons {
                schedule.add(lesson.clone(), &tutee.name)?;
            }
        }

        Ok(schedule)
    }

    /// レッスンと生徒名の組をスケジュールへ追加する。
    ///
    /// 同じ`(曜日, 開始時刻)`のレッスンが登録済みの場合は衝突エラーを返し、
    /// スケジュールは変更しない。
    ///
    /// # Arguments
    ///
    /// * `lesson` - 追加するレッスン
    /// * `tutee_name` - レッスンを受ける生徒の名前
    pub fn add(&mut self, lesson: Lesson, tutee_name: &str) -> Result<(), ScheduleClashError> {
        if self.sorted_lessons.contains_key(&lesson) {
            return Err(ScheduleClashError(lesson));
        }
        self.sorted_lessons.insert(lesson, tutee_name.to_string());

        Ok(())
    }

    /// レッスンと生徒名の組をスケジュールから取り除く。
    ///
    /// キーと登録済みの生徒名の両方が一致した場合のみ取り除く。
    /// 対象が存在しない場合は何もせずに`false`を返す。
    pub fn remove(&mut self, lesson: &Lesson, tutee_name: &str) -> bool {
        match self.sorted_lessons.get(lesson) {
            Some(owner) if owner == tutee_name => {
                self.sorted_lessons.remove(lesson);
                true
            }
            _ => false,
        }
    }

    /// スケジュールを空にする。
    pub fn clear(&mut self) {
        self.sorted_lessons.clear();
    }

    /// 保持しているマップのコピーを返す。
    ///
    /// 返されたコピーを変更してもスケジュール本体には影響しない。
    pub fn sorted_lessons(&self) -> BTreeMap<Lesson, String> {
        self.sorted_lessons.clone()
    }
}

impl fmt::Display for Schedule {
    // 整列済みのレッスンを曜日毎にまとめた週間の予定表として表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sorted_lessons.is_empty() {
            return write!(f, "There are no lessons scheduled for the week.");
        }

        let mut current_day: Option<Weekday> = None;
        for (lesson, tutee_name) in &self.sorted_lessons {
            if current_day != Some(lesson.day()) {
                current_day = Some(lesson.day());
                writeln!(f)?;
                writeln!(f, "{}", lesson.day())?;
            }
            writeln!(f, "\u{2022} {}({})", lesson.condensed_string(), tutee_name)?;
        }

        Ok(())
    }
}

impl PartialEq for Schedule {
    // キーの同一性は(曜日, 開始時刻)のみなので、終了時刻と科目名まで含めて比較する。
    fn eq(&self, other: &Self) -> bool {
        self.sorted_lessons.len() == other.sorted_lessons.len()
            && self
                .sorted_lessons
                .iter()
                .zip(other.sorted_lessons.iter())
                .all(|((lesson, name), (other_lesson, other_name))| {
                    lesson == other_lesson
                        && lesson.end() == other_lesson.end()
                        && lesson.subject() == other_lesson.subject()
                        && name == other_name
                })
    }
}

impl Eq for Schedule {}
