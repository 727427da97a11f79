use anyhow::{Context, Result};
use log::info;

use crate::schedule::Schedule;
use crate::store::TuteeRepository;

pub struct ScheduleCommand<'a, T: TuteeRepository> {
    store: &'a T,
}

impl<'a, T: TuteeRepository> ScheduleCommand<'a, T> {
    /// 新しい`ScheduleCommand`を返す。
    ///
    /// # Arguments
    /// * `store` - 生徒の記録を読み書きするリポジトリ
    pub fn new(store: &'a T) -> Self {
        Self { store }
    }

    /// `schedule`サブコマンドの処理を行う。
    ///
    /// 保存済みの生徒リストから週間スケジュールを毎回構築し直し、予定表の文字列を返す。
    /// レッスンが衝突している場合はエラーを返す。
    pub fn run(&self) -> Result<String> {
        let tutees = self.store.load_tutees().context("Failed to load tutees")?;
        let schedule = Schedule::from_tutees(&tutees)
            .context("Failed to build the weekly schedule")?;
        info!(
            "Built the weekly schedule with {} lessons",
            schedule.sorted_lessons().len()
        );

        Ok(schedule.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Weekday};

    use super::ScheduleCommand;
    use crate::lesson::Lesson;
    use crate::store::MockTuteeRepository;
    use crate::tutee::Tutee;

    /// テスト用に`Tutee`を作成する。
    fn dummy_tutee(name: &str, lessons: Vec<Lesson>) -> Tutee {
        Tutee {
            name: name.to_string(),
            phone: String::new(),
            level: String::new(),
            address: String::new(),
            fee: None,
            last_payment_date: None,
            remark: String::new(),
            tags: vec![],
            lessons,
        }
    }

    /// テスト用に`Lesson`を作成する。
    fn lesson(day: Weekday, start: &str, end: &str, subject: &str) -> Lesson {
        Lesson::new(
            day,
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            subject,
        )
        .unwrap()
    }

    /// 生徒のリストから予定表の文字列を構築できることを確認する。
    #[test]
    fn test_schedule_command() {
        let mut store = MockTuteeRepository::new();
        store.expect_load_tutees().times(1).returning(|| {
            Ok(vec![
                dummy_tutee("Amy", vec![lesson(Weekday::Mon, "10:00", "11:00", "Math")]),
                dummy_tutee("Bob", vec![lesson(Weekday::Mon, "14:00", "15:00", "Biology")]),
            ])
        });

        let command = ScheduleCommand::new(&store);
        let agenda = command.run().unwrap();

        assert_eq!(
            agenda,
            "\nMon\n\u{2022} 10:00-11:00 Math(Amy)\n\u{2022} 14:00-15:00 Biology(Bob)\n"
        );
    }

    /// 生徒がいない場合に固定文言を返すことを確認する。
    #[test]
    fn test_schedule_command_no_lessons() {
        let mut store = MockTuteeRepository::new();
        store
            .expect_load_tutees()
            .times(1)
            .returning(|| Ok(vec![]));

        let command = ScheduleCommand::new(&store);
        let agenda = command.run().unwrap();

        assert_eq!(agenda, "There are no lessons scheduled for the week.");
    }

    /// レッスンが衝突している場合にエラーになることを確認する。
    #[test]
    fn test_schedule_command_clash() {
        let mut store = MockTuteeRepository::new();
        store.expect_load_tutees().times(1).returning(|| {
            Ok(vec![
                dummy_tutee("Amy", vec![lesson(Weekday::Mon, "10:00", "11:00", "Math")]),
                dummy_tutee("Bob", vec![lesson(Weekday::Mon, "10:00", "11:00", "Math")]),
            ])
        });

        let command = ScheduleCommand::new(&store);
        let result = command.run();

        assert!(result.is_err());
    }
}
