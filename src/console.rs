use std::io::Write;

use anyhow::{Context, Result};

use crate::tutee::Tutee;

/// Consoleに生徒の記録を表示するためのtrait。
pub trait ConsolePresenter {
    /// 生徒のリストを表示する。
    ///
    /// # Arguments
    ///
    /// * `tutees` - 表示する生徒のリスト
    fn show_tutees(&mut self, tutees: &[Tutee]) -> Result<()>;
}

/// 生徒の記録をMarkdownのlist形式で表示する。
///
/// 行頭の番号は`delete`サブコマンドで指定する1始まりのindexと対応する。
pub struct ConsoleMarkdownList<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleMarkdownList<'a, W> {
    /// 新しい`ConsoleMarkdownList`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> ConsolePresenter for ConsoleMarkdownList<'a, W> {
    // 生徒毎に1行の見出しと、持っているレッスンのlistを表示する。
    fn show_tutees(&mut self, tutees: &[Tutee]) -> Result<()> {
        for (index, tutee) in tutees.iter().enumerate() {
            let mut details = vec![];
            if !tutee.level.is_empty() {
                details.push(tutee.level.clone());
            }
            if !tutee.phone.is_empty() {
                details.push(tutee.phone.clone());
            }
            if let Some(fee) = &tutee.fee {
                details.push(format!("fee: {}", fee));
            }
            let detail_str = if details.is_empty() {
                String::new()
            } else {
                format!(" ({})", details.join("; "))
            };
            let tag_str = tutee
                .tags
                .iter()
                .map(|tag| format!(" #{}", tag))
                .collect::<String>();

            writeln!(
                self.writer,
                "{}. {}{}{}",
                index + 1,
                tutee.name,
                detail_str,
                tag_str
            )
            .with_context(|| format!("Failed to write tutee: {:?}", tutee))?;

            for lesson in &tutee.lessons {
                writeln!(self.writer, "  - {}", lesson)
                    .with_context(|| format!("Failed to write lesson: {}", lesson))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Weekday};
    use rstest::rstest;

    use super::ConsoleMarkdownList;
    use super::ConsolePresenter;
    use crate::lesson::Lesson;
    use crate::tutee::Tutee;

    /// 正常系のテスト。
    #[rstest]
    #[case::no_tutees(&[], "")]
    #[case::minimal(
        &[dummy_tutee(1)],
        "1. Amy\n",
    )]
    #[case::full_record(
        &[dummy_tutee(2)],
        "1. Bob (p5; 91234567; fee: 40) #paid\n  - Mon 10:00-11:00 Math\n  - Wed 14:00-15:00 Biology\n",
    )]
    #[case::numbering(
        &[dummy_tutee(1), dummy_tutee(2)],
        "1. Amy\n2. Bob (p5; 91234567; fee: 40) #paid\n  - Mon 10:00-11:00 Math\n  - Wed 14:00-15:00 Biology\n",
    )]
    fn test_show_tutees(#[case] input: &[Tutee], #[case] expected: &str) {
        let mut writer = Vec::new();
        let mut presenter = ConsoleMarkdownList::new(&mut writer);

        presenter.show_tutees(input).unwrap();

        assert_eq!(String::from_utf8(writer).unwrap(), expected);
    }

    /// テスト用にダミーのTuteeを作成する。
    fn dummy_tutee(pattern: u8) -> Tutee {
        match pattern {
            1 => Tutee {
                name: "Amy".to_string(),
                phone: String::new(),
                level: String::new(),
                address: String::new(),
                fee: None,
                last_payment_date: None,
                remark: String::new(),
                tags: vec![],
                lessons: vec![],
            },
            2 => Tutee {
                name: "Bob".to_string(),
                phone: "91234567".to_string(),
                level: "p5".to_string(),
                address: String::new(),
                fee: Some("40".to_string()),
                last_payment_date: None,
                remark: String::new(),
                tags: vec!["paid".to_string()],
                lessons: vec![
                    lesson(Weekday::Mon, "10:00", "11:00", "Math"),
                    lesson(Weekday::Wed, "14:00", "15:00", "Biology"),
                ],
            },
            _ => panic!("Invalid pattern: {}", pattern),
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
}
