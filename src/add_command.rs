use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Utc, Weekday};
use log::info;

use crate::lesson::Lesson;
use crate::schedule::Schedule;
use crate::store::TuteeRepository;
use crate::tutee::Tutee;

/// `add`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct AddArgs {
    #[clap(short = 'n', long = "name", help = "Name of the tutee")]
    name: String,

    #[clap(short = 'p', long = "phone", help = "Phone number of the tutee")]
    phone: Option<String>,

    #[clap(long = "level", help = "School level of the tutee, e.g. p5")]
    level: Option<String>,

    #[clap(short = 'a', long = "address", help = "Address of the tutee")]
    address: Option<String>,

    #[clap(long = "fee", help = "Fee per lesson; records the payment date")]
    fee: Option<String>,

    #[clap(short = 'r', long = "remark", help = "Free-text remark")]
    remark: Option<String>,

    #[clap(short = 't', long = "tag", help = "Tag for the tutee; repeatable")]
    tags: Vec<String>,

    #[clap(
        short = 'l',
        long = "lesson",
        help = "Weekly lesson in the format 'DAY HH:MM-HH:MM SUBJECT'; repeatable",
        parse(try_from_str = parse_lesson),
    )]
    lessons: Vec<Lesson>,
}

pub struct AddCommand<'a, T: TuteeRepository> {
    store: &'a T,
}

impl<'a, T: TuteeRepository> AddCommand<'a, T> {
    /// 新しい`AddCommand`を返す。
    ///
    /// # Arguments
    /// * `store` - 生徒の記録を読み書きするリポジトリ
    pub fn new(store: &'a T) -> Self {
        Self { store }
    }

    /// `add`サブコマンドの処理を行う。
    ///
    /// 追加後の生徒リスト全体で週間スケジュールを再構築し、レッスンの衝突を検査する。
    /// 衝突があった場合は何も保存せずにエラーを返すため、保存済みの記録は変化しない。
    ///
    /// # Arguments
    ///
    /// * `add` - `add`サブコマンドの引数
    pub fn run(&self, add: AddArgs) -> Result<Tutee> {
        let mut tutees = self.store.load_tutees().context("Failed to load tutees")?;
        if tutees.iter().any(|tutee| tutee.name == add.name) {
            bail!("A tutee named {} already exists", add.name);
        }

        // 料金が記録された場合は、その時点を支払日として残す
        let last_payment_date = add.fee.as_ref().map(|_| Utc::now());
        let tutee = Tutee {
            name: add.name,
            phone: add.phone.unwrap_or_default(),
            level: add.level.unwrap_or_default(),
            address: add.address.unwrap_or_default(),
            fee: add.fee,
            last_payment_date,
            remark: add.remark.unwrap_or_default(),
            tags: add.tags,
            lessons: add.lessons,
        };
        tutees.push(tutee.clone());

        Schedule::from_tutees(&tutees).context("Failed to rebuild the weekly schedule")?;
        self.store
            .save_tutees(&tutees)
            .context("Failed to save tutees")?;
        info!("Added tutee: {}", tutee.name);

        Ok(tutee)
    }
}

/// レッスンをパースする。
///
/// 形式は`DAY HH:MM-HH:MM SUBJECT`で、曜日は`mon`や`Monday`のような表記を受け付ける。
fn parse_lesson(s: &str) -> Result<Lesson> {
    let (day_str, rest) = s
        .trim()
        .split_once(' ')
        .with_context(|| format!("Expected 'DAY HH:MM-HH:MM SUBJECT', got: {}", s))?;
    let (range_str, subject) = rest
        .trim_start()
        .split_once(' ')
        .with_context(|| format!("Expected 'DAY HH:MM-HH:MM SUBJECT', got: {}", s))?;

    let day = day_str
        .parse::<Weekday>()
        .ok()
        .with_context(|| format!("Failed to parse day of week: {}", day_str))?;
    let (start_str, end_str) = range_str
        .split_once('-')
        .with_context(|| format!("Expected a time range 'HH:MM-HH:MM', got: {}", range_str))?;
    let start = NaiveTime::parse_from_str(start_str, "%H:%M")
        .with_context(|| format!("Failed to parse start time: {}", start_str))?;
    let end = NaiveTime::parse_from_str(end_str, "%H:%M")
        .with_context(|| format!("Failed to parse end time: {}", end_str))?;

    let subject = subject.trim();
    if subject.is_empty() {
        bail!("Expected a subject after the time range, got: {}", s);
    }

    Ok(Lesson::new(day, start, end, subject)?)
}
