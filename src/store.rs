use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::tutee::Tutee;

/// 生徒の記録を読み書きするためのtrait。
#[cfg_attr(test, mockall::automock)]
pub trait TuteeRepository {
    /// 保存済みの生徒のリストを読み込む。
    fn load_tutees(&self) -> Result<Vec<Tutee>>;

    /// 生徒のリストを保存する。
    ///
    /// # Arguments
    ///
    /// * `tutees` - 保存する生徒のリスト
    fn save_tutees(&self, tutees: &[Tutee]) -> Result<()>;
}

/// 生徒の記録をJSONファイルとして読み書きするストア。
pub struct JsonTuteeStore {
    path: PathBuf,
}

impl JsonTuteeStore {
    /// 新しい`JsonTuteeStore`を返す。
    ///
    /// パスが指定されていない場合は、データディレクトリ配下の既定のファイルを利用する。
    ///
    /// # Arguments
    ///
    /// * `path` - データファイルのパス
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => dirs::data_dir()
                .context("Failed to resolve the user data directory")?
                .join("tracko")
                .join("tutees.json"),
        };

        Ok(Self { path })
    }
}

impl TuteeRepository for JsonTuteeStore {
    // ファイルが存在しない場合は空のリストとして扱う。
    fn load_tutees(&self) -> Result<Vec<Tutee>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tutee file: {}", self.path.display()))?;
        let tutees = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse tutee file: {}", self.path.display()))?;

        Ok(tutees)
    }

    fn save_tutees(&self, tutees: &[Tutee]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(tutees).context("Failed to serialize tutees")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write tutee file: {}", self.path.display()))?;
        info!("Saved {} tutees to {}", tutees.len(), self.path.display());

        Ok(())
    }
}
