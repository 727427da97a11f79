use anyhow::{bail, Context, Result};
use log::info;

use crate::store::TuteeRepository;
use crate::tutee::Tutee;

/// `delete`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct DeleteArgs {
    #[clap(help = "Index of the tutee shown by the list subcommand (1-based)")]
    index: usize,
}

pub struct DeleteCommand<'a, T: TuteeRepository> {
    store: &'a T,
}

impl<'a, T: TuteeRepository> DeleteCommand<'a, T> {
    /// 新しい`DeleteCommand`を返す。
    ///
    /// # Arguments
    /// * `store` - 生徒の記録を読み書きするリポジトリ
    pub fn new(store: &'a T) -> Self {
        Self { store }
    }

    /// `delete`サブコマンドの処理を行う。
    ///
    /// `list`サブコマンドで表示される1始まりのindexで対象の生徒を指定する。
    ///
    /// # Arguments
    ///
    /// * `delete` - `delete`サブコマンドの引数
    pub fn run(&self, delete: DeleteArgs) -> Result<Tutee> {
        let mut tutees = self.store.load_tutees().context("Failed to load tutees")?;
        if delete.index == 0 || delete.index > tutees.len() {
            bail!("The tutee index provided is invalid: {}", delete.index);
        }

        let removed = tutees.remove(delete.index - 1);
        self.store
            .save_tutees(&tutees)
            .context("Failed to save tutees")?;
        info!("Deleted tutee: {}", removed.name);

        Ok(removed)
    }
}
