use anyhow::{Context, Result};
use log::info;

use crate::console::ConsolePresenter;
use crate::store::TuteeRepository;

pub struct ListCommand<'a, T: TuteeRepository> {
    store: &'a T,
}

impl<'a, T: TuteeRepository> ListCommand<'a, T> {
    /// 新しい`ListCommand`を返す。
    ///
    /// # Arguments
    /// * `store` - 生徒の記録を読み書きするリポジトリ
    pub fn new(store: &'a T) -> Self {
        Self { store }
    }

    /// `list`サブコマンドの処理を行う。
    ///
    /// 保存済みの生徒のリストを保存されている順に表示する。
    ///
    /// # Arguments
    ///
    /// * `presenter` - 生徒のリストを表示するpresenter
    pub fn run(&self, presenter: &mut impl ConsolePresenter) -> Result<()> {
        let tutees = self.store.load_tutees().context("Failed to load tutees")?;
        info!("Listing {} tutees", tutees.len());

        presenter
            .show_tutees(&tutees)
            .context("Failed to show tutees")?;

        Ok(())
    }
}
