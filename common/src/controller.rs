//! アップロード/推論コントローラ
//!
//! 状態遷移:
//! - Idle -> Previewing: ファイル選択（ピッカー / ドロップ）
//! - Previewing | Succeeded | Failed -> Predicting: 推論ボタン
//! - Predicting -> Succeeded | Failed: 推論サービスの応答
//!
//! 推論は `begin_prediction` で開始し、返されたチケットを
//! `complete_prediction` に渡して完了させる。間の非同期処理はホスト側が持つ。

use crate::error::Result;
use crate::result_view::ResultView;
use crate::state::{FileSource, ImageFile, SelectionState, Status};
use crate::surface::{PredictionClient, UploadSurface};
use crate::types::Prediction;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// 古い応答の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponsePolicy {
    /// 後に届いた応答が常に表示される
    #[default]
    LastResolvedWins,
    /// 最新の選択/リクエストに対する応答だけ表示する
    LastRequestedWins,
}

/// 推論開始時に発行されるチケット
#[derive(Debug, Clone)]
pub struct PredictionTicket<F> {
    generation: u64,
    file: F,
}

impl<F> PredictionTicket<F> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct UploadController<S: UploadSurface> {
    surface: S,
    state: SelectionState<S::File>,
    policy: ResponsePolicy,
    generation: u64,
}

impl<S: UploadSurface> UploadController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: SelectionState::default(),
            policy: ResponsePolicy::default(),
            generation: 0,
        }
    }

    pub fn with_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &SelectionState<S::File> {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// ファイルを選択する
    ///
    /// 受け付けなかった場合（画像以外のドロップ）は何も変えずに `false` を返す。
    pub fn select_file(&mut self, file: S::File, source: FileSource) -> bool {
        if !source.accepts(&file) {
            tracing::debug!(file = file.name(), mime = file.mime_type(), "ignored non-image drop");
            return false;
        }

        let was_predicting = self.state.status == Status::Predicting;
        self.generation += 1;

        self.surface.on_file_selected(&file);
        if was_predicting {
            self.surface.set_busy(false);
        }
        self.surface.hide_result();
        self.surface.show_preview(&file);

        tracing::debug!(file = file.name(), from = self.state.status.as_str(), "file selected");
        self.state.file = Some(file);
        self.state.status = Status::Previewing;
        true
    }

    /// 複数ファイルのうち先頭だけを選択する
    pub fn select_first<I>(&mut self, files: I, source: FileSource) -> bool
    where
        I: IntoIterator<Item = S::File>,
    {
        match files.into_iter().next() {
            Some(file) => self.select_file(file, source),
            None => false,
        }
    }

    /// 推論を開始する
    ///
    /// ファイル未選択、または推論中なら `None`（何もしない）。
    pub fn begin_prediction(&mut self) -> Option<PredictionTicket<S::File>> {
        if !self.state.can_predict() {
            return None;
        }
        let file = self.state.file.clone()?;

        self.generation += 1;
        self.state.status = Status::Predicting;
        self.surface.set_busy(true);
        self.surface.hide_result();

        tracing::debug!(file = file.name(), generation = self.generation, "prediction started");
        Some(PredictionTicket {
            generation: self.generation,
            file,
        })
    }

    /// 推論を完了させる
    ///
    /// 応答を画面に反映した場合 `true`。`LastRequestedWins` で古いチケットの
    /// 応答は破棄して `false` を返す。
    pub fn complete_prediction(
        &mut self,
        ticket: PredictionTicket<S::File>,
        outcome: Result<Prediction>,
    ) -> bool {
        if self.policy == ResponsePolicy::LastRequestedWins && ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarded stale prediction response"
            );
            return false;
        }

        let view = match outcome {
            Ok(prediction) => {
                tracing::debug!(
                    class = %prediction.class_name,
                    confidence = prediction.confidence,
                    "prediction succeeded"
                );
                self.state.status = Status::Succeeded;
                ResultView::from_prediction(&prediction)
            }
            Err(error) => {
                tracing::error!(file = ticket.file.name(), error = %error, "prediction failed");
                self.surface.report_error(&error);
                self.state.status = Status::Failed;
                ResultView::failure()
            }
        };

        self.surface.set_busy(false);
        self.surface.show_result(&view);
        true
    }
}

/// 推論を1回実行する（開始 → リクエスト → 完了）
///
/// 待機中は `RefCell` を借用しないので、その間の選択イベントも処理できる。
/// 開始できなかった場合は `None`。
pub async fn run_prediction<S, C>(
    controller: &RefCell<UploadController<S>>,
    client: &C,
) -> Option<Status>
where
    S: UploadSurface,
    C: PredictionClient<S::File>,
{
    let ticket = controller.borrow_mut().begin_prediction()?;
    let outcome = client.predict(ticket.file()).await;

    let mut controller = controller.borrow_mut();
    controller.complete_prediction(ticket, outcome);
    Some(controller.status())
}
