//! コントローラが依存する外部境界
//!
//! - UploadSurface: 画面（DOM / ターミナル）
//! - PredictionClient: 推論サービス

use crate::error::{Error, Result};
use crate::result_view::ResultView;
use crate::state::ImageFile;
use crate::types::Prediction;

/// 推論ボタンの既定ラベル
pub const DEFAULT_LABEL: &str = "Predict";
/// 推論中のラベル
pub const BUSY_LABEL: &str = "Analyzing...";

/// アップロードUIの操作面
///
/// コントローラはこのトレイト経由でのみ画面を更新する。
pub trait UploadSurface {
    type File: ImageFile + Clone;

    /// ファイル名を表示し、推論ボタンを有効化する
    fn on_file_selected(&mut self, file: &Self::File);

    /// プレビューの読み込みを開始する（完了を待たない）
    fn show_preview(&mut self, file: &Self::File);

    /// `true`: ボタン無効化＋処理中ラベル / `false`: 有効化＋既定ラベル
    fn set_busy(&mut self, busy: bool);

    fn hide_result(&mut self);

    /// 結果パネルを表示する。成功時は結果を画面中央へスクロールする。
    fn show_result(&mut self, view: &ResultView);

    /// 失敗の原因を診断用に記録する（利用者には見せない）
    fn report_error(&mut self, _error: &Error) {}
}

/// 推論サービスのクライアント
///
/// 1回の呼び出しにつき1リクエスト。リトライ・タイムアウトは持たない。
#[allow(async_fn_in_trait)]
pub trait PredictionClient<F> {
    async fn predict(&self, file: &F) -> Result<Prediction>;
}
