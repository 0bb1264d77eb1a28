//! 選択状態の型定義

/// 推論対象として扱えるファイル
///
/// ブラウザでは `web_sys::File`、CLIではローカルファイルをラップする。
pub trait ImageFile {
    /// 表示用ファイル名
    fn name(&self) -> &str;

    /// MIMEタイプ（例: "image/jpeg"）
    fn mime_type(&self) -> &str;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

/// ファイルの入力経路
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// ファイル選択ダイアログ（ホスト側で image/* に絞り込み済み）
    Picker,
    /// ドロップゾーンへのドラッグ&ドロップ
    Drop,
}

impl FileSource {
    /// この経路で受け付けるファイルか
    ///
    /// ドロップは MIME タイプが `image/` で始まるものだけ受け付ける。
    pub fn accepts<F: ImageFile>(&self, file: &F) -> bool {
        match self {
            FileSource::Picker => true,
            FileSource::Drop => file.is_image(),
        }
    }
}

/// 選択ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Previewing,
    Predicting,
    Succeeded,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Previewing => "previewing",
            Status::Predicting => "predicting",
            Status::Succeeded => "succeeded",
            Status::Failed => "failed",
        }
    }
}

/// 選択中のファイルとステータス
#[derive(Debug, Clone)]
pub struct SelectionState<F> {
    pub(crate) file: Option<F>,
    pub(crate) status: Status,
}

impl<F> Default for SelectionState<F> {
    fn default() -> Self {
        Self {
            file: None,
            status: Status::Idle,
        }
    }
}

impl<F> SelectionState<F> {
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// 推論を開始できるか（ファイルあり、かつ推論中でない）
    pub fn can_predict(&self) -> bool {
        self.file.is_some() && self.status != Status::Predicting
    }
}
