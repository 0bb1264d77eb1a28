use clap::{Parser, Subcommand, ValueEnum};
use photo_classify_common::ResponsePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-classify")]
#[command(about = "画像を推論サービスへ送信して分類結果を表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を1枚推論
    Predict {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 推論サービスのURL（設定ファイル・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話モード（画像選択と推論を繰り返す）
    Session {
        /// 推論サービスのURL（設定ファイル・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定を管理
    Config {
        /// 推論サービスのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 古い応答の扱いを設定
        #[arg(long)]
        set_policy: Option<PolicyArg>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// 後に届いた応答を表示（既定）
    LastResolved,
    /// 最新リクエストの応答だけ表示
    LastRequested,
}

impl From<PolicyArg> for ResponsePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LastResolved => ResponsePolicy::LastResolvedWins,
            PolicyArg::LastRequested => ResponsePolicy::LastRequestedWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_predict() {
        let cli = Cli::parse_from(["photo-classify", "predict", "leaf.jpg", "--json"]);
        match cli.command {
            Commands::Predict { image, endpoint, json } => {
                assert_eq!(image, PathBuf::from("leaf.jpg"));
                assert_eq!(endpoint, None);
                assert!(json);
            }
            _ => panic!("predict として解析されるはず"),
        }
    }

    #[test]
    fn test_parse_config_policy() {
        let cli = Cli::parse_from(["photo-classify", "config", "--set-policy", "last-requested"]);
        match cli.command {
            Commands::Config { set_policy: Some(policy), .. } => {
                assert_eq!(ResponsePolicy::from(policy), ResponsePolicy::LastRequestedWins);
            }
            _ => panic!("config として解析されるはず"),
        }
    }
}
