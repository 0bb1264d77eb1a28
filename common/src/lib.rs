//! Photo Classify Common Library
//!
//! CLIとWeb(WASM)で共有されるアップロード/推論コントローラと型

pub mod controller;
pub mod error;
pub mod nav;
pub mod parser;
pub mod result_view;
pub mod state;
pub mod surface;
pub mod types;

pub use controller::{run_prediction, PredictionTicket, ResponsePolicy, UploadController};
pub use error::{Error, Result};
pub use nav::active_section;
pub use parser::{parse_http_response, parse_prediction_response};
pub use result_view::{ResultView, Tone, FAILURE_MESSAGE};
pub use state::{FileSource, ImageFile, SelectionState, Status};
pub use surface::{PredictionClient, UploadSurface, BUSY_LABEL, DEFAULT_LABEL};
pub use types::Prediction;
