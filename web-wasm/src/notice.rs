//! ユーザーへの通知

use health_tracker_common::Error;

/// エラーをブロッキングのダイアログで通知
pub fn notify(error: &Error) {
    if !error.is_input_error() {
        gloo::console::error!(format!("{:?}", error));
    }
    gloo::dialogs::alert(&error.to_string());
}
