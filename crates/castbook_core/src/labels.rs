//! Fixed display label set.
//!
//! Every user-facing string the form shows lives here so front-ends never
//! hard-code their own wording. The list's memo line keeps its ASCII
//! `memo:` prefix.

pub const WINDOW_TITLE: &str = "店舗横断キャスト管理";
pub const LIST_HEADING: &str = "登録一覧";

pub const FIELD_STORE_NAME: &str = "店舗名";
pub const FIELD_PERSON_NAME: &str = "名前";
pub const FIELD_AGE: &str = "年齢";
pub const FIELD_NOTE: &str = "メモ";

pub const BUTTON_ADD: &str = "追加";
pub const BUTTON_UPDATE: &str = "更新";
pub const BUTTON_DELETE: &str = "削除";
pub const BUTTON_CLEAR: &str = "クリア";

/// Prefix of the second line of every rendered record block.
pub const MEMO_LINE_PREFIX: &str = "  memo: ";

pub const MISSING_INPUT_TITLE: &str = "入力不足";
pub const MISSING_INPUT_MESSAGE: &str = "店舗名と名前は必須です。";

pub const NO_SELECTION_TITLE: &str = "未選択";
pub const NO_SELECTION_UPDATE_MESSAGE: &str = "更新するレコードを選択してください。";
pub const NO_SELECTION_DELETE_MESSAGE: &str = "削除するレコードを選択してください。";

pub const CONFIRM_TITLE: &str = "確認";
pub const CONFIRM_DELETE_MESSAGE: &str = "選択したレコードを削除しますか？";

pub const STORE_ERROR_TITLE: &str = "保存エラー";
