//! Fixed user-facing reply texts and error-to-reply mapping.

use crate::error::{ArgumentError, BackendError, CommandError};

macro_rules! usage_text {
    () => {
        "使用方法：\nbox <物品名称> <数量>\nbox search <关键词>\n示例：\nbox 超级补给箱 100\n备注：\n有多个相似名称时会出错，可先用 box search 查询完整名称"
    };
}

/// Reply to `box help`.
pub const USAGE_TEXT: &str = usage_text!();
/// Reply when the argument count or the amount is wrong.
pub const WRONG_PARAM_TEXT: &str = concat!("参数错误\n", usage_text!());
/// Reply when the arguments contain emoji, mentions, pictures ...
pub const NON_PLAIN_TEXT_PARAM_TEXT: &str =
    concat!("检测到非纯文本入参，请不要使用表情符号等\n", usage_text!());
/// Reply when the backend cannot be reached or answers garbage.
pub const BACKEND_UNAVAILABLE_TEXT: &str = "抽奖服务暂时无法访问，请稍后再试。";
/// Reply when the backend reports a failure; `brief` is appended if present.
pub const BACKEND_ERROR_TEXT: &str = "机器人出错了！";
/// Reply when a rendered result image cannot be read.
pub const ATTACHMENT_ERROR_TEXT: &str = "结果图片读取失败，请稍后再试。";
/// Search reply header.
pub const SEARCH_RESULT_HEADER: &str = "找到以下匹配项：";
/// Search reply when nothing matched.
pub const SEARCH_EMPTY_TEXT: &str = "未找到对应物品。";

/// Render one invocation failure as the text shown to the user.
pub fn reply_for_error(err: &CommandError) -> String {
    match err {
        CommandError::Argument(ArgumentError::NonPlainText) => NON_PLAIN_TEXT_PARAM_TEXT.to_string(),
        CommandError::Argument(ArgumentError::WrongArgumentCount) => WRONG_PARAM_TEXT.to_string(),
        CommandError::Backend(BackendError::NonOk {
            brief: Some(brief), ..
        }) if !brief.trim().is_empty() => format!("{BACKEND_ERROR_TEXT}\n{}", brief.trim()),
        CommandError::Backend(BackendError::NonOk { .. }) => BACKEND_ERROR_TEXT.to_string(),
        CommandError::Backend(_) => BACKEND_UNAVAILABLE_TEXT.to_string(),
        CommandError::Render(_) => ATTACHMENT_ERROR_TEXT.to_string(),
    }
}
