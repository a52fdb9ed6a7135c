use weighpro::SampleSession;
use weighpro_common::RecipeSummary;

/// 表示中の画面
pub enum View {
    Home,
    Sample(SampleSession),
    Summary(Vec<RecipeSummary>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// モーダル表示するメッセージ
#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

impl Message {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self { kind: MessageKind::Info, title: title.to_string(), body: body.into() }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, title: title.to_string(), body: body.into() }
    }
}
