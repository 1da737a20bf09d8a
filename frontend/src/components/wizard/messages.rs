use common::model::draft::DraftField;

pub enum Msg {
    Edit(DraftField, String),
    Next,
    Previous,
    Submit,
    SubmitSucceeded(Option<String>),
    SubmitFailed(String),
}
