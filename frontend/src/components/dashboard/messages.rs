use common::model::record::SubmissionRecord;

pub enum Msg {
    Refresh,
    Loaded(Vec<SubmissionRecord>),
    LoadFailed(String),
    ViewRecord(String),
    RecordLoaded(SubmissionRecord),
    RecordLoadFailed(String),
    CloseModal,
    Download,
}
