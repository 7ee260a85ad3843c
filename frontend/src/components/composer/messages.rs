use common::compose::VariableNamespace;
use common::error::ApiError;

pub enum Msg {
    SelectClient(Option<i64>),
    SelectTemplate(Option<i64>),
    SetValue {
        namespace: VariableNamespace,
        key: String,
        value: String,
    },
    Submit,
    Sent(Result<(), ApiError>),
}
