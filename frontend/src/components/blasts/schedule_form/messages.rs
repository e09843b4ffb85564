use common::model::preview::CsvPreview;

#[derive(Clone)]
pub enum Msg {
    TemplateEdited(String),
    FileSelected(web_sys::File),
    PreviewResolved {
        seq: u64,
        outcome: Result<CsvPreview, String>,
    },
    FieldChosen(String),
}
