use clap::Args;
use folio_models::contact::FieldId;

pub mod draft;
pub mod submit;
pub mod theme;
pub mod validate;

/// Field values given on the command line. Fields that are not given keep
/// their current value.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
}

impl FieldArgs {
    /// Returns the given values in form order.
    pub fn changes(self) -> Vec<(FieldId, String)> {
        [
            (FieldId::Name, self.name),
            (FieldId::Email, self.email),
            (FieldId::Subject, self.subject),
            (FieldId::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| Some((field, value?)))
        .collect()
    }
}
